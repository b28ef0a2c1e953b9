//! Password generation.
//!
//! [`generate`] draws uniformly from an alphabet. [`enforce`] wraps it so the
//! result carries at least one character of every required class: a direct
//! draw, then up to [`MAX_RETRIES`] redraws, then an explicit construction
//! that places one character per class and shuffles.

use log::debug;
use zeroize::Zeroizing;

use super::charset::{Alphabet, ClassSet};
use super::password::Password;
use crate::error::{Error, Result};
use crate::rand::{EntropySource, SecureRand};

/// Redraws attempted after the first draw misses a required class.
pub const MAX_RETRIES: usize = 100;

/// Draw `length` characters from `alphabet`, one 32-bit draw per character.
pub fn generate<S: EntropySource>(
    rng: &mut SecureRand<S>,
    alphabet: &[char],
    length: usize,
) -> Result<Zeroizing<Vec<char>>> {
    if alphabet.is_empty() {
        return Err(Error::EmptyAlphabet);
    }

    let mut draws = Zeroizing::new(vec![0u32; length]);
    rng.fill_u32(&mut draws)?;

    Ok(Zeroizing::new(
        draws
            .iter()
            .map(|&r| alphabet[r as usize % alphabet.len()])
            .collect(),
    ))
}

/// Generate a password of `length` characters containing every class in `required`.
pub fn enforce<S: EntropySource>(
    rng: &mut SecureRand<S>,
    alphabet: &Alphabet,
    length: usize,
    required: ClassSet,
) -> Result<Password> {
    // No draw of this length can ever cover every class.
    if length < required.len() {
        return Err(Error::LengthTooShortForRequirements {
            length,
            required: required.len(),
        });
    }

    let chars = generate(rng, alphabet.chars(), length)?;
    if required.all_present(&chars) {
        return Ok(Password::from_chars(&chars));
    }

    for attempt in 1..=MAX_RETRIES {
        let chars = generate(rng, alphabet.chars(), length)?;
        if required.all_present(&chars) {
            debug!("class coverage met on retry {attempt}");
            return Ok(Password::from_chars(&chars));
        }
    }

    debug!(
        "no draw covered all {} classes after {MAX_RETRIES} retries, constructing",
        required.len()
    );
    force_requirements(rng, alphabet, length, required)
}

/// One character per required class plus `length - |required|` from the
/// full alphabet, shuffled together.
pub(crate) fn force_requirements<S: EntropySource>(
    rng: &mut SecureRand<S>,
    alphabet: &Alphabet,
    length: usize,
    required: ClassSet,
) -> Result<Password> {
    if length < required.len() {
        return Err(Error::LengthTooShortForRequirements {
            length,
            required: required.len(),
        });
    }

    let mut chars = Zeroizing::new(Vec::with_capacity(length));
    chars.extend_from_slice(&generate(rng, alphabet.chars(), length - required.len())?);

    for class in required.iter() {
        let pool = alphabet.class_chars(class);
        chars.push(pool[rng.below(pool.len())?]);
    }

    shuffle(rng, &mut chars)?;
    Ok(Password::from_chars(&chars))
}

/// Fisher-Yates, last index down to 1, each swap partner uniform in `0..=i`.
pub fn shuffle<S: EntropySource, T>(rng: &mut SecureRand<S>, items: &mut [T]) -> Result<()> {
    for i in (1..items.len()).rev() {
        let j = rng.below(i + 1)?;
        items.swap(i, j);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::CharacterClass;
    use crate::rand::testing::{Scripted, Unavailable};

    fn lower_digit() -> ClassSet {
        ClassSet::empty()
            .with(CharacterClass::Lowercase)
            .with(CharacterClass::Digit)
    }

    #[test]
    fn generate_maps_draws_modulo_alphabet() {
        let mut rng = SecureRand::with_source(Scripted::new(vec![0, 1, 2, 3, 5]));
        let chars = generate(&mut rng, &['a', 'b', 'c'], 5).unwrap();
        assert_eq!(chars.iter().collect::<String>(), "abcac");
    }

    #[test]
    fn generate_rejects_empty_alphabet() {
        let mut rng = SecureRand::new();
        assert_eq!(generate(&mut rng, &[], 4), Err(Error::EmptyAlphabet));
    }

    #[test]
    fn first_covering_draw_is_returned() {
        let alphabet = Alphabet::build(lower_digit(), false).unwrap();
        let mut rng = SecureRand::with_source(Scripted::new(vec![0, 26]));
        let pass = enforce(&mut rng, &alphabet, 2, lower_digit()).unwrap();
        assert_eq!(pass.as_str(), "a0");
    }

    #[test]
    fn retry_returns_first_satisfying_draw() {
        let alphabet = Alphabet::build(lower_digit(), false).unwrap();
        // "ab" misses the digit class, "0a" covers both.
        let mut rng = SecureRand::with_source(Scripted::new(vec![0, 1, 26, 0]));
        let pass = enforce(&mut rng, &alphabet, 2, lower_digit()).unwrap();
        assert_eq!(pass.as_str(), "0a");
    }

    #[test]
    fn exhausted_retries_fall_back_to_construction() {
        let alphabet = Alphabet::build(lower_digit(), false).unwrap();
        // Every draw lands on 'a', so only the construction can place a digit.
        let mut rng = SecureRand::with_source(Scripted::new(vec![0]));
        let pass = enforce(&mut rng, &alphabet, 3, lower_digit()).unwrap();
        assert_eq!(pass.len(), 3);
        assert_eq!(pass.as_str(), "a0a");
    }

    #[test]
    fn construction_uses_stripped_class_alphabet() {
        let alphabet = Alphabet::build(lower_digit(), true).unwrap();
        let mut rng = SecureRand::with_source(Scripted::new(vec![0]));
        let pass = force_requirements(&mut rng, &alphabet, 4, lower_digit()).unwrap();
        let chars: Vec<char> = pass.as_str().chars().collect();
        assert_eq!(chars.len(), 4);
        assert!(chars.contains(&'2'));
        assert!(!chars.contains(&'0'));
    }

    #[test]
    fn construction_places_one_per_class() {
        let classes = ClassSet::all();
        let alphabet = Alphabet::build(classes, false).unwrap();
        let mut rng = SecureRand::new();
        for _ in 0..200 {
            let pass = force_requirements(&mut rng, &alphabet, 4, classes).unwrap();
            let chars: Vec<char> = pass.as_str().chars().collect();
            for class in classes.iter() {
                let hits = chars.iter().filter(|&&c| class.matches(c)).count();
                assert_eq!(hits, 1, "{} in {pass:?}", class.name());
            }
        }
    }

    #[test]
    fn too_short_for_requirements() {
        let alphabet = Alphabet::build(ClassSet::all(), false).unwrap();
        let mut rng = SecureRand::new();
        assert_eq!(
            enforce(&mut rng, &alphabet, 3, ClassSet::all()),
            Err(Error::LengthTooShortForRequirements {
                length: 3,
                required: 4
            })
        );
    }

    #[test]
    fn no_requirements_returns_direct_draw() {
        let alphabet = Alphabet::build(lower_digit(), false).unwrap();
        let mut rng = SecureRand::with_source(Scripted::new(vec![1, 2, 3]));
        let pass = enforce(&mut rng, &alphabet, 3, ClassSet::empty()).unwrap();
        assert_eq!(pass.as_str(), "bcd");
    }

    #[test]
    fn unavailable_source_is_fatal() {
        let alphabet = Alphabet::build(lower_digit(), false).unwrap();
        let mut rng = SecureRand::with_source(Unavailable);
        assert!(matches!(
            enforce(&mut rng, &alphabet, 12, lower_digit()),
            Err(Error::RandomSourceUnavailable(_))
        ));
    }

    #[test]
    fn shuffle_keeps_every_element() {
        let mut rng = SecureRand::new();
        let mut items: Vec<u32> = (0..64).collect();
        shuffle(&mut rng, &mut items).unwrap();
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..64).collect::<Vec<_>>());
    }

    #[test]
    fn shuffle_swaps_from_the_back() {
        // j = 0 at every step rotates the first element to the back.
        let mut rng = SecureRand::with_source(Scripted::new(vec![0]));
        let mut items = ['a', 'b', 'c', 'd'];
        shuffle(&mut rng, &mut items).unwrap();
        assert_eq!(items, ['b', 'c', 'd', 'a']);
    }
}
