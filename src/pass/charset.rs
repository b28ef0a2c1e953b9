//! Character classes and alphabet building for password generation.

use crate::error::{Error, Result};

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Visually confusable characters removed by `exclude_ambiguous`.
pub const AMBIGUOUS: &str = "il1Lo0O";

#[inline]
pub fn is_ambiguous(c: char) -> bool {
    AMBIGUOUS.contains(c)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Digit,
    Symbol,
}

impl CharacterClass {
    /// All classes in canonical order.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Digit,
        CharacterClass::Symbol,
    ];

    pub fn alphabet(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Digit => DIGITS,
            CharacterClass::Symbol => SYMBOLS,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => "lowercase",
            CharacterClass::Uppercase => "uppercase",
            CharacterClass::Digit => "digit",
            CharacterClass::Symbol => "symbol",
        }
    }

    /// Whether `c` belongs to this class.
    #[inline]
    pub fn matches(self, c: char) -> bool {
        match self {
            CharacterClass::Lowercase => c.is_ascii_lowercase(),
            CharacterClass::Uppercase => c.is_ascii_uppercase(),
            CharacterClass::Digit => c.is_ascii_digit(),
            CharacterClass::Symbol => SYMBOLS.contains(c),
        }
    }

    /// Whether at least one character of `chars` belongs to this class.
    pub fn is_present(self, chars: &[char]) -> bool {
        chars.iter().any(|&c| self.matches(c))
    }

    fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// A set of character classes, iterated in canonical order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ClassSet(u8);

impl ClassSet {
    pub const fn empty() -> Self {
        ClassSet(0)
    }

    pub fn all() -> Self {
        CharacterClass::ALL.into_iter().collect()
    }

    pub fn with(mut self, class: CharacterClass) -> Self {
        self.insert(class);
        self
    }

    pub fn insert(&mut self, class: CharacterClass) {
        self.0 |= class.bit();
    }

    pub fn remove(&mut self, class: CharacterClass) {
        self.0 &= !class.bit();
    }

    pub fn set(&mut self, class: CharacterClass, on: bool) {
        if on {
            self.insert(class);
        } else {
            self.remove(class);
        }
    }

    pub fn contains(self, class: CharacterClass) -> bool {
        self.0 & class.bit() != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(self) -> impl Iterator<Item = CharacterClass> {
        CharacterClass::ALL
            .into_iter()
            .filter(move |&class| self.contains(class))
    }

    /// Whether every class in the set is present in `chars`.
    pub fn all_present(self, chars: &[char]) -> bool {
        self.iter().all(|class| class.is_present(chars))
    }
}

impl FromIterator<CharacterClass> for ClassSet {
    fn from_iter<I: IntoIterator<Item = CharacterClass>>(iter: I) -> Self {
        let mut set = ClassSet::empty();
        for class in iter {
            set.insert(class);
        }
        set
    }
}

/// The characters eligible for drawing.
///
/// Duplicates are kept as-is; the fixed class alphabets never overlap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
    classes: ClassSet,
    exclude_ambiguous: bool,
}

impl Alphabet {
    /// Concatenate the alphabets of `classes`, optionally stripping [`AMBIGUOUS`].
    pub fn build(classes: ClassSet, exclude_ambiguous: bool) -> Result<Self> {
        if classes.is_empty() {
            return Err(Error::EmptySelection);
        }

        let chars: Vec<char> = classes
            .iter()
            .flat_map(|class| class.alphabet().chars())
            .filter(|&c| !(exclude_ambiguous && is_ambiguous(c)))
            .collect();

        if chars.is_empty() {
            return Err(Error::EmptyAlphabet);
        }

        Ok(Self {
            chars,
            classes,
            exclude_ambiguous,
        })
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn classes(&self) -> ClassSet {
        self.classes
    }

    pub fn excludes_ambiguous(&self) -> bool {
        self.exclude_ambiguous
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// The characters of `class` this alphabet may draw.
    ///
    /// Falls back to the full class alphabet if ambiguity stripping would
    /// leave the class empty.
    pub fn class_chars(&self, class: CharacterClass) -> Vec<char> {
        let stripped: Vec<char> = class
            .alphabet()
            .chars()
            .filter(|&c| !(self.exclude_ambiguous && is_ambiguous(c)))
            .collect();

        if stripped.is_empty() {
            log::warn!(
                "excluding ambiguous characters empties the {} class; using it unfiltered",
                class.name()
            );
            return class.alphabet().chars().collect();
        }
        stripped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_selection_is_rejected() {
        assert_eq!(
            Alphabet::build(ClassSet::empty(), false),
            Err(Error::EmptySelection)
        );
    }

    #[test]
    fn alphabet_concatenates_in_canonical_order() {
        let classes = ClassSet::empty()
            .with(CharacterClass::Digit)
            .with(CharacterClass::Lowercase);
        let alphabet = Alphabet::build(classes, false).unwrap();
        let s: String = alphabet.chars().iter().collect();
        assert_eq!(s, format!("{LOWERCASE}{DIGITS}"));
    }

    #[test]
    fn full_alphabet_size() {
        let alphabet = Alphabet::build(ClassSet::all(), false).unwrap();
        assert_eq!(alphabet.len(), 26 + 26 + 10 + 26);
    }

    #[test]
    fn ambiguous_characters_are_stripped() {
        let alphabet = Alphabet::build(ClassSet::all(), true).unwrap();
        assert_eq!(alphabet.len(), 88 - AMBIGUOUS.len());
        for c in AMBIGUOUS.chars() {
            assert!(!alphabet.contains(c), "{c} should be excluded");
        }
        // 'I' is not part of the confusable set
        assert!(alphabet.contains('I'));
    }

    #[test]
    fn class_chars_respects_stripping() {
        let alphabet = Alphabet::build(ClassSet::all(), true).unwrap();
        let digits: String = alphabet.class_chars(CharacterClass::Digit).iter().collect();
        assert_eq!(digits, "23456789");
        let symbols = alphabet.class_chars(CharacterClass::Symbol);
        assert_eq!(symbols.len(), SYMBOLS.len());
    }

    #[test]
    fn membership_predicates() {
        assert!(CharacterClass::Lowercase.matches('q'));
        assert!(!CharacterClass::Lowercase.matches('Q'));
        assert!(CharacterClass::Uppercase.matches('Q'));
        assert!(CharacterClass::Digit.matches('7'));
        assert!(CharacterClass::Symbol.matches('['));
        assert!(!CharacterClass::Symbol.matches('~'));
        assert!(!CharacterClass::Symbol.matches('a'));
    }

    #[test]
    fn class_set_tracks_membership() {
        let mut set = ClassSet::empty();
        assert!(set.is_empty());
        set.insert(CharacterClass::Symbol);
        set.insert(CharacterClass::Lowercase);
        set.insert(CharacterClass::Symbol);
        assert_eq!(set.len(), 2);
        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            vec![CharacterClass::Lowercase, CharacterClass::Symbol]
        );
        set.set(CharacterClass::Lowercase, false);
        assert!(!set.contains(CharacterClass::Lowercase));
    }

    #[test]
    fn all_present_checks_every_class() {
        let set = ClassSet::empty()
            .with(CharacterClass::Lowercase)
            .with(CharacterClass::Digit);
        assert!(set.all_present(&['a', '1']));
        assert!(!set.all_present(&['a', 'b']));
        assert!(ClassSet::empty().all_present(&[]));
    }
}
