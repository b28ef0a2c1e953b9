//! Random password generation with guaranteed character-class coverage.
//!
//! ```no_run
//! use safepass::{CharacterClass, ClassSet, GenerationRequest};
//!
//! let classes = ClassSet::empty()
//!     .with(CharacterClass::Lowercase)
//!     .with(CharacterClass::Uppercase)
//!     .with(CharacterClass::Digit);
//! let request = GenerationRequest::new(16, classes, true);
//!
//! let password = safepass::generate_password(&request)?;
//! let strength = safepass::score_password(password.as_str());
//! println!("{password} ({})", strength.label);
//! # Ok::<(), safepass::Error>(())
//! ```

pub mod error;
pub mod pass;
pub mod rand;

pub use error::{Error, Result};
pub use pass::{
    AMBIGUOUS, Alphabet, CharacterClass, ClassSet, GenerationRequest, LengthPolicy, Password,
    StrengthLevel, StrengthResult,
};
pub use rand::{EntropySource, OsEntropy, SecureRand};

pub fn build_alphabet(classes: ClassSet, exclude_ambiguous: bool) -> Result<Alphabet> {
    Alphabet::build(classes, exclude_ambiguous)
}

/// Generate a password for `request` from the operating system CSPRNG.
pub fn generate_password(request: &GenerationRequest) -> Result<Password> {
    generate_password_with(&mut SecureRand::new(), request)
}

/// Generate a password for `request` from a caller-supplied source.
pub fn generate_password_with<S: EntropySource>(
    rng: &mut SecureRand<S>,
    request: &GenerationRequest,
) -> Result<Password> {
    request.validate(&LengthPolicy::default())?;
    let alphabet = build_alphabet(request.classes, request.exclude_ambiguous)?;
    pass::enforce(rng, &alphabet, request.length, request.classes)
}

pub fn score_password(password: &str) -> StrengthResult {
    pass::strength::score(password)
}
