//! Errors raised while building alphabets and generating passwords.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// No character class was selected.
    #[error("Please select at least one character set")]
    EmptySelection,

    /// The operating system could not supply secure random bytes.
    #[error("no cryptographically secure random source is available: {0}")]
    RandomSourceUnavailable(String),

    #[error("length {length} cannot hold one character from each of {required} required classes")]
    LengthTooShortForRequirements { length: usize, required: usize },

    #[error("length {length} is outside the allowed range {min}..={max}")]
    LengthOutOfRange { length: usize, min: usize, max: usize },

    #[error("cannot draw from an empty alphabet")]
    EmptyAlphabet,
}

impl From<getrandom::Error> for Error {
    fn from(e: getrandom::Error) -> Self {
        Error::RandomSourceUnavailable(e.to_string())
    }
}
