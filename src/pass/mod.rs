//! Password generation and strength scoring.

pub mod charset;
pub mod generate;
mod password;
mod request;
pub mod strength;

pub use charset::{AMBIGUOUS, Alphabet, CharacterClass, ClassSet};
pub use generate::{MAX_RETRIES, enforce};
pub use password::Password;
pub use request::{GenerationRequest, LengthPolicy};
pub use strength::{StrengthLevel, StrengthResult};
