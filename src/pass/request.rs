//! Generation requests and the length policy they are checked against.

use super::charset::ClassSet;
use crate::error::{Error, Result};

/// Allowed password lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthPolicy {
    pub min: usize,
    pub max: usize,
}

impl LengthPolicy {
    pub const MIN_LENGTH: usize = 8;
    pub const MAX_LENGTH: usize = 128;
    pub const DEFAULT_LENGTH: usize = 16;

    pub fn check(&self, length: usize) -> Result<()> {
        if (self.min..=self.max).contains(&length) {
            Ok(())
        } else {
            Err(Error::LengthOutOfRange {
                length,
                min: self.min,
                max: self.max,
            })
        }
    }
}

impl Default for LengthPolicy {
    fn default() -> Self {
        Self {
            min: Self::MIN_LENGTH,
            max: Self::MAX_LENGTH,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    pub length: usize,
    pub classes: ClassSet,
    pub exclude_ambiguous: bool,
}

impl GenerationRequest {
    pub fn new(length: usize, classes: ClassSet, exclude_ambiguous: bool) -> Self {
        Self {
            length,
            classes,
            exclude_ambiguous,
        }
    }

    /// Selection is checked first so an empty selection always reports as such.
    pub fn validate(&self, policy: &LengthPolicy) -> Result<()> {
        if self.classes.is_empty() {
            return Err(Error::EmptySelection);
        }
        policy.check(self.length)
    }
}
