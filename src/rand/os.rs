//! Operating system entropy.

use super::EntropySource;
use crate::error::Result;

/// The platform CSPRNG (`getrandom(2)`, `BCryptGenRandom`, `arc4random_buf`, ...).
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    #[inline]
    fn fill(&mut self, buf: &mut [u8]) -> Result<()> {
        getrandom::fill(buf)?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "OS CSPRNG"
    }
}
