//! Random number generation from a cryptographically secure source.
//!
//! Every draw goes to the [`EntropySource`] directly; there is no userspace
//! state to seed, reseed, or leak. The default source is the operating
//! system CSPRNG ([`OsEntropy`]).

mod os;

use zeroize::{Zeroize, Zeroizing};

use crate::error::Result;

pub use os::OsEntropy;

/// A source of secure random bytes.
pub trait EntropySource {
    /// Fill `buf` entirely or fail. A partial fill is never reported as success.
    fn fill(&mut self, buf: &mut [u8]) -> Result<()>;

    /// Human-readable name of the source.
    fn name(&self) -> &'static str;
}

/// Uniform integer draws over an [`EntropySource`].
///
/// Index selection reduces a 32-bit draw modulo the bound. For a bound `n`
/// the most likely index is favoured by at most `n / 2^32`, which stays below
/// 2.1e-8 for the largest alphabet this crate builds.
#[derive(Debug, Default)]
pub struct SecureRand<S = OsEntropy> {
    source: S,
}

impl SecureRand<OsEntropy> {
    pub fn new() -> Self {
        Self::with_source(OsEntropy)
    }
}

impl<S: EntropySource> SecureRand<S> {
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_name(&self) -> &'static str {
        self.source.name()
    }

    #[inline]
    pub fn next_u32(&mut self) -> Result<u32> {
        let mut bytes = [0u8; 4];
        self.source.fill(&mut bytes)?;
        let value = u32::from_le_bytes(bytes);
        bytes.zeroize();
        Ok(value)
    }

    /// Fill `out` with independent 32-bit draws from a single source read.
    pub fn fill_u32(&mut self, out: &mut [u32]) -> Result<()> {
        let mut bytes = Zeroizing::new(vec![0u8; out.len() * 4]);
        self.source.fill(&mut bytes)?;
        for (slot, chunk) in out.iter_mut().zip(bytes.chunks_exact(4)) {
            *slot = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        Ok(())
    }

    /// Index in `0..bound`. `bound` must be non-zero.
    #[inline]
    pub fn below(&mut self, bound: usize) -> Result<usize> {
        debug_assert!(bound > 0, "below() called with an empty range");
        Ok(self.next_u32()? as usize % bound)
    }
}
