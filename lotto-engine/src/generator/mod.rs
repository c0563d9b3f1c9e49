pub mod source;

pub use source::{RandomSource, SeededSource, SequenceSource, ThreadRngSource};

use crate::{DrawError, Result};
use lotto_core::TicketNumber;
use std::sync::Arc;

/// Largest value a six digit number can hold.
pub const MAX_NUMBER: u32 = 999_999;

/// Produces zero-padded six digit winning numbers.
#[derive(Clone)]
pub struct WinningNumberGenerator {
    source: Arc<dyn RandomSource>,
}

impl WinningNumberGenerator {
    pub fn new(source: Arc<dyn RandomSource>) -> Self {
        Self { source }
    }

    pub fn thread_rng() -> Self {
        Self::new(Arc::new(ThreadRngSource))
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(Arc::new(SeededSource::new(seed)))
    }

    /// Fixed sequence of winning numbers, for tests and replays.
    pub fn sequence(values: Vec<u32>) -> Self {
        Self::new(Arc::new(SequenceSource::new(values)))
    }

    pub fn generate(&self) -> Result<TicketNumber> {
        let value = self.source.sample(MAX_NUMBER);
        TicketNumber::from_value(value).map_err(|_| {
            DrawError::RandomSource(format!(
                "sample {} is outside 0..={}",
                value, MAX_NUMBER
            ))
        })
    }
}

impl Default for WinningNumberGenerator {
    fn default() -> Self {
        Self::thread_rng()
    }
}

impl std::fmt::Debug for WinningNumberGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WinningNumberGenerator").finish_non_exhaustive()
    }
}
