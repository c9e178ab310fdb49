//! Generation counter used to discard results of superseded fetches

use crate::errors::{FetchError, FetchResult};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Shared counter; every fetch started on it bumps the generation
///
/// Clones share the same counter, so handing a clone to each fetcher that
/// feeds the same view makes the latest fetch win.
#[derive(Debug, Clone, Default)]
pub struct FetchGeneration {
    counter: Arc<AtomicU64>,
}

impl FetchGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new generation, making every earlier ticket stale
    pub fn begin(&self) -> GenerationTicket {
        let generation = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        GenerationTicket {
            counter: Arc::clone(&self.counter),
            generation,
        }
    }

    pub fn current(&self) -> u64 {
        self.counter.load(Ordering::SeqCst)
    }
}

/// Proof that a fetch was started at a given generation
#[derive(Debug, Clone)]
pub struct GenerationTicket {
    counter: Arc<AtomicU64>,
    generation: u64,
}

impl GenerationTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_current(&self) -> bool {
        self.counter.load(Ordering::SeqCst) == self.generation
    }

    /// Fail with [`FetchError::Superseded`] if a newer fetch has started
    pub fn check(&self) -> FetchResult<()> {
        if self.is_current() {
            Ok(())
        } else {
            Err(FetchError::Superseded {
                generation: self.generation,
            })
        }
    }
}
