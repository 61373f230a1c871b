/// Request bookkeeping for the news fetch.
///
/// Every issued request gets the next generation number. Only the completion
/// carrying the latest generation may touch the article store; earlier ones
/// are stale and ignored, so the last request issued wins regardless of which
/// response arrives last.
#[derive(Debug, Default)]
pub struct RefreshState {
    generation: u64,
    loading: bool,
}

impl RefreshState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Idle → Loading. Returns the generation the new request must carry.
    pub fn begin(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.loading = true;
        self.generation
    }

    /// Accept a completion. Returns `true` only on the Loading → Idle
    /// transition of the latest request, so each request settles at most once.
    pub fn settle(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            tracing::debug!(
                generation,
                latest = self.generation,
                "Discarding stale news fetch result"
            );
            return false;
        }
        if !self.loading {
            tracing::debug!(generation, "Discarding duplicate news fetch result");
            return false;
        }
        self.loading = false;
        true
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}
