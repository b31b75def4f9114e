//! Options for decoding run-end encoded arrays.

/// Options for decoding run-end encoded arrays.
///
/// The default values are:
/// - `concurrent_target`: number of threads available to Rayon
#[derive(Debug, Clone, Copy)]
pub struct ReeOptions {
    concurrent_target: usize,
}

impl Default for ReeOptions {
    fn default() -> Self {
        Self {
            concurrent_target: rayon::current_num_threads(),
        }
    }
}

impl ReeOptions {
    /// Return the concurrent target.
    #[must_use]
    pub fn concurrent_target(&self) -> usize {
        self.concurrent_target
    }

    /// Set the concurrent target.
    pub fn set_concurrent_target(&mut self, concurrent_target: usize) -> &mut Self {
        self.concurrent_target = concurrent_target;
        self
    }

    /// Set the concurrent target.
    #[must_use]
    pub fn with_concurrent_target(mut self, concurrent_target: usize) -> Self {
        self.concurrent_target = concurrent_target;
        self
    }
}
