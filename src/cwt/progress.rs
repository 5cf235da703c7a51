//! Progress reporting and cooperative cancellation
//!
//! Observers are advisory: they never change the computed coefficients.
//! Cancellation is checked between scales only.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// One finished scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    /// Row index of the scale in the input list
    pub index: usize,
    /// Scales finished so far, including this one
    pub completed: usize,
    /// Total number of scales
    pub total: usize,
    /// Scale value
    pub scale: f64,
}

/// Hook into a running CWT
///
/// Must be `Sync`, since scales may be computed on several threads.
pub trait CwtObserver: Sync {
    /// Called after each scale's row has been written
    fn on_scale(&self, _progress: Progress) {}

    /// Polled before each scale starts
    fn is_cancelled(&self) -> bool {
        false
    }
}

/// Observer that does nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl CwtObserver for NoopObserver {}

/// Adapts a closure into a progress-only observer
pub struct ProgressFn<F>(pub F);

impl<F> CwtObserver for ProgressFn<F>
where
    F: Fn(Progress) + Sync,
{
    fn on_scale(&self, progress: Progress) {
        (self.0)(progress)
    }
}

/// Shared cancellation flag
///
/// Clones share the same flag, so one clone can be handed to the computation
/// and another kept by the host to call [`CancelFlag::cancel`].
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

impl CwtObserver for CancelFlag {
    fn is_cancelled(&self) -> bool {
        self.is_set()
    }
}
