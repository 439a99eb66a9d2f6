//! Progress reporting and cooperative cancellation.
//!
//! The engine is synchronous; an execution host that wants a responsive
//! interface runs [`CooldownSolver::solve_with`] on a worker thread, hands
//! it a [`CancelToken`] clone, and receives stage-by-stage progress through
//! a [`ProgressObserver`]. Communication goes through these two types
//! rather than shared mutable flags.
//!
//! [`CooldownSolver::solve_with`]: super::CooldownSolver::solve_with

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use super::result::Stage;

/// A progress snapshot delivered after a stage finishes.
///
/// Stage indices increase monotonically. The engine guarantees the reported
/// stage has completed, but makes no promise about how far the next stage's
/// computation has progressed when the observer runs.
#[derive(Debug, Clone, Copy)]
pub struct StageProgress<'a> {
    /// Number of stages completed so far, counting an external pre-cool
    /// phase if present.
    pub completed: usize,

    /// Total number of stages in the schedule, counting an external
    /// pre-cool phase if present.
    pub total: usize,

    /// All stages computed so far, in order.
    pub stages: &'a [Stage],
}

/// Receives progress snapshots from a running solve.
pub trait ProgressObserver {
    /// Called after each stage completes.
    fn stage_completed(&self, progress: StageProgress<'_>);
}

/// Observer that discards all progress updates.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn stage_completed(&self, _progress: StageProgress<'_>) {}
}

/// Any `Fn(StageProgress)` closure is an observer.
impl<F> ProgressObserver for F
where
    F: for<'a> Fn(StageProgress<'a>),
{
    fn stage_completed(&self, progress: StageProgress<'_>) {
        self(progress);
    }
}

/// A cloneable cancellation flag.
///
/// Clones share the flag, so a host can keep one clone and hand another to
/// the worker running the solve. The engine checks the token between stage
/// computations; an individual stage is O(1) and not interruptible.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// Creates a token in the not-cancelled state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation. Idempotent.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Returns whether cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_flag() {
        let token = CancelToken::new();
        let clone = token.clone();

        assert!(!token.is_cancelled());
        clone.cancel();
        assert!(token.is_cancelled());

        // Idempotent.
        clone.cancel();
        assert!(token.is_cancelled());
    }
}
