//! Caller-injected observation of a solve.
//!
//! The solver never writes to stdout; callers who want progress or
//! diagnostics implement [`SolveObserver`] and pass it to
//! [`HungarianSolver::solve_with`](super::HungarianSolver::solve_with).

/// Observation hooks for a running solve.
///
/// The engine calls these at fixed points of the iteration. All methods
/// default to no-ops, so implementors override only what they need.
/// Workers are reported 1-based over the padded square matrix.
pub trait SolveObserver {
    /// The padded matrix has been reduced and solving is about to start.
    fn on_reduced(&self, _reduced: &crate::models::CostMatrix) {}

    /// A new worker enters the alternating tree.
    fn on_worker_start(&self, _worker: usize) {}

    /// Potentials moved by `delta` while growing `worker`'s tree.
    fn on_labels_updated(&self, _worker: usize, _delta: f64) {}

    /// `worker`'s augmenting path of `path_len` jobs was flipped.
    fn on_augmented(&self, _worker: usize, _path_len: usize) {}
}

/// Observer that ignores every event. Used by [`HungarianSolver::solve`](super::HungarianSolver::solve).
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl SolveObserver for NoopObserver {}
