//! Step observer trait for monitoring rope ticks.

use crate::collision::{RefreshOutcome, SnapshotStats};

/// Trait for observing rope ticks.
///
/// Implement this trait to monitor solver progress (e.g., for debugging,
/// profiling or drawing gizmos). All methods have default no-op
/// implementations.
pub trait StepObserver {
    /// Called after queued commands have been applied.
    fn on_commands_applied(&mut self, _count: usize) {}

    /// Called after all nodes have been integrated (Verlet step).
    fn on_integrate(&mut self) {}

    /// Called after the collision snapshot was refreshed or reused.
    fn on_snapshot(&mut self, _outcome: RefreshOutcome, _shapes: usize, _stats: SnapshotStats) {}

    /// Called after each constraint + collision iteration.
    fn on_constraint_iteration(&mut self, _iteration: usize, _collisions_resolved: usize) {}

    /// Called when a tick is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}

/// Observer that forwards every phase to the `log` facade at trace level.
pub struct LogObserver;

impl StepObserver for LogObserver {
    fn on_commands_applied(&mut self, count: usize) {
        if count > 0 {
            log::trace!("applied {} queued rope commands", count);
        }
    }

    fn on_integrate(&mut self) {
        log::trace!("rope integrated");
    }

    fn on_snapshot(&mut self, outcome: RefreshOutcome, shapes: usize, stats: SnapshotStats) {
        log::trace!("collision snapshot {:?}: {} shapes, {:?}", outcome, shapes, stats);
    }

    fn on_constraint_iteration(&mut self, iteration: usize, collisions_resolved: usize) {
        log::trace!("iteration {}: {} collisions resolved", iteration, collisions_resolved);
    }

    fn on_step_complete(&mut self) {
        log::trace!("rope tick complete");
    }
}
