//! Lifecycle contract for state-driven actions.

use crate::anim::{Completion, Timing};
use crate::core::State;

/// One visual effect bound to one element, driven by state entries.
///
/// Implementations own their animatable handle and their per-state
/// configuration; the element orchestrates when they run.
///
/// A broken action must degrade, not obstruct: `apply` and `apply_instant`
/// return an already-resolved [`Completion`] (after logging a warning) when
/// the action cannot run, so a single unavailable effect never blocks a
/// state transition or hangs an execution batch.
pub trait StateContract<S: State>: Send {
    /// Perform setup before the action can respond to state changes:
    /// capture the baseline value and build the reusable handle.
    ///
    /// Called once by the owning element at construction. Callers guarantee
    /// single invocation; implementations need no internal guard.
    fn setup(&mut self);

    /// Animate toward the supplied state's configured end value, resolving
    /// timing against the element defaults. Starts the run synchronously and
    /// returns its completion.
    fn apply(&mut self, state: S, defaults: &Timing) -> Completion;

    /// Snap to the supplied state's end value with no delay or animation.
    /// The returned completion is always already resolved.
    fn apply_instant(&mut self, state: S) -> Completion;
}
