//! Transition error types.

use thiserror::Error;

/// Errors that can occur when firing a trigger.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    /// The current state has no rule for the fired trigger. This is a
    /// configuration gap: unhandled triggers must be declared `Ignore`
    /// explicitly, never left out.
    #[error("no transition rule for trigger '{trigger}' in state '{state}'")]
    Unhandled { state: String, trigger: String },
}
