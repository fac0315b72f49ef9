//! Build errors for transition table construction.

use thiserror::Error;

/// Errors that can occur when building a transition table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("no transition rules defined. Configure at least one state")]
    NoRules,

    #[error(
        "conflicting rules for ({state}, {trigger}): each state/trigger pair takes exactly one outcome"
    )]
    ConflictingRule { state: String, trigger: String },
}
