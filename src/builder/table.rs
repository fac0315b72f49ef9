//! Builder for constructing transition tables.

use crate::builder::error::BuildError;
use crate::core::{Outcome, State, TransitionTable, Trigger};
use std::collections::HashMap;

/// Builder for [`TransitionTable`] with per-state fluent configuration.
///
/// Rules are declared state by state; `build()` validates that the table is
/// non-empty and that no `(state, trigger)` pair was configured twice.
/// Conflicts are configuration bugs and fail the build rather than silently
/// taking the last registration.
///
/// # Example
///
/// ```rust
/// use kinestate::core::TransitionTable;
/// use kinestate::{state_enum, trigger_enum};
///
/// state_enum! {
///     pub enum Lamp { Off, On }
/// }
/// trigger_enum! {
///     pub enum Flick { Toggle }
/// }
///
/// let table = TransitionTable::builder()
///     .state(Lamp::Off, |s| s.permit(Flick::Toggle, Lamp::On))
///     .state(Lamp::On, |s| s.permit(Flick::Toggle, Lamp::Off))
///     .build()
///     .unwrap();
/// assert_eq!(table.len(), 2);
/// ```
pub struct TransitionTableBuilder<S: State, T: Trigger> {
    rules: HashMap<(S, T), Outcome<S>>,
    conflict: Option<(S, T)>,
}

impl<S: State, T: Trigger> TransitionTableBuilder<S, T> {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self {
            rules: HashMap::new(),
            conflict: None,
        }
    }

    /// Declare the rules for one state.
    ///
    /// The closure receives a [`StateRules`] scope and returns it with the
    /// state's permits, reentries, and ignores declared.
    pub fn state(mut self, state: S, configure: impl FnOnce(StateRules<S, T>) -> StateRules<S, T>) -> Self {
        let configured = configure(StateRules::new());
        for (trigger, outcome) in configured.rules {
            if self.rules.insert((state, trigger), outcome).is_some() && self.conflict.is_none() {
                self.conflict = Some((state, trigger));
            }
        }
        self
    }

    /// Build the table.
    ///
    /// Fails on an empty table or on the first conflicting registration.
    pub fn build(self) -> Result<TransitionTable<S, T>, BuildError> {
        if let Some((state, trigger)) = self.conflict {
            return Err(BuildError::ConflictingRule {
                state: state.name().to_string(),
                trigger: trigger.name().to_string(),
            });
        }
        if self.rules.is_empty() {
            return Err(BuildError::NoRules);
        }
        Ok(TransitionTable::from_rules(self.rules))
    }
}

impl<S: State, T: Trigger> Default for TransitionTableBuilder<S, T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Fluent rule scope for a single state.
pub struct StateRules<S: State, T: Trigger> {
    rules: Vec<(T, Outcome<S>)>,
}

impl<S: State, T: Trigger> StateRules<S, T> {
    fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Permit `trigger` to transition into `next`.
    pub fn permit(mut self, trigger: T, next: S) -> Self {
        self.rules.push((trigger, Outcome::Permit(next)));
        self
    }

    /// Permit `trigger` to re-enter this state (entry actions run again).
    pub fn permit_reentry(mut self, trigger: T) -> Self {
        self.rules.push((trigger, Outcome::PermitReentry));
        self
    }

    /// Declare `trigger` an explicit no-op in this state.
    pub fn ignore(mut self, trigger: T) -> Self {
        self.rules.push((trigger, Outcome::Ignore));
        self
    }
}
