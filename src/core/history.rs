//! State transition history tracking.
//!
//! Provides immutable tracking of fired transitions over time. History is a
//! diagnostic record: the machine appends to it on every entered transition
//! and never reads it back.

use super::state::{State, Trigger};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single entered transition.
///
/// Ignored triggers are not recorded; reentries are, with `reentry` set.
///
/// # Example
///
/// ```rust
/// use kinestate::core::TransitionRecord;
/// use kinestate::{state_enum, trigger_enum};
/// use chrono::Utc;
///
/// state_enum! {
///     pub enum Panel { Shown, Hidden }
/// }
/// trigger_enum! {
///     pub enum PanelTrigger { Show, Hide }
/// }
///
/// let record = TransitionRecord {
///     from: Panel::Shown,
///     to: Panel::Hidden,
///     trigger: PanelTrigger::Hide,
///     timestamp: Utc::now(),
///     reentry: false,
/// };
/// assert_eq!(record.to, Panel::Hidden);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionRecord<S: State, T: Trigger> {
    /// The state the machine was in when the trigger fired
    pub from: S,
    /// The state that was entered
    pub to: S,
    /// The trigger that caused the entry
    pub trigger: T,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
    /// Whether this was a reentry into the same state
    pub reentry: bool,
}

/// Ordered history of entered transitions.
///
/// History is immutable: [`record`](TransitionHistory::record) returns a new
/// history with the record appended, leaving the original untouched.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionHistory<S: State, T: Trigger> {
    records: Vec<TransitionRecord<S, T>>,
}

impl<S: State, T: Trigger> Default for TransitionHistory<S, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, T: Trigger> TransitionHistory<S, T> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    pub fn record(&self, record: TransitionRecord<S, T>) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// Get the path of states traversed: the first record's `from`, then
    /// every record's `to` in order. Empty histories yield an empty path.
    pub fn path(&self) -> Vec<S> {
        let mut path = Vec::new();
        if let Some(first) = self.records.first() {
            path.push(first.from);
        }
        for record in &self.records {
            path.push(record.to);
        }
        path
    }

    /// Elapsed time between the first and last recorded transitions.
    ///
    /// Returns `None` when the history is empty.
    pub fn duration(&self) -> Option<Duration> {
        match (self.records.first(), self.records.last()) {
            (Some(first), Some(last)) => last
                .timestamp
                .signed_duration_since(first.timestamp)
                .to_std()
                .ok(),
            _ => None,
        }
    }

    /// All recorded transitions in order.
    pub fn records(&self) -> &[TransitionRecord<S, T>] {
        &self.records
    }

    /// The most recent record, if any.
    pub fn last(&self) -> Option<&TransitionRecord<S, T>> {
        self.records.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{state_enum, trigger_enum};

    state_enum! {
        enum Step { A, B, C }
    }

    trigger_enum! {
        enum Go { Next }
    }

    fn record(from: Step, to: Step, reentry: bool) -> TransitionRecord<Step, Go> {
        TransitionRecord {
            from,
            to,
            trigger: Go::Next,
            timestamp: Utc::now(),
            reentry,
        }
    }

    #[test]
    fn record_is_immutable() {
        let history = TransitionHistory::new();
        let updated = history.record(record(Step::A, Step::B, false));

        assert_eq!(history.records().len(), 0);
        assert_eq!(updated.records().len(), 1);
    }

    #[test]
    fn path_includes_origin_state() {
        let history = TransitionHistory::new()
            .record(record(Step::A, Step::B, false))
            .record(record(Step::B, Step::C, false));

        assert_eq!(history.path(), vec![Step::A, Step::B, Step::C]);
    }

    #[test]
    fn path_of_empty_history_is_empty() {
        let history: TransitionHistory<Step, Go> = TransitionHistory::new();
        assert!(history.path().is_empty());
        assert!(history.duration().is_none());
        assert!(history.last().is_none());
    }

    #[test]
    fn reentry_appears_in_path_as_repeated_state() {
        let history = TransitionHistory::new()
            .record(record(Step::A, Step::B, false))
            .record(record(Step::B, Step::B, true));

        assert_eq!(history.path(), vec![Step::A, Step::B, Step::B]);
        assert!(history.last().unwrap().reentry);
    }

    #[test]
    fn history_roundtrips_through_json() {
        let history = TransitionHistory::new().record(record(Step::A, Step::B, false));
        let json = serde_json::to_string(&history).unwrap();
        let back: TransitionHistory<Step, Go> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.records().len(), 1);
        assert_eq!(back.records()[0].to, Step::B);
    }
}
