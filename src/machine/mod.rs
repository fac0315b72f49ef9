//! Trigger-driven state machine execution.
//!
//! [`StateMachine`] holds the current state, enforces transition legality
//! against an immutable [`TransitionTable`], and records entered transitions
//! in an immutable history. `fire` is synchronous and pure apart from the
//! state/history update: it reports what was entered and the orchestrating
//! layer (see [`element`](crate::element)) runs the entry actions before its
//! own fire wrapper returns.

use crate::core::{Outcome, State, TransitionHistory, TransitionRecord, TransitionTable, Trigger};
use chrono::Utc;
use tracing::debug;

pub mod error;

pub use error::TransitionError;

/// What a successful `fire` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fired<S: State> {
    /// A state was entered (a transition or a reentry); its entry actions
    /// must run.
    Entered {
        /// The state that is now current.
        state: S,
        /// Whether this was a reentry into the already-current state.
        reentry: bool,
    },

    /// The trigger was configured `Ignore`: no state change, no entry.
    Ignored,
}

/// State machine: current state plus transition table plus history.
///
/// The current state is set once at construction and only ever changes
/// through [`fire`](StateMachine::fire); there is no external reset.
///
/// # Example
///
/// ```rust
/// use kinestate::core::TransitionTable;
/// use kinestate::machine::{Fired, StateMachine};
/// use kinestate::{state_enum, trigger_enum};
///
/// state_enum! {
///     pub enum Panel { Shown, Hidden }
/// }
/// trigger_enum! {
///     pub enum PanelTrigger { Show, Hide }
/// }
///
/// let table = TransitionTable::builder()
///     .state(Panel::Shown, |s| s.permit(PanelTrigger::Hide, Panel::Hidden))
///     .state(Panel::Hidden, |s| s.permit(PanelTrigger::Show, Panel::Shown))
///     .build()
///     .unwrap();
///
/// let mut machine = StateMachine::new(Panel::Shown, table);
/// let fired = machine.fire(PanelTrigger::Hide).unwrap();
/// assert_eq!(fired, Fired::Entered { state: Panel::Hidden, reentry: false });
/// assert_eq!(machine.current_state(), Panel::Hidden);
/// ```
pub struct StateMachine<S: State, T: Trigger> {
    current: S,
    table: TransitionTable<S, T>,
    history: TransitionHistory<S, T>,
}

impl<S: State, T: Trigger> StateMachine<S, T> {
    /// Create a machine in the given initial state.
    pub fn new(initial: S, table: TransitionTable<S, T>) -> Self {
        Self {
            current: initial,
            table,
            history: TransitionHistory::new(),
        }
    }

    /// The current state.
    pub fn current_state(&self) -> S {
        self.current
    }

    /// The transition table driving this machine.
    pub fn table(&self) -> &TransitionTable<S, T> {
        &self.table
    }

    /// History of entered transitions.
    pub fn history(&self) -> &TransitionHistory<S, T> {
        &self.history
    }

    /// Whether firing `trigger` right now would enter a state.
    ///
    /// `false` for both ignored and unconfigured triggers.
    pub fn can_fire(&self, trigger: T) -> bool {
        matches!(
            self.table.outcome(self.current, trigger),
            Some(Outcome::Permit(_)) | Some(Outcome::PermitReentry)
        )
    }

    /// Fire a trigger.
    ///
    /// Looks up `(current, trigger)` in the table:
    /// - `Ignore` → `Ok(Fired::Ignored)`, nothing changes.
    /// - `Permit(next)` → current becomes `next`, the move is recorded,
    ///   `Ok(Fired::Entered { reentry: false, .. })`.
    /// - `PermitReentry` → current is unchanged but re-entered and recorded,
    ///   `Ok(Fired::Entered { reentry: true, .. })`.
    /// - No rule → [`TransitionError::Unhandled`]. Never silently absorbed.
    ///
    /// `fire` never suspends.
    pub fn fire(&mut self, trigger: T) -> Result<Fired<S>, TransitionError> {
        match self.table.outcome(self.current, trigger) {
            None => Err(TransitionError::Unhandled {
                state: self.current.name().to_string(),
                trigger: trigger.name().to_string(),
            }),
            Some(Outcome::Ignore) => {
                debug!(
                    state = self.current.name(),
                    trigger = trigger.name(),
                    "trigger ignored"
                );
                Ok(Fired::Ignored)
            }
            Some(Outcome::PermitReentry) => {
                self.record(self.current, self.current, trigger, true);
                debug!(state = self.current.name(), trigger = trigger.name(), "reentry");
                Ok(Fired::Entered {
                    state: self.current,
                    reentry: true,
                })
            }
            Some(Outcome::Permit(next)) => {
                let from = self.current;
                self.current = next;
                self.record(from, next, trigger, false);
                debug!(
                    from = from.name(),
                    to = next.name(),
                    trigger = trigger.name(),
                    "transition"
                );
                Ok(Fired::Entered {
                    state: next,
                    reentry: false,
                })
            }
        }
    }

    fn record(&mut self, from: S, to: S, trigger: T, reentry: bool) {
        self.history = self.history.record(TransitionRecord {
            from,
            to,
            trigger,
            timestamp: Utc::now(),
            reentry,
        });
    }
}
