//! Transition tables: immutable `(state, trigger)` → outcome mappings.
//!
//! A [`TransitionTable`] is pure data. It is built once through
//! [`TransitionTableBuilder`](crate::builder::TransitionTableBuilder), never
//! mutated afterwards, and answers exactly one question: what does this
//! trigger do in this state?

use crate::builder::TransitionTableBuilder;
use crate::core::{State, Trigger};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Outcome of firing a trigger in a state.
///
/// Every configured `(state, trigger)` pair maps to exactly one outcome.
/// Pairs with no configured outcome are configuration gaps and surface as
/// errors at fire time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome<S> {
    /// Transition to another state and run its entry actions.
    Permit(S),
    /// Re-enter the current state: no state change, but entry actions run.
    PermitReentry,
    /// Explicit no-op: no state change, no entry actions.
    Ignore,
}

/// Immutable mapping from `(state, trigger)` to [`Outcome`].
///
/// # Example
///
/// ```rust
/// use kinestate::core::{Outcome, TransitionTable};
/// use kinestate::{state_enum, trigger_enum};
///
/// state_enum! {
///     pub enum Door { Open, Closed }
/// }
/// trigger_enum! {
///     pub enum Knob { Turn, Slam }
/// }
///
/// let table = TransitionTable::builder()
///     .state(Door::Open, |s| s.permit(Knob::Slam, Door::Closed).ignore(Knob::Turn))
///     .state(Door::Closed, |s| s.permit(Knob::Turn, Door::Open))
///     .build()
///     .unwrap();
///
/// assert_eq!(table.outcome(Door::Open, Knob::Slam), Some(Outcome::Permit(Door::Closed)));
/// assert_eq!(table.outcome(Door::Open, Knob::Turn), Some(Outcome::Ignore));
/// assert_eq!(table.outcome(Door::Closed, Knob::Slam), None);
/// ```
#[derive(Clone, Debug)]
pub struct TransitionTable<S: State, T: Trigger> {
    rules: HashMap<(S, T), Outcome<S>>,
}

impl<S: State, T: Trigger> TransitionTable<S, T> {
    /// Start building a table.
    pub fn builder() -> TransitionTableBuilder<S, T> {
        TransitionTableBuilder::new()
    }

    pub(crate) fn from_rules(rules: HashMap<(S, T), Outcome<S>>) -> Self {
        Self { rules }
    }

    /// Look up the outcome for a `(state, trigger)` pair (pure).
    ///
    /// Returns `None` when no rule is configured for the pair.
    pub fn outcome(&self, state: S, trigger: T) -> Option<Outcome<S>> {
        self.rules.get(&(state, trigger)).copied()
    }

    /// Whether any rule is configured for the pair.
    pub fn handles(&self, state: S, trigger: T) -> bool {
        self.rules.contains_key(&(state, trigger))
    }

    /// Number of configured rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the table has no rules. Built tables are never empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Render the table as a Graphviz DOT digraph.
    ///
    /// Permitted transitions become labeled edges, reentries become
    /// self-loops, ignored triggers are not drawn. Output ordering is
    /// deterministic so the graph is diffable.
    pub fn to_dot(&self) -> String {
        let mut nodes: Vec<&str> = Vec::new();
        let mut edges: Vec<(String, String, String)> = Vec::new();

        for ((state, trigger), outcome) in &self.rules {
            if !nodes.contains(&state.name()) {
                nodes.push(state.name());
            }
            match outcome {
                Outcome::Permit(next) => {
                    if !nodes.contains(&next.name()) {
                        nodes.push(next.name());
                    }
                    edges.push((
                        state.name().to_string(),
                        next.name().to_string(),
                        trigger.name().to_string(),
                    ));
                }
                Outcome::PermitReentry => {
                    edges.push((
                        state.name().to_string(),
                        state.name().to_string(),
                        trigger.name().to_string(),
                    ));
                }
                Outcome::Ignore => {}
            }
        }

        nodes.sort_unstable();
        edges.sort();

        let mut dot = String::from("digraph {\n    rankdir=LR;\n");
        for node in nodes {
            dot.push_str(&format!("    \"{node}\";\n"));
        }
        for (from, to, label) in edges {
            dot.push_str(&format!("    \"{from}\" -> \"{to}\" [label=\"{label}\"];\n"));
        }
        dot.push_str("}\n");
        dot
    }
}
