//! Element orchestration: one state machine fanning out to a fixed list of
//! actions.
//!
//! An [`Element`] binds a [`StateMachine`] to its actions and per-state
//! listeners. Firing a trigger is synchronous: the machine transitions, the
//! entered state's actions all start, and a fresh [`ExecutionBatch`]
//! replaces the previous one. Only
//! [`when_execution_completes`](Element::when_execution_completes) suspends.

use crate::action::StateContract;
use crate::anim::{Completion, CompletionSource, ConfigError, Timing};
use crate::core::{State, TransitionHistory, TransitionTable, Trigger};
use crate::machine::{Fired, StateMachine, TransitionError};
use std::collections::HashMap;
use std::sync::Arc;

pub mod selectable;
pub mod switch;

/// Callback invoked after a state's execution batch resolves.
pub type StateListener = Arc<dyn Fn() + Send + Sync>;

/// The set of in-flight completions started by one state entry.
///
/// A new entry replaces the batch wholesale; it never appends. Replacing the
/// batch does not cancel the previous batch's underlying runs; each action's
/// own restart supersedes its previous run instead.
pub struct ExecutionBatch {
    completions: Vec<Completion>,
}

impl ExecutionBatch {
    fn idle() -> Self {
        Self {
            completions: Vec::new(),
        }
    }

    fn tracking(completions: Vec<Completion>) -> Self {
        Self { completions }
    }

    /// Whether every tracked completion has resolved. An idle batch counts
    /// as resolved.
    pub fn is_resolved(&self) -> bool {
        self.completions.iter().all(Completion::is_resolved)
    }

    /// Wait for every tracked completion.
    pub async fn wait(&self) {
        Completion::join(self.completions.iter().cloned()).await;
    }
}

/// Orchestrator binding one state machine to an ordered action list.
///
/// Built through [`ElementBuilder`]; the transition table is fixed per
/// element type and the actions are set up exactly once at build time.
/// Animated entries spawn their completion watcher on the current tokio
/// runtime, so elements must be driven from within one.
///
/// # Example
///
/// ```rust
/// use kinestate::element::switch::{self, SwitchState, SwitchTrigger};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let mut element = switch::switch().build().unwrap();
/// assert_eq!(element.current_state(), SwitchState::Show);
///
/// element.fire(SwitchTrigger::OnHide).unwrap();
/// assert_eq!(element.current_state(), SwitchState::Hide);
/// element.when_execution_completes().await;
/// # }
/// ```
pub struct Element<S: State, T: Trigger> {
    machine: StateMachine<S, T>,
    actions: Vec<Box<dyn StateContract<S>>>,
    listeners: HashMap<S, Vec<StateListener>>,
    timing: Timing,
    batch: ExecutionBatch,
    instant: bool,
}

impl<S: State, T: Trigger> Element<S, T> {
    /// Start building an element with the given initial state and table.
    pub fn builder(initial: S, table: TransitionTable<S, T>) -> ElementBuilder<S, T> {
        ElementBuilder::new(initial, table)
    }

    /// The machine's current state.
    pub fn current_state(&self) -> S {
        self.machine.current_state()
    }

    /// History of entered transitions.
    pub fn history(&self) -> &TransitionHistory<S, T> {
        self.machine.history()
    }

    /// Whether firing `trigger` right now would enter a state.
    pub fn can_fire(&self, trigger: T) -> bool {
        self.machine.can_fire(trigger)
    }

    /// The batch started by the most recent state entry.
    pub fn execution_batch(&self) -> &ExecutionBatch {
        &self.batch
    }

    /// Register a listener invoked after `state`'s batch resolves (or
    /// synchronously on the instant path).
    pub fn on_state(&mut self, state: S, listener: impl Fn() + Send + Sync + 'static) {
        self.listeners
            .entry(state)
            .or_default()
            .push(Arc::new(listener));
    }

    /// Fire a trigger, animating the entered state's actions.
    pub fn fire(&mut self, trigger: T) -> Result<(), TransitionError> {
        self.fire_with(trigger, false)
    }

    /// Fire a trigger, forcing the entered state's actions to apply
    /// instantly. The instant mode is a per-call override: the previous
    /// setting is restored before returning.
    pub fn fire_instant(&mut self, trigger: T) -> Result<(), TransitionError> {
        self.fire_with(trigger, true)
    }

    fn fire_with(&mut self, trigger: T, instant: bool) -> Result<(), TransitionError> {
        let previous = self.instant;
        self.instant = instant;

        let result = self.machine.fire(trigger);
        if let Ok(Fired::Entered { state, .. }) = &result {
            self.enter_state(*state);
        }

        self.instant = previous;
        result.map(|_| ())
    }

    /// Wait for the most recently started batch. Resolves immediately when
    /// nothing is in flight.
    pub async fn when_execution_completes(&self) {
        self.batch.wait().await;
    }

    /// Start every action for the entered state, in list order, and replace
    /// the tracked batch.
    fn enter_state(&mut self, state: S) {
        if self.instant {
            let completions: Vec<Completion> = self
                .actions
                .iter_mut()
                .map(|action| action.apply_instant(state))
                .collect();
            self.invoke_listeners(state);
            self.batch = ExecutionBatch::tracking(completions);
            return;
        }

        let completions: Vec<Completion> = self
            .actions
            .iter_mut()
            .map(|action| action.apply(state, &self.timing))
            .collect();

        // One composite completion: all actions, then the state's listeners.
        let listeners: Vec<StateListener> =
            self.listeners.get(&state).cloned().unwrap_or_default();
        let source = CompletionSource::new();
        let done = source.subscribe();
        tokio::spawn(async move {
            Completion::join(completions).await;
            for listener in &listeners {
                listener();
            }
            source.complete();
        });

        self.batch = ExecutionBatch::tracking(vec![done]);
    }

    fn invoke_listeners(&self, state: S) {
        if let Some(listeners) = self.listeners.get(&state) {
            for listener in listeners {
                listener();
            }
        }
    }
}

/// Builder for [`Element`].
///
/// Collects the table, actions, listeners, and default timing; `build()`
/// validates the default timing and runs every action's `setup` exactly
/// once.
pub struct ElementBuilder<S: State, T: Trigger> {
    initial: S,
    table: TransitionTable<S, T>,
    actions: Vec<Box<dyn StateContract<S>>>,
    listeners: HashMap<S, Vec<StateListener>>,
    timing: Timing,
}

impl<S: State, T: Trigger> ElementBuilder<S, T> {
    pub fn new(initial: S, table: TransitionTable<S, T>) -> Self {
        Self {
            initial,
            table,
            actions: Vec::new(),
            listeners: HashMap::new(),
            timing: Timing::default(),
        }
    }

    /// Override the initial state.
    pub fn initial(mut self, state: S) -> Self {
        self.initial = state;
        self
    }

    /// Set the element-default timing actions inherit unless overridden.
    pub fn timing(mut self, timing: Timing) -> Self {
        self.timing = timing;
        self
    }

    /// Append an action. Order determines start order on each entry.
    pub fn action(mut self, action: impl StateContract<S> + 'static) -> Self {
        self.actions.push(Box::new(action));
        self
    }

    /// Register a per-state listener.
    pub fn on_state(mut self, state: S, listener: impl Fn() + Send + Sync + 'static) -> Self {
        self.listeners
            .entry(state)
            .or_default()
            .push(Arc::new(listener));
        self
    }

    /// Build the element: validate default timing, then set up every action.
    pub fn build(self) -> Result<Element<S, T>, ConfigError> {
        self.timing.validate()?;

        let mut element = Element {
            machine: StateMachine::new(self.initial, self.table),
            actions: self.actions,
            listeners: self.listeners,
            timing: self.timing,
            batch: ExecutionBatch::idle(),
            instant: false,
        };
        for action in &mut element.actions {
            action.setup();
        }
        Ok(element)
    }
}
