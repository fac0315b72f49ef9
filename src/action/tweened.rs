//! Tween-backed action implementation.

use crate::action::contract::StateContract;
use crate::action::data::{ActionData, EndValue};
use crate::anim::{Animatable, Completion, ConfigError, Lerp, Timing, Tween};
use crate::core::State;
use std::sync::{Arc, Mutex};
use tracing::warn;

/// Explicit accessor pair binding an action to its target value.
///
/// `read` returning `None` means the target is gone or unreadable; an action
/// whose target cannot be read at setup time stays disabled and degrades
/// every apply to a warning.
pub struct ActionTarget<V> {
    read: Arc<dyn Fn() -> Option<V> + Send + Sync>,
    write: Arc<dyn Fn(V) + Send + Sync>,
}

impl<V> ActionTarget<V> {
    pub fn new(
        read: impl Fn() -> Option<V> + Send + Sync + 'static,
        write: impl Fn(V) + Send + Sync + 'static,
    ) -> Self {
        Self {
            read: Arc::new(read),
            write: Arc::new(write),
        }
    }

    /// Bind a shared cell as the target. A poisoned lock reads as
    /// unavailable.
    pub fn shared(cell: Arc<Mutex<V>>) -> Self
    where
        V: Clone + Send + 'static,
    {
        let read_cell = Arc::clone(&cell);
        let write_cell = cell;
        Self::new(
            move || read_cell.lock().ok().map(|guard| guard.clone()),
            move |value| {
                if let Ok(mut guard) = write_cell.lock() {
                    *guard = value;
                }
            },
        )
    }

    fn read(&self) -> Option<V> {
        (self.read)()
    }

    fn read_fn(&self) -> Arc<dyn Fn() -> Option<V> + Send + Sync> {
        Arc::clone(&self.read)
    }

    fn write_fn(&self) -> Arc<dyn Fn(V) + Send + Sync> {
        Arc::clone(&self.write)
    }
}

impl<V> Clone for ActionTarget<V> {
    fn clone(&self) -> Self {
        Self {
            read: Arc::clone(&self.read),
            write: Arc::clone(&self.write),
        }
    }
}

/// A [`StateContract`] implementation that tweens one target value between
/// per-state end values.
///
/// Construction validates the configuration; [`setup`](StateContract::setup)
/// captures the baseline and builds the reusable tween. The tween is
/// restarted, never recreated, on each state entry.
pub struct TweenedAction<S: State, V: Lerp> {
    label: String,
    data: ActionData<S, V>,
    target: ActionTarget<V>,
    baseline: Option<V>,
    tween: Option<Tween<V>>,
}

impl<S: State, V: Lerp> TweenedAction<S, V> {
    /// Create an action over `target` with the given per-state data.
    ///
    /// Fails loudly on invalid configuration (negative timing, zero cycles):
    /// those are authoring bugs, surfaced before anything runs.
    pub fn new(
        label: impl Into<String>,
        data: ActionData<S, V>,
        target: ActionTarget<V>,
    ) -> Result<Self, ConfigError> {
        data.validate()?;
        Ok(Self {
            label: label.into(),
            data,
            target,
            baseline: None,
            tween: None,
        })
    }

    /// Whether setup succeeded and the action can animate.
    pub fn is_available(&self) -> bool {
        self.tween.is_some()
    }

    /// The baseline captured at setup, if any.
    pub fn baseline(&self) -> Option<&V> {
        self.baseline.as_ref()
    }

    fn resolve_end(&self, end: &EndValue<V>) -> Option<V> {
        match end {
            EndValue::Value(value) => Some(value.clone()),
            EndValue::Baseline => match &self.baseline {
                Some(baseline) => Some(baseline.clone()),
                None => {
                    warn!(action = %self.label, "no baseline captured; skipping");
                    None
                }
            },
        }
    }
}

impl<S: State, V: Lerp> StateContract<S> for TweenedAction<S, V> {
    fn setup(&mut self) {
        match self.target.read() {
            Some(baseline) => {
                self.baseline = Some(baseline);
                self.tween = Some(Tween::new(self.target.read_fn(), self.target.write_fn()));
            }
            None => {
                warn!(
                    action = %self.label,
                    "target could not be read at setup; action disabled"
                );
            }
        }
    }

    fn apply(&mut self, state: S, defaults: &Timing) -> Completion {
        let Some(state_data) = self.data.get(state) else {
            warn!(action = %self.label, state = state.name(), "state has no configuration; skipping");
            return Completion::ready();
        };
        let timing = state_data.timing.resolve(defaults);
        let play = state_data.play;
        let end = state_data.end.clone();
        let Some(end) = self.resolve_end(&end) else {
            return Completion::ready();
        };
        let Some(tween) = self.tween.as_mut() else {
            warn!(action = %self.label, state = state.name(), "action unavailable; skipping");
            return Completion::ready();
        };

        tween.set_play(play);
        if let Err(err) = tween.set_params(end, timing) {
            warn!(action = %self.label, state = state.name(), %err, "invalid timing; skipping");
            return Completion::ready();
        }
        tween.restart()
    }

    fn apply_instant(&mut self, state: S) -> Completion {
        let Some(state_data) = self.data.get(state) else {
            warn!(action = %self.label, state = state.name(), "state has no configuration; skipping");
            return Completion::ready();
        };
        let end = state_data.end.clone();
        let Some(end) = self.resolve_end(&end) else {
            return Completion::ready();
        };
        let Some(tween) = self.tween.as_mut() else {
            warn!(action = %self.label, state = state.name(), "action unavailable; skipping");
            return Completion::ready();
        };

        if let Err(err) = tween.set_params(end, Timing::instant()) {
            warn!(action = %self.label, state = state.name(), %err, "invalid timing; skipping");
            return Completion::ready();
        }
        tween.jump_to_end()
    }
}
