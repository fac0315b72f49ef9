//! Per-state action configuration.
//!
//! This is the opaque, serde-friendly lookup an action consults on every
//! state entry. End values distinguish three cases exhaustively: an explicit
//! target ([`EndValue::Value`]), "return to the captured baseline"
//! ([`EndValue::Baseline`]), and no configuration at all (the state is
//! absent from the map, handled as warn-and-no-op at apply time).

use crate::anim::{ConfigError, PlayConfig, TimingOverride};
use crate::core::State;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Where a state's animation should converge.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum EndValue<V> {
    /// Converge to the value captured from the target at setup time. This is
    /// how a default/neutral state means "return to however it started".
    Baseline,
    /// Converge to an explicit target value.
    Value(V),
}

/// Configuration for one state on one action.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateActionData<V> {
    pub end: EndValue<V>,
    #[serde(default)]
    pub timing: TimingOverride,
    #[serde(default)]
    pub play: PlayConfig,
}

impl<V> StateActionData<V> {
    /// Animate to an explicit value with inherited timing.
    pub fn to_value(value: V) -> Self {
        Self {
            end: EndValue::Value(value),
            timing: TimingOverride::default(),
            play: PlayConfig::default(),
        }
    }

    /// Animate back to the captured baseline with inherited timing.
    pub fn to_baseline() -> Self {
        Self {
            end: EndValue::Baseline,
            timing: TimingOverride::default(),
            play: PlayConfig::default(),
        }
    }

    /// Replace the timing override.
    pub fn with_timing(mut self, timing: TimingOverride) -> Self {
        self.timing = timing;
        self
    }

    /// Replace the playback shape.
    pub fn with_play(mut self, play: PlayConfig) -> Self {
        self.play = play;
        self
    }

    /// Validate timing and playback settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.timing.validate()?;
        self.play.validate()
    }
}

/// Map from state to that state's action configuration.
///
/// # Example
///
/// ```rust
/// use kinestate::action::{ActionData, StateActionData};
/// use kinestate::state_enum;
///
/// state_enum! {
///     pub enum Fade { Visible, Dimmed }
/// }
///
/// let data: ActionData<Fade, f32> = ActionData::new()
///     .state(Fade::Visible, StateActionData::to_baseline())
///     .state(Fade::Dimmed, StateActionData::to_value(0.35));
///
/// assert!(data.get(Fade::Dimmed).is_some());
/// assert!(data.validate().is_ok());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound(serialize = "V: Serialize", deserialize = "V: Deserialize<'de>"))]
pub struct ActionData<S: State, V> {
    states: HashMap<S, StateActionData<V>>,
}

impl<S: State, V> Default for ActionData<S, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, V> ActionData<S, V> {
    pub fn new() -> Self {
        Self {
            states: HashMap::new(),
        }
    }

    /// Add or replace the configuration for a state (chainable).
    pub fn state(mut self, state: S, data: StateActionData<V>) -> Self {
        self.states.insert(state, data);
        self
    }

    /// Look up a state's configuration.
    pub fn get(&self, state: S) -> Option<&StateActionData<V>> {
        self.states.get(&state)
    }

    /// Number of configured states.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Validate every configured state's timing and playback settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for data in self.states.values() {
            data.validate()?;
        }
        Ok(())
    }
}
