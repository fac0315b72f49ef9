//! Timing configuration: delay, duration, and easing, with per-action
//! overrides.

use crate::anim::ease::Ease;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Configuration errors for timing and playback settings.
///
/// These are authoring mistakes and are rejected at configuration time,
/// never clamped: a silently-clamped negative duration would mask the bug.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("delay must be a non-negative, finite number of seconds (got {value})")]
    InvalidDelay { value: f32 },

    #[error("duration must be a non-negative, finite number of seconds (got {value})")]
    InvalidDuration { value: f32 },

    #[error("cycle count must be at least 1")]
    ZeroCycles,
}

/// Resolved timing for one tween run: delay and duration in seconds plus the
/// easing curve.
///
/// Defaults match the stock animation profile: no delay, half a second,
/// decelerating quad.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Timing {
    pub delay: f32,
    pub duration: f32,
    pub ease: Ease,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            delay: 0.0,
            duration: 0.5,
            ease: Ease::OutQuad,
        }
    }
}

impl Timing {
    /// Timing for the instant path: zero delay, zero duration.
    pub fn instant() -> Self {
        Self {
            delay: 0.0,
            duration: 0.0,
            ease: Ease::Linear,
        }
    }

    /// Validate that delay and duration are non-negative and finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.delay >= 0.0 && self.delay.is_finite()) {
            return Err(ConfigError::InvalidDelay { value: self.delay });
        }
        if !(self.duration >= 0.0 && self.duration.is_finite()) {
            return Err(ConfigError::InvalidDuration {
                value: self.duration,
            });
        }
        Ok(())
    }

    pub(crate) fn delay_duration(&self) -> Duration {
        Duration::from_secs_f32(self.delay)
    }

    pub(crate) fn play_duration(&self) -> Duration {
        Duration::from_secs_f32(self.duration)
    }
}

/// Per-action timing override.
///
/// Three independent flags gate whether delay, duration, and ease use the
/// local value or fall back to the element-supplied default, so an action
/// can customize just one dimension and inherit the rest.
///
/// # Example
///
/// ```rust
/// use kinestate::anim::{Timing, TimingOverride};
///
/// let defaults = Timing { delay: 0.25, ..Timing::default() };
/// let over = TimingOverride {
///     use_custom_duration: true,
///     duration: 2.0,
///     ..TimingOverride::default()
/// };
///
/// let resolved = over.resolve(&defaults);
/// assert_eq!(resolved.duration, 2.0);   // local override
/// assert_eq!(resolved.delay, 0.25);     // element default
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingOverride {
    pub use_custom_delay: bool,
    pub delay: f32,
    pub use_custom_duration: bool,
    pub duration: f32,
    pub use_custom_ease: bool,
    pub ease: Ease,
}

impl TimingOverride {
    /// Resolve against element defaults, taking each overridden dimension
    /// locally and the rest from `defaults`.
    pub fn resolve(&self, defaults: &Timing) -> Timing {
        Timing {
            delay: if self.use_custom_delay {
                self.delay
            } else {
                defaults.delay
            },
            duration: if self.use_custom_duration {
                self.duration
            } else {
                defaults.duration
            },
            ease: if self.use_custom_ease {
                self.ease
            } else {
                defaults.ease
            },
        }
    }

    /// Validate the overridden dimensions. Inactive values are not checked:
    /// they never take effect.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.use_custom_delay && !(self.delay >= 0.0 && self.delay.is_finite()) {
            return Err(ConfigError::InvalidDelay { value: self.delay });
        }
        if self.use_custom_duration && !(self.duration >= 0.0 && self.duration.is_finite()) {
            return Err(ConfigError::InvalidDuration {
                value: self.duration,
            });
        }
        Ok(())
    }
}
