//! Animation primitives: easing, interpolation, timing, completions, and
//! the reusable tween handle.
//!
//! Nothing in this module knows about states or state machines; it is the
//! capability layer the [`action`](crate::action) module drives.

pub mod completion;
pub mod ease;
pub mod lerp;
pub mod timing;
pub mod tween;

pub use completion::{Completion, CompletionSource};
pub use ease::Ease;
pub use lerp::Lerp;
pub use timing::{ConfigError, Timing, TimingOverride};
pub use tween::{Animatable, PlayConfig, Tween};
