//! Kinestate: a trigger-driven state machine core for animated,
//! state-keyed actions.
//!
//! Kinestate separates a pure data core from an imperative execution shell.
//! Transition tables are immutable data built and validated up front; firing
//! a trigger is synchronous; the only things callers ever await are the
//! completion signals of the animations a state entry started.
//!
//! # Core Concepts
//!
//! - **States and triggers**: closed enumerations via the [`core::State`]
//!   and [`core::Trigger`] traits (or the `state_enum!`/`trigger_enum!`
//!   macros)
//! - **Transition tables**: every `(state, trigger)` pair maps to exactly
//!   one outcome: permit, reentry, or explicit ignore
//! - **Actions**: per-state visual effects behind the
//!   [`action::StateContract`] trait, tweening a target value toward each
//!   state's configured end value
//! - **Elements**: one machine fanning out to an ordered action list, with
//!   per-state listeners and awaitable execution batches
//!
//! # Example
//!
//! ```rust
//! use kinestate::action::{ActionData, ActionTarget, StateActionData, TweenedAction};
//! use kinestate::anim::Timing;
//! use kinestate::element::switch::{self, SwitchState, SwitchTrigger};
//! use std::sync::{Arc, Mutex};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! // A shared alpha value stands in for the visual being driven.
//! let alpha = Arc::new(Mutex::new(1.0f32));
//!
//! let data = ActionData::new()
//!     .state(SwitchState::Show, StateActionData::to_baseline())
//!     .state(SwitchState::Hide, StateActionData::to_value(0.0));
//! let fade = TweenedAction::new("fade", data, ActionTarget::shared(Arc::clone(&alpha))).unwrap();
//!
//! let mut element = switch::switch()
//!     .timing(Timing { duration: 0.05, ..Timing::default() })
//!     .action(fade)
//!     .build()
//!     .unwrap();
//!
//! element.fire(SwitchTrigger::OnHide).unwrap();
//! element.when_execution_completes().await;
//! assert_eq!(*alpha.lock().unwrap(), 0.0);
//!
//! // Show is configured "use baseline": the alpha returns to its
//! // captured starting value.
//! element.fire(SwitchTrigger::OnShow).unwrap();
//! element.when_execution_completes().await;
//! assert_eq!(*alpha.lock().unwrap(), 1.0);
//! # }
//! ```

pub mod action;
pub mod anim;
pub mod builder;
pub mod core;
pub mod element;
pub mod machine;

// Re-export commonly used types
pub use action::{ActionData, ActionTarget, EndValue, StateActionData, StateContract, TweenedAction};
pub use anim::{Completion, Ease, Lerp, Timing, TimingOverride};
pub use builder::BuildError;
pub use core::{Outcome, State, TransitionTable, Trigger};
pub use element::{Element, ElementBuilder};
pub use machine::{Fired, StateMachine, TransitionError};
