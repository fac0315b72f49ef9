//! State-driven actions: the contract, per-state configuration data, and
//! the tween-backed implementation.
//!
//! Targets are bound explicitly through [`ActionTarget`] accessor pairs,
//! a strongly-typed seam in place of any runtime target discovery.

pub mod contract;
pub mod data;
pub mod tweened;

pub use contract::StateContract;
pub use data::{ActionData, EndValue, StateActionData};
pub use tweened::{ActionTarget, TweenedAction};
