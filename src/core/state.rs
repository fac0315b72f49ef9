//! Core `State` and `Trigger` traits for trigger-driven state machines.
//!
//! States and triggers are closed enumerations. Both traits are pure
//! contracts: they add a display name on top of the derive bounds and
//! nothing else.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine states.
///
/// States are small copyable values drawn from a closed enumeration. They
/// key transition tables and per-state action configuration, so they must be
/// hashable and comparable; they cross the configuration boundary, so they
/// must be serializable.
///
/// The [`state_enum!`](crate::state_enum) macro generates the derives and
/// this impl for plain enums.
///
/// # Required Traits
///
/// - `Copy + Eq + Hash`: states are table keys
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: states appear in persisted configuration
///   and transition history
///
/// # Example
///
/// ```rust
/// use kinestate::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum Visibility {
///     Shown,
///     Hidden,
/// }
///
/// impl State for Visibility {
///     fn name(&self) -> &str {
///         match self {
///             Self::Shown => "Shown",
///             Self::Hidden => "Hidden",
///         }
///     }
/// }
///
/// assert_eq!(Visibility::Shown.name(), "Shown");
/// ```
pub trait State:
    Copy + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync + 'static
{
    /// Get the state's name for display, logging, and DOT output.
    fn name(&self) -> &str;
}

/// Trait for state machine triggers.
///
/// Triggers are pure input events: they carry no payload and never appear on
/// their own in configuration, only as transition-table keys and in the
/// transition history.
///
/// The [`trigger_enum!`](crate::trigger_enum) macro generates the derives and
/// this impl for plain enums.
///
/// # Example
///
/// ```rust
/// use kinestate::core::Trigger;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum Request {
///     Open,
///     Close,
/// }
///
/// impl Trigger for Request {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Close => "Close",
///         }
///     }
/// }
///
/// assert_eq!(Request::Close.name(), "Close");
/// ```
pub trait Trigger:
    Copy + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync + 'static
{
    /// Get the trigger's name for display, logging, and DOT output.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestState {
        Normal,
        Highlighted,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Normal => "Normal",
                Self::Highlighted => "Highlighted",
            }
        }
    }

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestTrigger {
        PointerEnter,
        PointerExit,
    }

    impl Trigger for TestTrigger {
        fn name(&self) -> &str {
            match self {
                Self::PointerEnter => "PointerEnter",
                Self::PointerExit => "PointerExit",
            }
        }
    }

    #[test]
    fn state_name_returns_variant_name() {
        assert_eq!(TestState::Normal.name(), "Normal");
        assert_eq!(TestState::Highlighted.name(), "Highlighted");
    }

    #[test]
    fn trigger_name_returns_variant_name() {
        assert_eq!(TestTrigger::PointerEnter.name(), "PointerEnter");
        assert_eq!(TestTrigger::PointerExit.name(), "PointerExit");
    }

    #[test]
    fn state_serializes_as_plain_string() {
        let json = serde_json::to_string(&TestState::Highlighted).unwrap();
        assert_eq!(json, "\"Highlighted\"");
        let back: TestState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, TestState::Highlighted);
    }

    #[test]
    fn states_work_as_map_keys() {
        let mut map = std::collections::HashMap::new();
        map.insert(TestState::Normal, 1);
        map.insert(TestState::Highlighted, 2);
        assert_eq!(map[&TestState::Normal], 1);
        assert_eq!(map[&TestState::Highlighted], 2);
    }
}
