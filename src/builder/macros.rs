//! Macros for declaring closed state and trigger sets.

/// Generate a state enum with the derives and `State` impl.
///
/// # Example
///
/// ```
/// use kinestate::state_enum;
///
/// state_enum! {
///     pub enum MenuState {
///         Shown,
///         Hidden,
///     }
/// }
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone, Copy, PartialEq, Eq, Hash, Debug,
            serde::Serialize, serde::Deserialize,
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

/// Generate a trigger enum with the derives and `Trigger` impl.
///
/// # Example
///
/// ```
/// use kinestate::trigger_enum;
///
/// trigger_enum! {
///     pub enum MenuTrigger {
///         Show,
///         Hide,
///     }
/// }
/// ```
#[macro_export]
macro_rules! trigger_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone, Copy, PartialEq, Eq, Hash, Debug,
            serde::Serialize, serde::Deserialize,
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Trigger for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{State, Trigger};

    state_enum! {
        enum TestState {
            First,
            Second,
        }
    }

    trigger_enum! {
        enum TestTrigger {
            Advance,
        }
    }

    #[test]
    fn state_enum_macro_generates_trait() {
        assert_eq!(TestState::First.name(), "First");
        assert_eq!(TestState::Second.name(), "Second");
    }

    #[test]
    fn trigger_enum_macro_generates_trait() {
        assert_eq!(TestTrigger::Advance.name(), "Advance");
    }

    #[test]
    fn macros_support_visibility_and_attributes() {
        state_enum! {
            /// States visible to the whole crate.
            pub enum PublicState {
                A,
                B,
            }
        }

        let _state = PublicState::A;
        assert_eq!(PublicState::B.name(), "B");
    }
}
