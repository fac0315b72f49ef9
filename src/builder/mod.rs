//! Builder API for transition table construction.
//!
//! Tables are declared fluently, one state at a time, and validated at
//! `build()`: conflicts and empty tables are loud construction-time errors,
//! never fire-time surprises. The `state_enum!` and `trigger_enum!` macros
//! live here as well.

pub mod error;
pub mod macros;
pub mod table;

pub use error::BuildError;
pub use table::{StateRules, TransitionTableBuilder};
