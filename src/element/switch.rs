//! Show/hide element: the 2-state switch table.

use crate::core::TransitionTable;
use crate::element::ElementBuilder;
use crate::{state_enum, trigger_enum};

state_enum! {
    /// Visibility states for a switchable element.
    pub enum SwitchState {
        /// The element is visible and ready to play show actions.
        Show,
        /// The element is hidden.
        Hide,
    }
}

trigger_enum! {
    /// Triggers controlling the switch table.
    pub enum SwitchTrigger {
        /// Request the show state.
        OnShow,
        /// Request the hide state.
        OnHide,
    }
}

/// The canonical show/hide table. Requesting the current state again
/// re-enters it, so show/hide actions replay.
pub fn switch_table() -> TransitionTable<SwitchState, SwitchTrigger> {
    TransitionTable::builder()
        .state(SwitchState::Show, |s| {
            s.permit(SwitchTrigger::OnHide, SwitchState::Hide)
                .permit_reentry(SwitchTrigger::OnShow)
        })
        .state(SwitchState::Hide, |s| {
            s.permit(SwitchTrigger::OnShow, SwitchState::Show)
                .permit_reentry(SwitchTrigger::OnHide)
        })
        .build()
        .expect("switch table is statically valid")
}

/// Element builder preloaded with the switch table, starting at `Show`.
pub fn switch() -> ElementBuilder<SwitchState, SwitchTrigger> {
    ElementBuilder::new(SwitchState::Show, switch_table())
}
