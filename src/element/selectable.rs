//! Selectable element: the 4-state pointer-interaction table.

use crate::core::TransitionTable;
use crate::element::ElementBuilder;
use crate::{state_enum, trigger_enum};

state_enum! {
    /// Interaction states for a selectable element.
    pub enum SelectableState {
        /// Not interacted with.
        Normal,
        /// Hovered or selected.
        Highlighted,
        /// Pressed with the pointer inside the element's bounds.
        PressedInside,
        /// Pressed with the pointer outside the element's bounds.
        PressedOutside,
    }
}

trigger_enum! {
    /// Pointer and selection triggers driving the selectable table.
    pub enum SelectableTrigger {
        PointerEnter,
        PointerExit,
        PointerDown,
        PointerClick,
        Select,
        Deselect,
        PointerUp,
        Submit,
        Cancel,
        UnPressed,
    }
}

/// The canonical selectable table.
///
/// Normal explicitly ignores clicks and releases; Highlighted re-enters on
/// click so click feedback replays; releasing outside the bounds returns to
/// Normal without a click.
pub fn selectable_table() -> TransitionTable<SelectableState, SelectableTrigger> {
    TransitionTable::builder()
        .state(SelectableState::Normal, |s| {
            s.ignore(SelectableTrigger::PointerClick)
                .ignore(SelectableTrigger::UnPressed)
                .permit(SelectableTrigger::PointerEnter, SelectableState::Highlighted)
                .permit(SelectableTrigger::Select, SelectableState::Highlighted)
        })
        .state(SelectableState::Highlighted, |s| {
            s.permit_reentry(SelectableTrigger::PointerClick)
                .permit(SelectableTrigger::PointerExit, SelectableState::Normal)
                .permit(SelectableTrigger::Deselect, SelectableState::Normal)
                .permit(SelectableTrigger::PointerDown, SelectableState::PressedInside)
                .permit(SelectableTrigger::Submit, SelectableState::PressedInside)
                .permit(SelectableTrigger::Cancel, SelectableState::Normal)
        })
        .state(SelectableState::PressedInside, |s| {
            s.ignore(SelectableTrigger::Cancel)
                .permit(SelectableTrigger::PointerExit, SelectableState::PressedOutside)
                .permit(SelectableTrigger::Deselect, SelectableState::PressedOutside)
                .permit(SelectableTrigger::PointerUp, SelectableState::Highlighted)
                .permit(SelectableTrigger::UnPressed, SelectableState::Highlighted)
        })
        .state(SelectableState::PressedOutside, |s| {
            s.permit(SelectableTrigger::Cancel, SelectableState::Normal)
                .permit(SelectableTrigger::UnPressed, SelectableState::Normal)
                .permit(SelectableTrigger::PointerEnter, SelectableState::PressedInside)
                .permit(SelectableTrigger::Select, SelectableState::PressedInside)
                .permit(SelectableTrigger::PointerUp, SelectableState::Normal)
        })
        .build()
        .expect("selectable table is statically valid")
}

/// Element builder preloaded with the selectable table, starting at
/// `Normal`.
pub fn selectable() -> ElementBuilder<SelectableState, SelectableTrigger> {
    ElementBuilder::new(SelectableState::Normal, selectable_table())
}
