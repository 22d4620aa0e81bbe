//! User intents the screen reacts to.

use crate::Slot;

/// Everything a user can do on the screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SumadorEvent {
    /// The text of an input changed; carries the field's full new text.
    InputChanged(Slot, String),
    /// The compute button was pressed.
    ComputeRequested,
    /// The clear button of the history panel was pressed.
    ClearHistoryRequested,
}
