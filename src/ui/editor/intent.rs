//! Intents for the editor modal.

use crate::ui::mvi::Intent;

/// Intents that can be dispatched to the editor modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorIntent {
    /// The text field changed. Carries the full new value, not a delta.
    SetText(String),

    /// User pressed the confirm button.
    MarkCompleted,

    /// User closed the modal without confirming.
    Dismiss,
}

impl Intent for EditorIntent {}
