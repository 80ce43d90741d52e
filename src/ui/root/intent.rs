use crate::ui::editor::EditorIntent;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RootIntent {
    /// Open the editor seeded with the current display text.
    BeginEditing,
    /// An intent raised inside the editor modal.
    Editor(EditorIntent),
}

impl Intent for RootIntent {}

impl From<EditorIntent> for RootIntent {
    fn from(intent: EditorIntent) -> Self {
        Self::Editor(intent)
    }
}
