use crate::ui::editor::EditorState;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RootState {
    pub display_text: String,
    /// `Some` exactly while the editor modal is shown.
    pub editor: Option<EditorState>,
}

impl UiState for RootState {}

impl RootState {
    pub fn new(display_text: impl Into<String>) -> Self {
        Self {
            display_text: display_text.into(),
            editor: None,
        }
    }

    pub fn is_presented(&self) -> bool {
        self.editor.is_some()
    }
}
