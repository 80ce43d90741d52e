use crate::ui::mvi::UiState;

/// State of an open editor modal.
///
/// `title`, `placeholder` and `text_required` are fixed when the modal is
/// opened; only `text` changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditorState {
    title: String,
    placeholder: Option<String>,
    text_required: bool,
    pub text: String,
}

impl UiState for EditorState {}

impl EditorState {
    pub fn new(
        title: impl Into<String>,
        placeholder: Option<String>,
        text_required: bool,
        text: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            placeholder,
            text_required,
            text: text.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    pub fn text_required(&self) -> bool {
        self.text_required
    }

    /// Whether the confirm button is enabled.
    pub fn is_complete(&self) -> bool {
        if !self.text_required {
            return true;
        }
        !self.text.is_empty()
    }
}
