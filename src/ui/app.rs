use crate::ui::editor::{EditorIntent, EditorState};
use crate::ui::mvi::Reducer;
use crate::ui::root::{RootIntent, RootReducer, RootState};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Single owner of the screen state.
///
/// All state changes go through [`App::dispatch`]. Everything else on this
/// type is a read accessor or terminal bookkeeping.
pub struct App {
    should_quit: bool,
    /// Root screen state (MVI pattern).
    root: RootState,
}

impl App {
    pub fn new(display_text: impl Into<String>) -> Self {
        Self::from_state(RootState::new(display_text))
    }

    pub fn from_state(root: RootState) -> Self {
        Self {
            should_quit: false,
            root,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn root(&self) -> &RootState {
        &self.root
    }

    pub fn editor(&self) -> Option<&EditorState> {
        self.root.editor.as_ref()
    }

    /// True while the editor modal is shown.
    pub fn is_presented(&self) -> bool {
        self.root.is_presented()
    }

    /// Dispatch an intent to the root reducer.
    pub fn dispatch(&mut self, intent: RootIntent) {
        tracing::debug!(?intent, "dispatch");
        let was_presented = self.is_presented();
        dispatch_mvi!(self, root, RootReducer, intent);

        match (was_presented, self.is_presented()) {
            (false, true) => tracing::info!("editor presented"),
            (true, false) => {
                tracing::info!(display_text = %self.root.display_text, "editor closed")
            }
            _ => {}
        }
    }

    pub fn dispatch_editor(&mut self, intent: EditorIntent) {
        self.dispatch(RootIntent::Editor(intent));
    }

    /// Press the Add button. Does nothing while the button is disabled.
    pub fn confirm_editor(&mut self) -> bool {
        let enabled = self.editor().is_some_and(EditorState::is_complete);
        if enabled {
            self.dispatch_editor(EditorIntent::MarkCompleted);
        } else {
            tracing::debug!("confirm ignored: editor missing or incomplete");
        }
        enabled
    }

    /// Emit `SetText` with the current text plus `ch`.
    pub fn type_char(&mut self, ch: char) {
        let Some(editor) = self.editor() else {
            return;
        };
        let mut text = editor.text.clone();
        text.push(ch);
        self.dispatch_editor(EditorIntent::SetText(text));
    }

    /// Emit `SetText` with the last char removed.
    pub fn backspace(&mut self) {
        let Some(editor) = self.editor() else {
            return;
        };
        let mut text = editor.text.clone();
        if text.pop().is_none() {
            return;
        }
        self.dispatch_editor(EditorIntent::SetText(text));
    }

    pub fn clear_text(&mut self) {
        if self.is_presented() {
            self.dispatch_editor(EditorIntent::SetText(String::new()));
        }
    }
}
