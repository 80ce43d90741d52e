//! Reducer for the root screen.
//!
//! Editor intents are handled in two steps. The editor reducer runs first,
//! so `MarkCompleted` observes the text as edited. The root's own handling
//! runs second.

use crate::ui::editor::{EditorIntent, EditorReducer, EditorState};
use crate::ui::mvi::{reduce_optional, Reducer};

use super::intent::RootIntent;
use super::state::RootState;

pub struct RootReducer;

impl Reducer for RootReducer {
    type State = RootState;
    type Intent = RootIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let state = delegate(state, &intent);
        intercept(state, intent)
    }
}

fn delegate(mut state: RootState, intent: &RootIntent) -> RootState {
    if let RootIntent::Editor(editor_intent) = intent {
        state.editor = reduce_optional::<EditorReducer>(state.editor.take(), editor_intent.clone());
    }
    state
}

fn intercept(mut state: RootState, intent: RootIntent) -> RootState {
    match intent {
        RootIntent::BeginEditing => {
            state.editor = Some(EditorState::new("", None, false, state.display_text.clone()));
            state
        }

        RootIntent::Editor(EditorIntent::Dismiss) => {
            state.editor = None;
            state
        }

        RootIntent::Editor(EditorIntent::MarkCompleted) => {
            state.display_text = state
                .editor
                .as_ref()
                .map(|editor| editor.text.clone())
                .unwrap_or_default();
            RootReducer::reduce(state, RootIntent::Editor(EditorIntent::Dismiss))
        }

        RootIntent::Editor(EditorIntent::SetText(_)) => state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editing(display: &str, text: &str) -> RootState {
        RootState {
            display_text: display.into(),
            editor: Some(EditorState::new("", None, false, text)),
        }
    }

    #[test]
    fn begin_editing_seeds_editor_with_display_text() {
        let state = RootReducer::reduce(RootState::new("hello"), RootIntent::BeginEditing);
        let editor = state.editor.expect("editor should be open");
        assert_eq!(editor.text, "hello");
        assert_eq!(editor.title(), "");
        assert_eq!(editor.placeholder(), None);
        assert!(!editor.text_required());
    }

    #[test]
    fn begin_editing_while_open_reseeds_editor() {
        let state = RootReducer::reduce(editing("shown", "draft"), RootIntent::BeginEditing);
        assert_eq!(state.editor.map(|e| e.text), Some("shown".to_string()));
    }

    #[test]
    fn set_text_is_delegated() {
        let state = RootReducer::reduce(
            editing("a", "a"),
            RootIntent::Editor(EditorIntent::SetText("b".into())),
        );
        assert_eq!(state.display_text, "a");
        assert_eq!(state.editor.map(|e| e.text), Some("b".to_string()));
    }

    #[test]
    fn mark_completed_copies_text_and_closes() {
        let state = RootReducer::reduce(
            editing("a", "edited"),
            RootIntent::Editor(EditorIntent::MarkCompleted),
        );
        assert_eq!(state.display_text, "edited");
        assert!(state.editor.is_none());
    }

    #[test]
    fn mark_completed_without_editor_clears_display_text() {
        let state = RootReducer::reduce(
            RootState::new("kept?"),
            RootIntent::Editor(EditorIntent::MarkCompleted),
        );
        assert_eq!(state.display_text, "");
        assert!(state.editor.is_none());
    }

    #[test]
    fn dismiss_closes_without_copying() {
        let state = RootReducer::reduce(
            editing("a", "edited"),
            RootIntent::Editor(EditorIntent::Dismiss),
        );
        assert_eq!(state.display_text, "a");
        assert!(state.editor.is_none());
    }
}
