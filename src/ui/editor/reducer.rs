//! Reducer for the editor modal.

use crate::ui::mvi::Reducer;

use super::intent::EditorIntent;
use super::state::EditorState;

/// Reducer for editor state transitions.
pub struct EditorReducer;

impl Reducer for EditorReducer {
    type State = EditorState;
    type Intent = EditorIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            EditorIntent::SetText(value) => {
                if !value.is_empty() {
                    state.text = value;
                } else {
                    state.text = String::new();
                }
                state
            }

            // Signals for the host; nothing changes here.
            EditorIntent::MarkCompleted | EditorIntent::Dismiss => state,
        }
    }
}
