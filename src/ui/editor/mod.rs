//! Text editor modal feature module.
//!
//! The editor is a leaf feature: it knows nothing about the screen that
//! hosts it. It raises `MarkCompleted` and `Dismiss` as signals and lets
//! the host decide what they mean.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Editable text plus immutable display metadata
//! - `intent.rs` - User actions
//! - `reducer.rs` - State transitions
//! - `dialog.rs` - Rendering

mod dialog;
mod intent;
mod reducer;
mod state;

pub use dialog::render_editor_dialog;
pub use intent::EditorIntent;
pub use reducer::EditorReducer;
pub use state::EditorState;
