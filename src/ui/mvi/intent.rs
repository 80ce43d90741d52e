//! Base trait for intents in MVI architecture.

/// Marker trait for intent objects.
///
/// An intent describes something that happened: a key the user pressed
/// (`SetText`, `BeginEditing`) or a signal one feature raises for its host
/// to observe (`MarkCompleted`). Reducers consume intents; views only emit
/// them.
pub trait Intent: Send + 'static {}
