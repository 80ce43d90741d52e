//! Base trait for UI state in MVI architecture.

/// Marker trait for UI state objects.
///
/// A state value holds everything its view needs to render. Transitions
/// produce a new value (`Clone`), and `PartialEq` lets tests and the
/// runtime compare before/after snapshots. `Default` is the value a
/// dispatcher leaves behind while a reducer owns the state.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
