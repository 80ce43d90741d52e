//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides base traits for implementing unidirectional
//! data flow in the UI layer.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: Immutable representation of UI state
//! - **Intent**: User actions or system events
//! - **Reducer**: Pure function that transforms state based on intents
//!
//! Feature states can embed another feature's state as `Option<State>`.
//! [`reduce_optional`] runs the embedded reducer only while that sub-state
//! exists, which is how the root screen hosts the editor modal.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::{reduce_optional, Reducer};
pub use state::UiState;
