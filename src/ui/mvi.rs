//! Unidirectional data flow primitives for the UI layer.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Views are projections of state and never feed back into it; the
//! reducer is the only place transitions happen.

/// Marker trait for user or system actions consumed by a reducer.
pub trait Intent: Send + 'static {}

/// Marker trait for state owned by a reducer.
///
/// States are cloned to produce successors, carry everything the view
/// needs, and are comparable so change detection stays cheap.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Folds intents into state.
///
/// Must be a pure function: (State, Intent) -> State.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
