//! Marker trait for UI state.

/// State objects are cloneable snapshots, comparable for change detection
/// and defaulting to the state shown before anything has happened.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
