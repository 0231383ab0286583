//! Marker trait for intents.

/// Something that happened and may change UI state: a key press that
/// starts a fetch, or a fetch that settled.
pub trait Intent: Send + 'static {}
