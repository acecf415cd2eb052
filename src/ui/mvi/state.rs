//! Base trait for UI state in MVI architecture.

/// Marker trait for UI state objects.
///
/// A state value alone must be enough to render its part of the screen.
/// `PartialEq` lets tests and the runtime detect no-op transitions.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
