//! Base trait for UI state in MVI architecture.

/// Marker trait for UI state objects.
///
/// A state is a self-contained value: everything the view needs to
/// render, cloneable to produce successors, comparable to detect change.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
