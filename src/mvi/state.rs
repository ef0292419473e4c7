//! Base trait for slice state in MVI architecture.

/// Marker trait for slice state objects.
///
/// States should be:
/// - Cloneable (consumers only ever see snapshots)
/// - Comparable (PartialEq for detecting changes)
/// - Defaultable (the initial value restored by a reset)
pub trait SliceState: Clone + PartialEq + Default + Send + 'static {}
