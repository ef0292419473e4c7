//! Base trait for intents (phase results and mutations) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - Phases of an async operation (pending, fulfilled, rejected)
/// - Synchronous mutators (select, clear error, reset)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
