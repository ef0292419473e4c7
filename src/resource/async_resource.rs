//! Data plus its async lifecycle flags.

use serde::Serialize;

use crate::error::OperationError;

/// A resource populated by an async operation.
///
/// `D` is `Option<T>` for single objects and `Vec<T>` for sequences; its
/// `Default` is the "empty" value restored on rejection and reset.
///
/// Starting a request clears the previous error. Completion always clears
/// `loading` and leaves exactly one of fresh data or an error.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct AsyncResource<D> {
    data: D,
    loading: bool,
    error: Option<OperationError>,
}

impl<D: Default> AsyncResource<D> {
    pub fn data(&self) -> &D {
        &self.data
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&OperationError> {
        self.error.as_ref()
    }

    /// Pending phase.
    pub fn start(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Fulfilled phase of a fetch: the payload replaces the data.
    pub fn fulfill(&mut self, data: D) {
        self.data = data;
        self.loading = false;
        self.error = None;
    }

    /// Rejected phase of a fetch: data goes back to empty.
    pub fn reject(&mut self, error: OperationError) {
        self.data = D::default();
        self.loading = false;
        self.error = Some(error);
    }

    /// Fulfilled phase of a mutation. Returns the data for in-place edits.
    pub fn complete(&mut self) -> &mut D {
        self.loading = false;
        self.error = None;
        &mut self.data
    }

    /// Rejected phase of a mutation: already-loaded data is kept.
    pub fn fail(&mut self, error: OperationError) {
        self.loading = false;
        self.error = Some(error);
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}
