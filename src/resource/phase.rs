//! The three phases of an async operation.

use crate::error::OperationError;

use super::async_resource::AsyncResource;

/// Outcome reported to a reducer by a dispatcher.
#[derive(Debug, Clone, PartialEq)]
pub enum AsyncPhase<P> {
    /// The external call has been issued.
    Pending,
    /// The external call succeeded with a decoded payload.
    Fulfilled(P),
    /// The external call failed; the error is already normalized.
    Rejected(OperationError),
}

impl<P> AsyncPhase<P> {
    /// Apply fetch semantics: the payload replaces the data, a rejection
    /// empties it.
    pub fn replace_into<D>(self, resource: &mut AsyncResource<D>)
    where
        D: Default,
        P: Into<D>,
    {
        match self {
            AsyncPhase::Pending => resource.start(),
            AsyncPhase::Fulfilled(payload) => resource.fulfill(payload.into()),
            AsyncPhase::Rejected(error) => resource.reject(error),
        }
    }
}
