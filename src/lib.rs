//! Normalized async-resource state containers for the recruiting dashboard.
//!
//! Each resource domain (dashboard metrics, positions, question sets, job
//! roles) is a slice: state that only changes through a reducer, fed by
//! dispatchers that call an [`api::ApiService`] and report pending, fulfilled
//! or rejected.

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod mvi;
pub mod resource;
pub mod slices;
pub mod store;

pub use error::{OperationError, ServiceFailure};
pub use store::Store;
