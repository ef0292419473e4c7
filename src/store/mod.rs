//! The application store: an explicit aggregate of every slice.
//!
//! There is no global instance. Build one with [`Store::new`] and hand clones
//! to whatever needs it; clones share the same slices.

mod cell;
mod thunk;

use std::sync::Arc;

use crate::api::ApiService;
use crate::slices::dashboard::DashboardSlice;
use crate::slices::job_roles::JobRolesSlice;
use crate::slices::positions::PositionsSlice;
use crate::slices::question_sets::QuestionSetsSlice;

pub use cell::SliceCell;
pub use thunk::{run_operation, Operation};

#[derive(Clone)]
pub struct Store {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    dashboard: DashboardSlice,
    positions: PositionsSlice,
    question_sets: QuestionSetsSlice,
    job_roles: JobRolesSlice,
}

impl Store {
    /// Create every slice in its initial empty state, all sharing `api`.
    pub fn new(api: Arc<dyn ApiService>) -> Self {
        let inner = StoreInner {
            dashboard: DashboardSlice::new(api.clone()),
            positions: PositionsSlice::new(api.clone()),
            question_sets: QuestionSetsSlice::new(api.clone()),
            job_roles: JobRolesSlice::new(api),
        };
        Self {
            inner: Arc::new(inner),
        }
    }

    pub fn dashboard(&self) -> &DashboardSlice {
        &self.inner.dashboard
    }

    pub fn positions(&self) -> &PositionsSlice {
        &self.inner.positions
    }

    pub fn question_sets(&self) -> &QuestionSetsSlice {
        &self.inner.question_sets
    }

    pub fn job_roles(&self) -> &JobRolesSlice {
        &self.inner.job_roles
    }

    /// Reset every slice to its initial state.
    pub fn reset_all(&self) {
        self.dashboard().reset();
        self.positions().reset();
        self.question_sets().reset();
        self.job_roles().reset();
        tracing::debug!("Store reset");
    }
}
