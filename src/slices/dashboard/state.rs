use serde::{Deserialize, Serialize};

use crate::error::OperationError;
use crate::mvi::SliceState;
use crate::resource::AsyncResource;
use crate::slices::positions::Position;

/// Aggregate counts shown on the dashboard. Missing fields read as zero.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub total_positions: u64,
    pub open_positions: u64,
    pub total_question_sets: u64,
    pub total_questions: u64,
    pub total_job_roles: u64,
    pub recent_positions: Vec<Position>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct DashboardState {
    pub(crate) metrics: AsyncResource<Option<DashboardMetrics>>,
}

impl SliceState for DashboardState {}

impl DashboardState {
    pub fn metrics(&self) -> Option<&DashboardMetrics> {
        self.metrics.data().as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.metrics.is_loading()
    }

    pub fn error(&self) -> Option<&OperationError> {
        self.metrics.error()
    }
}
