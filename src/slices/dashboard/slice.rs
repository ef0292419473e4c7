use std::sync::Arc;

use crate::api::ApiService;
use crate::error::OperationError;
use crate::resource::{decode_object, unwrap_envelope};
use crate::store::{run_operation, Operation, SliceCell};

use super::intent::DashboardIntent;
use super::reducer::DashboardReducer;
use super::state::{DashboardMetrics, DashboardState};

const METRICS_PATH: &str = "/dashboard/metrics";
const METRICS_ENVELOPE: &[&str] = &["metrics", "data"];

pub struct DashboardSlice {
    cell: SliceCell<DashboardReducer>,
    api: Arc<dyn ApiService>,
}

impl DashboardSlice {
    pub fn new(api: Arc<dyn ApiService>) -> Self {
        Self {
            cell: SliceCell::new(),
            api,
        }
    }

    pub fn state(&self) -> DashboardState {
        self.cell.snapshot()
    }

    pub async fn fetch_metrics(&self) -> Result<DashboardMetrics, OperationError> {
        let operation = Operation::new(
            "dashboard/fetch_metrics",
            "Failed to fetch dashboard metrics",
        );
        run_operation(
            &self.cell,
            &operation,
            DashboardIntent::FetchMetrics,
            self.api.get(METRICS_PATH),
            |raw| decode_object(unwrap_envelope(raw, METRICS_ENVELOPE)),
        )
        .await
    }

    pub fn clear_error(&self) {
        self.cell.dispatch(DashboardIntent::ClearError);
    }

    pub fn reset(&self) {
        self.cell.dispatch(DashboardIntent::Reset);
    }
}
