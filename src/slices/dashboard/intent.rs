use crate::mvi::Intent;
use crate::resource::AsyncPhase;

use super::state::DashboardMetrics;

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardIntent {
    FetchMetrics(AsyncPhase<DashboardMetrics>),
    ClearError,
    Reset,
}

impl Intent for DashboardIntent {}
