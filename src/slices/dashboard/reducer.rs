use crate::mvi::Reducer;

use super::intent::DashboardIntent;
use super::state::DashboardState;

pub struct DashboardReducer;

impl Reducer for DashboardReducer {
    type State = DashboardState;
    type Intent = DashboardIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DashboardIntent::FetchMetrics(phase) => phase.replace_into(&mut state.metrics),
            DashboardIntent::ClearError => state.metrics.clear_error(),
            DashboardIntent::Reset => return DashboardState::default(),
        }
        state
    }
}
