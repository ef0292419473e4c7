//! Dashboard summary metrics.
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Metrics resource
//! - `intent.rs` - Fetch phases and mutators
//! - `reducer.rs` - State transitions
//! - `slice.rs` - Dispatcher wired to the service

mod intent;
mod reducer;
mod slice;
mod state;

pub use intent::DashboardIntent;
pub use reducer::DashboardReducer;
pub use slice::DashboardSlice;
pub use state::{DashboardMetrics, DashboardState};
