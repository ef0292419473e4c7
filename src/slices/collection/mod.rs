//! Generic collection slice: an ordered entity sequence with selection.
//!
//! Positions and job roles are plain instantiations; question sets wrap the
//! same intents in a reducer that also maintains a secondary index.
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Sequence resource plus the selected entity
//! - `intent.rs` - Async phases and synchronous mutators
//! - `reducer.rs` - State transitions
//! - `slice.rs` - Dispatchers wired to the service

mod intent;
mod reducer;
mod resource;
mod slice;
mod state;

pub use intent::CollectionIntent;
pub use reducer::CollectionReducer;
pub use resource::Resource;
pub use slice::CollectionSlice;
pub(crate) use slice::op_name;
pub use state::CollectionState;
