//! Question sets, indexed by the position they belong to.
//!
//! The primary sequence and the per-position index are updated in the same
//! reduction, so readers never observe one without the other.
//!
//! Groups are never pruned when a position is deleted elsewhere; an emptied
//! group stays in the index as an empty sequence.

mod intent;
mod model;
mod reducer;
mod slice;
mod state;

pub use intent::QuestionSetsIntent;
pub use model::{Question, QuestionSet, QuestionSetDraft, QuestionSetId};
pub use reducer::QuestionSetsReducer;
pub use slice::QuestionSetsSlice;
pub use state::QuestionSetsState;
