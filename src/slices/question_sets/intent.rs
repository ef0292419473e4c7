use crate::mvi::Intent;
use crate::resource::AsyncPhase;
use crate::slices::collection::CollectionIntent;
use crate::slices::positions::PositionId;

use super::model::QuestionSet;

#[derive(Debug, Clone, PartialEq)]
pub enum QuestionSetsIntent {
    /// Shared collection operations; also maintain the index.
    Collection(CollectionIntent<QuestionSet>),

    /// Fetch of one position's sets; fills that index group.
    FetchByPosition {
        position_id: PositionId,
        phase: AsyncPhase<Vec<QuestionSet>>,
    },
}

impl From<CollectionIntent<QuestionSet>> for QuestionSetsIntent {
    fn from(intent: CollectionIntent<QuestionSet>) -> Self {
        QuestionSetsIntent::Collection(intent)
    }
}

impl Intent for QuestionSetsIntent {}
