use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::OperationError;
use crate::mvi::SliceState;
use crate::slices::collection::CollectionState;
use crate::slices::positions::PositionId;

use super::model::{QuestionSet, QuestionSetId};

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct QuestionSetsState {
    #[serde(flatten)]
    pub(crate) base: CollectionState<QuestionSet>,
    pub(crate) by_position: BTreeMap<PositionId, Vec<QuestionSet>>,
}

impl SliceState for QuestionSetsState {}

impl QuestionSetsState {
    pub fn items(&self) -> &[QuestionSet] {
        self.base.items()
    }

    pub fn is_loading(&self) -> bool {
        self.base.is_loading()
    }

    pub fn error(&self) -> Option<&OperationError> {
        self.base.error()
    }

    pub fn selected(&self) -> Option<&QuestionSet> {
        self.base.selected()
    }

    pub fn find(&self, id: QuestionSetId) -> Option<&QuestionSet> {
        self.base.find(id)
    }

    pub fn by_position(&self) -> &BTreeMap<PositionId, Vec<QuestionSet>> {
        &self.by_position
    }

    /// The sets indexed under `position_id`; `None` when never populated.
    pub fn group(&self, position_id: PositionId) -> Option<&[QuestionSet]> {
        self.by_position.get(&position_id).map(Vec::as_slice)
    }
}
