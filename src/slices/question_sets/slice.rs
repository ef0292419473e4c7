use crate::error::OperationError;
use crate::resource::{sequence_or_empty, unwrap_envelope, AsyncPhase};
use crate::slices::collection::{op_name, CollectionSlice, Resource};
use crate::slices::positions::PositionId;
use crate::store::{run_operation, Operation};

use super::intent::QuestionSetsIntent;
use super::model::QuestionSet;
use super::reducer::QuestionSetsReducer;

pub type QuestionSetsSlice = CollectionSlice<QuestionSet, QuestionSetsReducer>;

impl CollectionSlice<QuestionSet, QuestionSetsReducer> {
    /// Fetch the sets belonging to one position into its index group.
    pub async fn fetch_by_position(
        &self,
        position_id: PositionId,
    ) -> Result<Vec<QuestionSet>, OperationError> {
        let operation = Operation::new(
            op_name::<QuestionSet>("fetch_by_position"),
            "Failed to fetch question sets for position",
        );
        let path = format!("{}/position/{}", QuestionSet::PATH, position_id);
        let name = operation.name.clone();
        run_operation(
            &self.cell,
            &operation,
            move |phase: AsyncPhase<Vec<QuestionSet>>| QuestionSetsIntent::FetchByPosition {
                position_id,
                phase,
            },
            self.api.get(&path),
            |raw| {
                Ok(sequence_or_empty(
                    unwrap_envelope(raw, QuestionSet::LIST_ENVELOPE),
                    &name,
                ))
            },
        )
        .await
    }
}
