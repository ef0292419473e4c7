//! Reducer for question sets and their per-position index.

use std::collections::BTreeMap;

use crate::mvi::Reducer;
use crate::resource::{find_by_id, remove_by_id, upsert_by_id, AsyncPhase};
use crate::slices::collection::{CollectionIntent, CollectionReducer};
use crate::slices::positions::PositionId;

use super::intent::QuestionSetsIntent;
use super::model::QuestionSet;
use super::state::QuestionSetsState;

type Index = BTreeMap<PositionId, Vec<QuestionSet>>;

pub struct QuestionSetsReducer;

impl Reducer for QuestionSetsReducer {
    type State = QuestionSetsState;
    type Intent = QuestionSetsIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            QuestionSetsIntent::Collection(intent) => {
                match &intent {
                    CollectionIntent::Reset => return QuestionSetsState::default(),
                    CollectionIntent::FetchAll(AsyncPhase::Fulfilled(sets)) => {
                        state.by_position = group_by_position(sets);
                    }
                    CollectionIntent::FetchAll(AsyncPhase::Rejected(_)) => {
                        state.by_position.clear();
                    }
                    CollectionIntent::Create(AsyncPhase::Fulfilled(set)) => {
                        if let Some(position_id) = set.position_id {
                            state
                                .by_position
                                .entry(position_id)
                                .or_default()
                                .push(set.clone());
                        }
                    }
                    CollectionIntent::Update(AsyncPhase::Fulfilled(set)) => {
                        if is_known(&state, set) {
                            reindex(&mut state.by_position, set);
                        }
                    }
                    CollectionIntent::Delete(AsyncPhase::Fulfilled(id)) => {
                        for group in state.by_position.values_mut() {
                            remove_by_id(group, *id);
                        }
                    }
                    _ => {}
                }
                state.base = CollectionReducer::reduce(state.base, intent);
            }

            QuestionSetsIntent::FetchByPosition { position_id, phase } => match phase {
                AsyncPhase::Pending => state.base.items.start(),
                AsyncPhase::Fulfilled(sets) => {
                    for set in &sets {
                        if is_known(&state, set) {
                            reindex(&mut state.by_position, set);
                        }
                        if state.base.selected.as_ref().map(|s| s.id) == Some(set.id) {
                            state.base.selected = Some(set.clone());
                        }
                    }
                    let items = state.base.items.complete();
                    for set in &sets {
                        upsert_by_id(items, set.clone());
                    }
                    state.by_position.insert(position_id, sets);
                }
                AsyncPhase::Rejected(error) => {
                    state.base.items.fail(error);
                    state.by_position.insert(position_id, Vec::new());
                }
            },
        }
        state
    }
}

/// Present in the primary sequence or in any group.
fn is_known(state: &QuestionSetsState, set: &QuestionSet) -> bool {
    state.base.find(set.id).is_some()
        || state
            .by_position
            .values()
            .any(|group| find_by_id(group, set.id).is_some())
}

fn group_by_position(sets: &[QuestionSet]) -> Index {
    let mut index = Index::new();
    for set in sets {
        if let Some(position_id) = set.position_id {
            index.entry(position_id).or_default().push(set.clone());
        }
    }
    index
}

/// Move `set` into its own group, replacing in place when already there.
fn reindex(index: &mut Index, set: &QuestionSet) {
    for (position_id, group) in index.iter_mut() {
        if Some(*position_id) != set.position_id {
            remove_by_id(group, set.id);
        }
    }
    if let Some(position_id) = set.position_id {
        upsert_by_id(index.entry(position_id).or_default(), set.clone());
    }
}
