//! Reducer for collection slices.

use std::marker::PhantomData;

use crate::mvi::Reducer;
use crate::resource::{remove_by_id, replace_by_id, AsyncPhase, Entity};

use super::intent::CollectionIntent;
use super::state::CollectionState;

/// Reducer for collection state transitions.
pub struct CollectionReducer<T>(PhantomData<fn() -> T>);

impl<T: Entity> Reducer for CollectionReducer<T> {
    type State = CollectionState<T>;
    type Intent = CollectionIntent<T>;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CollectionIntent::FetchAll(phase) => phase.replace_into(&mut state.items),

            CollectionIntent::FetchOne(phase) => match phase {
                AsyncPhase::Pending => state.items.start(),
                AsyncPhase::Fulfilled(entity) => {
                    state.items.complete();
                    state.selected = Some(entity);
                }
                AsyncPhase::Rejected(error) => {
                    state.items.fail(error);
                    state.selected = None;
                }
            },

            CollectionIntent::Create(phase) => match phase {
                AsyncPhase::Pending => state.items.start(),
                AsyncPhase::Fulfilled(entity) => state.items.complete().push(entity),
                AsyncPhase::Rejected(error) => state.items.fail(error),
            },

            CollectionIntent::Update(phase) => match phase {
                AsyncPhase::Pending => state.items.start(),
                AsyncPhase::Fulfilled(entity) => {
                    replace_by_id(state.items.complete(), &entity);
                    if state.selected.as_ref().map(Entity::id) == Some(entity.id()) {
                        state.selected = Some(entity);
                    }
                }
                AsyncPhase::Rejected(error) => state.items.fail(error),
            },

            CollectionIntent::Delete(phase) => match phase {
                AsyncPhase::Pending => state.items.start(),
                AsyncPhase::Fulfilled(id) => {
                    remove_by_id(state.items.complete(), id);
                    if state.selected.as_ref().map(Entity::id) == Some(id) {
                        state.selected = None;
                    }
                }
                AsyncPhase::Rejected(error) => state.items.fail(error),
            },

            CollectionIntent::SetSelected(entity) => state.selected = Some(entity),

            CollectionIntent::ClearSelected => state.selected = None,

            CollectionIntent::ClearError => state.items.clear_error(),

            CollectionIntent::Reset => return CollectionState::default(),
        }
        state
    }
}
