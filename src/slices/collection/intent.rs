use crate::mvi::Intent;
use crate::resource::{AsyncPhase, Entity};

/// Intents understood by every collection slice.
#[derive(Debug, Clone, PartialEq)]
pub enum CollectionIntent<T: Entity> {
    /// List fetch; the payload replaces the sequence.
    FetchAll(AsyncPhase<Vec<T>>),

    /// Single fetch; the payload becomes the selection.
    FetchOne(AsyncPhase<T>),

    /// The created entity is appended.
    Create(AsyncPhase<T>),

    /// The updated entity replaces its id match.
    Update(AsyncPhase<T>),

    /// Entities with this id are removed.
    Delete(AsyncPhase<T::Id>),

    SetSelected(T),

    ClearSelected,

    ClearError,

    /// Restore the initial empty state.
    Reset,
}

impl<T: Entity> Intent for CollectionIntent<T> {}
