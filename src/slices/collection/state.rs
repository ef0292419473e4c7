use serde::Serialize;

use crate::error::OperationError;
use crate::mvi::SliceState;
use crate::resource::{find_by_id, AsyncResource, Entity};

/// An entity sequence, its async flags and the currently selected entity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectionState<T> {
    pub(crate) items: AsyncResource<Vec<T>>,
    pub(crate) selected: Option<T>,
}

impl<T> Default for CollectionState<T> {
    fn default() -> Self {
        Self {
            items: AsyncResource::default(),
            selected: None,
        }
    }
}

impl<T: Entity> SliceState for CollectionState<T> {}

impl<T: Entity> CollectionState<T> {
    pub fn items(&self) -> &[T] {
        self.items.data()
    }

    pub fn is_loading(&self) -> bool {
        self.items.is_loading()
    }

    pub fn error(&self) -> Option<&OperationError> {
        self.items.error()
    }

    pub fn selected(&self) -> Option<&T> {
        self.selected.as_ref()
    }

    pub fn find(&self, id: T::Id) -> Option<&T> {
        find_by_id(self.items.data(), id)
    }
}
