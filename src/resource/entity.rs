//! Identifier-based operations on ordered entity sequences.

use std::fmt::{Debug, Display};

/// An entity with a unique identifier inside its collection.
pub trait Entity: Clone + PartialEq + Send + Sync + 'static {
    type Id: Copy + Eq + Ord + Debug + Display + Send + Sync + 'static;

    fn id(&self) -> Self::Id;
}

pub fn find_by_id<T: Entity>(items: &[T], id: T::Id) -> Option<&T> {
    items.iter().find(|item| item.id() == id)
}

/// Replace the entry sharing `entity`'s id. Returns false when absent.
pub fn replace_by_id<T: Entity>(items: &mut [T], entity: &T) -> bool {
    match items.iter_mut().find(|item| item.id() == entity.id()) {
        Some(slot) => {
            *slot = entity.clone();
            true
        }
        None => false,
    }
}

/// Replace in place, or append when absent.
pub fn upsert_by_id<T: Entity>(items: &mut Vec<T>, entity: T) {
    if !replace_by_id(items, &entity) {
        items.push(entity);
    }
}

/// Drop every entry with `id`. Returns how many were removed.
pub fn remove_by_id<T: Entity>(items: &mut Vec<T>, id: T::Id) -> usize {
    let before = items.len();
    items.retain(|item| item.id() != id);
    before - items.len()
}
