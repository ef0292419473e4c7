//! Serialized reduction over one slice's state.

use parking_lot::Mutex;

use crate::mvi::Reducer;

/// Holds one slice's state and applies intents one at a time.
///
/// The lock is held only for the duration of a single pure reduction, never
/// across an await point, so partial updates cannot interleave.
pub struct SliceCell<R: Reducer> {
    state: Mutex<R::State>,
}

impl<R: Reducer> SliceCell<R> {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(R::State::default()),
        }
    }

    pub fn dispatch(&self, intent: R::Intent) {
        let mut guard = self.state.lock();
        let current = std::mem::take(&mut *guard);
        *guard = R::reduce(current, intent);
    }

    /// Read-only copy of the current state.
    pub fn snapshot(&self) -> R::State {
        self.state.lock().clone()
    }
}

impl<R: Reducer> Default for SliceCell<R> {
    fn default() -> Self {
        Self::new()
    }
}
