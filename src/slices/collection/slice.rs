//! Dispatchers for collection slices.

use std::marker::PhantomData;
use std::sync::Arc;

use serde_json::Value;

use crate::api::ApiService;
use crate::error::OperationError;
use crate::mvi::Reducer;
use crate::resource::{decode_object, sequence_or_empty, unwrap_envelope, AsyncPhase, DecodeError};
use crate::store::{run_operation, Operation, SliceCell};

use super::intent::CollectionIntent;
use super::reducer::CollectionReducer;
use super::resource::Resource;

/// Handle for one collection resource: state plus the operations that change it.
///
/// Overlapping dispatches of the same operation are neither deduplicated nor
/// ordered; whichever completion is reduced last wins.
pub struct CollectionSlice<T: Resource, R: Reducer = CollectionReducer<T>> {
    pub(crate) cell: SliceCell<R>,
    pub(crate) api: Arc<dyn ApiService>,
    _resource: PhantomData<fn() -> T>,
}

impl<T, R> CollectionSlice<T, R>
where
    T: Resource,
    R: Reducer,
    R::Intent: From<CollectionIntent<T>>,
{
    pub fn new(api: Arc<dyn ApiService>) -> Self {
        Self {
            cell: SliceCell::new(),
            api,
            _resource: PhantomData,
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> R::State {
        self.cell.snapshot()
    }

    pub async fn fetch_all(&self) -> Result<Vec<T>, OperationError> {
        let operation = Operation::new(
            op_name::<T>("fetch_all"),
            format!("Failed to fetch {}", T::PLURAL),
        );
        let name = operation.name.clone();
        run_operation(
            &self.cell,
            &operation,
            |phase: AsyncPhase<Vec<T>>| R::Intent::from(CollectionIntent::FetchAll(phase)),
            self.api.get(T::PATH),
            |raw| Ok(sequence_or_empty(unwrap_envelope(raw, T::LIST_ENVELOPE), &name)),
        )
        .await
    }

    pub async fn fetch(&self, id: T::Id) -> Result<T, OperationError> {
        let operation = Operation::new(
            op_name::<T>("fetch"),
            format!("Failed to fetch {}", T::SINGULAR),
        );
        let path = item_path::<T>(id);
        run_operation(
            &self.cell,
            &operation,
            |phase: AsyncPhase<T>| R::Intent::from(CollectionIntent::FetchOne(phase)),
            self.api.get(&path),
            decode_item::<T>,
        )
        .await
    }

    pub async fn create(&self, draft: T::Draft) -> Result<T, OperationError> {
        let operation = Operation::new(
            op_name::<T>("create"),
            format!("Failed to create {}", T::SINGULAR),
        );
        let wrap = |phase: AsyncPhase<T>| R::Intent::from(CollectionIntent::Create(phase));
        let body = match serde_json::to_value(&draft) {
            Ok(body) => body,
            Err(e) => return Err(self.reject_request(&operation, &wrap, e)),
        };
        run_operation(
            &self.cell,
            &operation,
            wrap,
            self.api.post(T::PATH, body),
            decode_item::<T>,
        )
        .await
    }

    pub async fn update(&self, entity: T) -> Result<T, OperationError> {
        let operation = Operation::new(
            op_name::<T>("update"),
            format!("Failed to update {}", T::SINGULAR),
        );
        let path = item_path::<T>(entity.id());
        let wrap = |phase: AsyncPhase<T>| R::Intent::from(CollectionIntent::Update(phase));
        let body = match serde_json::to_value(&entity) {
            Ok(body) => body,
            Err(e) => return Err(self.reject_request(&operation, &wrap, e)),
        };
        run_operation(
            &self.cell,
            &operation,
            wrap,
            self.api.put(&path, body),
            decode_item::<T>,
        )
        .await
    }

    /// Delete by id. The response body is ignored; the id is the payload.
    pub async fn delete(&self, id: T::Id) -> Result<T::Id, OperationError> {
        let operation = Operation::new(
            op_name::<T>("delete"),
            format!("Failed to delete {}", T::SINGULAR),
        );
        let path = item_path::<T>(id);
        run_operation(
            &self.cell,
            &operation,
            |phase: AsyncPhase<T::Id>| R::Intent::from(CollectionIntent::Delete(phase)),
            self.api.delete(&path),
            |_| Ok(id),
        )
        .await
    }

    pub fn set_selected(&self, entity: T) {
        self.cell.dispatch(CollectionIntent::SetSelected(entity).into());
    }

    pub fn clear_selected(&self) {
        self.cell.dispatch(CollectionIntent::<T>::ClearSelected.into());
    }

    pub fn clear_error(&self) {
        self.cell.dispatch(CollectionIntent::<T>::ClearError.into());
    }

    pub fn reset(&self) {
        self.cell.dispatch(CollectionIntent::<T>::Reset.into());
    }

    /// Store a request body that failed to encode as a rejection; the service
    /// is never called.
    fn reject_request<P>(
        &self,
        operation: &Operation,
        wrap: impl Fn(AsyncPhase<P>) -> R::Intent,
        error: serde_json::Error,
    ) -> OperationError {
        let error = OperationError::new(format!(
            "Invalid request for {}: {}",
            operation.name, error
        ));
        tracing::warn!(operation = %operation.name, error = %error, "Operation rejected");
        self.cell.dispatch(wrap(AsyncPhase::Rejected(error.clone())));
        error
    }
}

pub(crate) fn op_name<T: Resource>(action: &str) -> String {
    format!("{}/{}", T::PATH.trim_start_matches('/'), action)
}

fn item_path<T: Resource>(id: T::Id) -> String {
    format!("{}/{}", T::PATH, id)
}

fn decode_item<T: Resource>(raw: Value) -> Result<T, DecodeError> {
    decode_object(unwrap_envelope(raw, T::ITEM_ENVELOPE))
}
