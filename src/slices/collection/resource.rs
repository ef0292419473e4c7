use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::resource::Entity;

/// A REST collection a [`CollectionSlice`](super::CollectionSlice) can manage.
pub trait Resource: Entity + Serialize + DeserializeOwned {
    /// Payload accepted by create.
    type Draft: Serialize + Send + Sync;

    /// Collection path, e.g. `/positions`. Items live at `{PATH}/{id}`.
    const PATH: &'static str;

    /// Singular label used in fallback error messages.
    const SINGULAR: &'static str;

    /// Plural label used in fallback error messages.
    const PLURAL: &'static str;

    /// Envelope keys tried, in order, on list responses.
    const LIST_ENVELOPE: &'static [&'static str];

    /// Envelope keys tried, in order, on single-entity responses.
    const ITEM_ENVELOPE: &'static [&'static str];
}
