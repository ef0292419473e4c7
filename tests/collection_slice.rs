mod common;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::json;
use talent_store::resource::Entity;
use talent_store::slices::collection::{CollectionSlice, Resource};

use common::MockApi;

/// A collection whose drafts cannot be encoded as JSON (sequence map keys).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Tag {
    id: u64,
    #[serde(default)]
    labels: BTreeMap<Vec<u8>, String>,
}

impl Entity for Tag {
    type Id = u64;

    fn id(&self) -> u64 {
        self.id
    }
}

impl Resource for Tag {
    type Draft = BTreeMap<Vec<u8>, String>;

    const PATH: &'static str = "/tags";
    const SINGULAR: &'static str = "tag";
    const PLURAL: &'static str = "tags";
    const LIST_ENVELOPE: &'static [&'static str] = &["tags", "data"];
    const ITEM_ENVELOPE: &'static [&'static str] = &["tag", "data"];
}

fn unencodable() -> BTreeMap<Vec<u8>, String> {
    BTreeMap::from([(vec![1u8], "x".to_string())])
}

#[tokio::test]
async fn unencodable_create_is_stored_as_error() {
    let api = MockApi::new();
    let slice: CollectionSlice<Tag> = CollectionSlice::new(api.clone());

    let error = slice.create(unencodable()).await.unwrap_err();
    assert!(error.message().starts_with("Invalid request for tags/create"));

    let state = slice.state();
    assert_eq!(state.error(), Some(&error));
    assert!(!state.is_loading());
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn unencodable_update_keeps_loaded_items() {
    let api = MockApi::new();
    api.ok("GET", "/tags", json!([{ "id": 1 }]));
    let slice: CollectionSlice<Tag> = CollectionSlice::new(api.clone());
    slice.fetch_all().await.unwrap();

    let tag = Tag {
        id: 1,
        labels: unencodable(),
    };
    let error = slice.update(tag).await.unwrap_err();
    assert!(error.message().starts_with("Invalid request for tags/update"));

    let state = slice.state();
    assert_eq!(state.items().len(), 1);
    assert_eq!(state.error(), Some(&error));
    assert_eq!(api.calls().len(), 1);
}
