mod common;

use std::sync::Arc;

use async_trait::async_trait;
use common::{make_store, position};
use serde_json::{json, Value};
use talent_store::api::{ApiService, ServiceResult};
use talent_store::slices::positions::PositionDraft;
use talent_store::{ServiceFailure, Store};
use tokio::sync::Notify;

/// Holds `GET /positions` until released; everything else fails immediately.
struct GatedApi {
    release: Notify,
    list: Value,
}

#[async_trait]
impl ApiService for GatedApi {
    async fn get(&self, path: &str) -> ServiceResult {
        if path == "/positions" {
            self.release.notified().await;
            return Ok(self.list.clone());
        }
        Err(ServiceFailure::Transport {
            message: "Network Error".into(),
        })
    }

    async fn post(&self, _path: &str, _body: Value) -> ServiceResult {
        Err(ServiceFailure::Unknown)
    }

    async fn put(&self, _path: &str, _body: Value) -> ServiceResult {
        Err(ServiceFailure::Unknown)
    }

    async fn delete(&self, _path: &str) -> ServiceResult {
        Err(ServiceFailure::Unknown)
    }
}

#[tokio::test]
async fn pending_sets_loading_and_clears_previous_error() {
    let api = Arc::new(GatedApi {
        release: Notify::new(),
        list: json!([{ "id": 1, "title": "Backend Engineer" }]),
    });
    let store = Store::new(api.clone());

    assert!(store.positions().fetch(99).await.is_err());
    assert_eq!(
        store.positions().state().error().map(|e| e.message()),
        Some("Network Error")
    );

    let background = store.clone();
    let handle = tokio::spawn(async move { background.positions().fetch_all().await });

    for _ in 0..100 {
        if store.positions().state().is_loading() {
            break;
        }
        tokio::task::yield_now().await;
    }
    let state = store.positions().state();
    assert!(state.is_loading());
    assert!(state.error().is_none());

    api.release.notify_one();
    let positions = handle.await.unwrap().unwrap();
    assert_eq!(positions, vec![position(1, "Backend Engineer")]);

    let state = store.positions().state();
    assert!(!state.is_loading());
    assert_eq!(state.items(), &[position(1, "Backend Engineer")]);
}

#[tokio::test]
async fn fetch_all_unwraps_envelope() {
    let (store, api) = make_store();
    api.ok(
        "GET",
        "/positions",
        json!({ "positions": [
            { "id": 1, "title": "Backend Engineer", "department": "Platform" },
            { "id": 2, "title": "Designer", "status": "closed" }
        ] }),
    );

    let positions = store.positions().fetch_all().await.unwrap();
    assert_eq!(positions.len(), 2);
    assert_eq!(positions[0].department.as_deref(), Some("Platform"));
    assert_eq!(positions[0].status, "open");
    assert_eq!(positions[1].status, "closed");
}

#[tokio::test]
async fn fetch_one_selects_entity() {
    let (store, api) = make_store();
    api.ok(
        "GET",
        "/positions/3",
        json!({ "position": { "id": 3, "title": "SRE" } }),
    );

    store.positions().fetch(3).await.unwrap();
    assert_eq!(store.positions().state().selected(), Some(&position(3, "SRE")));
}

#[tokio::test]
async fn create_rejection_keeps_loaded_positions() {
    let (store, api) = make_store();
    api.ok("GET", "/positions", json!([{ "id": 1, "title": "SRE" }]));
    api.fail(
        "POST",
        "/positions",
        json!({
            "response": { "status": 422, "data": { "error": "Title is required" } },
            "message": "Request failed with status code 422"
        }),
    );

    store.positions().fetch_all().await.unwrap();
    let err = store
        .positions()
        .create(PositionDraft::new(""))
        .await
        .unwrap_err();
    assert_eq!(err.message(), "Title is required");

    let state = store.positions().state();
    assert_eq!(state.items(), &[position(1, "SRE")]);
    assert_eq!(state.error(), Some(&err));

    store.positions().clear_error();
    assert!(store.positions().state().error().is_none());
}

#[tokio::test]
async fn update_sends_entity_and_refreshes_selection() {
    let (store, api) = make_store();
    api.ok(
        "GET",
        "/positions",
        json!([{ "id": 1, "title": "SRE" }, { "id": 2, "title": "QA" }]),
    );
    api.ok("PUT", "/positions/2", json!({ "id": 2, "title": "QA Lead" }));

    let slice = store.positions();
    slice.fetch_all().await.unwrap();
    slice.set_selected(position(2, "QA"));
    slice.update(position(2, "QA Lead")).await.unwrap();

    let state = slice.state();
    assert_eq!(state.items(), &[position(1, "SRE"), position(2, "QA Lead")]);
    assert_eq!(state.selected(), Some(&position(2, "QA Lead")));

    let put = api
        .calls()
        .into_iter()
        .find(|c| c.method == "PUT")
        .unwrap();
    assert_eq!(put.body.unwrap()["title"], "QA Lead");
}

#[tokio::test]
async fn applying_the_same_update_twice_is_idempotent() {
    let (store, api) = make_store();
    api.ok("GET", "/positions", json!([{ "id": 1, "title": "SRE" }]));
    api.ok("PUT", "/positions/1", json!({ "id": 1, "title": "SRE II" }));
    api.ok("PUT", "/positions/1", json!({ "id": 1, "title": "SRE II" }));

    let slice = store.positions();
    slice.fetch_all().await.unwrap();
    slice.update(position(1, "SRE II")).await.unwrap();
    let once = slice.state();
    slice.update(position(1, "SRE II")).await.unwrap();
    assert_eq!(slice.state(), once);
}

#[tokio::test]
async fn delete_clears_matching_selection() {
    let (store, api) = make_store();
    api.ok("GET", "/positions", json!([{ "id": 1, "title": "SRE" }]));
    api.ok("DELETE", "/positions/1", json!(null));

    let slice = store.positions();
    slice.fetch_all().await.unwrap();
    slice.set_selected(position(1, "SRE"));
    slice.delete(1).await.unwrap();

    let state = slice.state();
    assert!(state.items().is_empty());
    assert!(state.selected().is_none());
}

#[tokio::test]
async fn selection_mutators() {
    let (store, _api) = make_store();
    let slice = store.positions();

    slice.set_selected(position(4, "PM"));
    assert_eq!(slice.state().selected(), Some(&position(4, "PM")));

    slice.clear_selected();
    assert!(slice.state().selected().is_none());
}

#[tokio::test]
async fn malformed_single_payload_is_rejected() {
    let (store, api) = make_store();
    api.ok("GET", "/positions/5", json!({ "position": { "title": "No id" } }));

    let err = store.positions().fetch(5).await.unwrap_err();
    assert!(err
        .message()
        .starts_with("Invalid response for positions/fetch:"));
    assert!(store.positions().state().selected().is_none());
}
