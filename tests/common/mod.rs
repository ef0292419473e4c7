//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_api;
pub mod mock_backend;

use std::sync::Arc;

use talent_store::slices::job_roles::JobRole;
use talent_store::slices::positions::Position;
use talent_store::slices::question_sets::QuestionSet;
use talent_store::Store;

pub use mock_api::{Call, MockApi};

/// A store wired to a fresh scripted service.
pub fn make_store() -> (Store, Arc<MockApi>) {
    let api = MockApi::new();
    let store = Store::new(api.clone());
    (store, api)
}

// -- Fixtures -----------------------------------------------------------------

pub fn position(id: u64, title: &str) -> Position {
    Position {
        id,
        title: title.to_string(),
        department: None,
        description: None,
        status: "open".to_string(),
        job_role_id: None,
        created_at: None,
        updated_at: None,
    }
}

pub fn question_set(id: u64, position_id: Option<u64>, name: &str) -> QuestionSet {
    QuestionSet {
        id,
        position_id,
        name: name.to_string(),
        description: None,
        questions: Vec::new(),
    }
}

pub fn job_role(id: u64, name: &str) -> JobRole {
    JobRole {
        id,
        name: name.to_string(),
        description: None,
        level: None,
    }
}
