//! Open positions.

use serde::{Deserialize, Serialize};

use crate::resource::Entity;

use super::collection::{CollectionSlice, CollectionState, Resource};

pub type PositionId = u64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub id: PositionId,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_role_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Fields accepted when creating a position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionDraft {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_role_id: Option<u64>,
}

impl PositionDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            department: None,
            description: None,
            status: default_status(),
            job_role_id: None,
        }
    }
}

fn default_status() -> String {
    "open".to_string()
}

impl Entity for Position {
    type Id = PositionId;

    fn id(&self) -> PositionId {
        self.id
    }
}

impl Resource for Position {
    type Draft = PositionDraft;

    const PATH: &'static str = "/positions";
    const SINGULAR: &'static str = "position";
    const PLURAL: &'static str = "positions";
    const LIST_ENVELOPE: &'static [&'static str] = &["positions", "data"];
    const ITEM_ENVELOPE: &'static [&'static str] = &["position", "data"];
}

pub type PositionsState = CollectionState<Position>;

pub type PositionsSlice = CollectionSlice<Position>;
