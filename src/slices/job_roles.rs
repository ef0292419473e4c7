//! Job role catalogue positions are filed under.

use serde::{Deserialize, Serialize};

use crate::resource::Entity;

use super::collection::{CollectionSlice, CollectionState, Resource};

pub type JobRoleId = u64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRole {
    pub id: JobRoleId,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRoleDraft {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

impl Entity for JobRole {
    type Id = JobRoleId;

    fn id(&self) -> JobRoleId {
        self.id
    }
}

impl Resource for JobRole {
    type Draft = JobRoleDraft;

    const PATH: &'static str = "/job-roles";
    const SINGULAR: &'static str = "job role";
    const PLURAL: &'static str = "job roles";
    const LIST_ENVELOPE: &'static [&'static str] = &["jobRoles", "data"];
    const ITEM_ENVELOPE: &'static [&'static str] = &["jobRole", "data"];
}

pub type JobRolesState = CollectionState<JobRole>;

pub type JobRolesSlice = CollectionSlice<JobRole>;
