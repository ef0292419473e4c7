use serde::{Deserialize, Serialize};

use crate::resource::Entity;
use crate::slices::collection::Resource;
use crate::slices::positions::PositionId;

pub type QuestionSetId = u64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionSet {
    pub id: QuestionSetId,
    /// Owning position; sets without one are not indexed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_id: Option<PositionId>,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionSetDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_id: Option<PositionId>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl Entity for QuestionSet {
    type Id = QuestionSetId;

    fn id(&self) -> QuestionSetId {
        self.id
    }
}

impl Resource for QuestionSet {
    type Draft = QuestionSetDraft;

    const PATH: &'static str = "/question-sets";
    const SINGULAR: &'static str = "question set";
    const PLURAL: &'static str = "question sets";
    const LIST_ENVELOPE: &'static [&'static str] = &["questionSets", "data"];
    const ITEM_ENVELOPE: &'static [&'static str] = &["questionSet", "data"];
}
