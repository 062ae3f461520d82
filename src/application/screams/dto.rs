use crate::domain::{scream::entity::Scream, social::comment::Comment};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CreateScreamRequest {
    pub body: String,
}

/// A scream together with its comments, newest first. Returned by the
/// single-scream fetch.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ScreamDetail {
    #[serde(flatten)]
    pub scream: Scream,
    pub comments: Vec<Comment>,
}
