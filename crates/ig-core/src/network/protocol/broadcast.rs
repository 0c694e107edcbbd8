use serde::{Deserialize, Serialize};

use crate::ids::SpaceId;
use crate::space::SpacePatch;

/// Pushed to every client when an owner changes a space's settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceUpdated {
    pub space_id: SpaceId,
    #[serde(default)]
    pub changes: SpacePatch,
}

/// Server-forced exit from a space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvictedMessage {
    pub space_id: SpaceId,
    pub reason: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerError {
    pub message: String,
    pub code: Option<String>,
    pub space_id: Option<SpaceId>,
}
