use serde::{Deserialize, Serialize};

use super::id_macro::impl_id;

/// Server-assigned identifier of a space (igloo).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpaceId(String);

impl_id!(SpaceId);
