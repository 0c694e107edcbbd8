use serde::{Deserialize, Serialize};

use super::model::{AccessType, Banner, EntryFee, TokenGate};

/// Owner-editable settings forwarded verbatim to the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceSettings {
    pub access_type: Option<AccessType>,
    pub token_gate: Option<TokenGate>,
    pub entry_fee: Option<EntryFee>,
    pub banner: Option<Banner>,
}
