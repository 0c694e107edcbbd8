use serde::{Deserialize, Serialize};

use crate::ids::{SpaceId, WalletAddress};
use crate::space::{AccessType, EntryDenyReason, EntryFee, TokenGate};

/// Answer to `request_entry`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryCheckResult {
    pub space_id: SpaceId,
    pub can_enter: bool,
    pub reason: Option<EntryDenyReason>,
    #[serde(default)]
    pub token_gate_met: bool,
    #[serde(default)]
    pub entry_fee_paid: bool,
    #[serde(default)]
    pub is_owner: bool,
    pub payment_amount: Option<f64>,
    pub access_type: Option<AccessType>,
    pub token_gate: Option<TokenGate>,
    pub entry_fee: Option<EntryFee>,
    pub owner_wallet: Option<WalletAddress>,
    pub owner_username: Option<String>,
    /// Server time of the decision in milliseconds.
    pub checked_at: Option<i64>,
    pub message: Option<String>,
}

/// Answer to `submit_entry_fee_payment`; on success it carries the new grant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryFeeResult {
    pub space_id: SpaceId,
    pub success: bool,
    #[serde(default)]
    pub can_enter: bool,
    #[serde(default)]
    pub token_gate_met: bool,
    #[serde(default)]
    pub entry_fee_paid: bool,
    #[serde(default)]
    pub is_owner: bool,
    pub checked_at: Option<i64>,
    pub error: Option<String>,
}

/// Answer to a periodic `eligibility_check`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityResult {
    pub space_id: SpaceId,
    pub eligible: bool,
    #[serde(default)]
    pub is_owner: bool,
    pub reason: Option<EntryDenyReason>,
}
