use serde::{Deserialize, Serialize};

use super::model::{AccessType, Banner, EntryFee, Space, TokenGate};
use crate::ids::{SpaceId, WalletAddress};
use crate::network::protocol::EntryCheckResult;

/// Why the server refused entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntryDenyReason {
    EntryFeeRequired,
    TokenRequired,
    TokenAndFeeRequired,
    Private,
    NotAuthenticated,
    #[serde(other)]
    Other,
}

/// "Requirements not met" record surfaced to the UI after a denied entry check.
///
/// Built from the cached list entry (display data) overlaid with the
/// authoritative fields of the denial. Owner fields always come from the
/// response because the cached list may predate an ownership change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryRequirements {
    pub space_id: SpaceId,
    pub reason: Option<EntryDenyReason>,
    pub access_type: AccessType,
    pub token_gate: Option<TokenGate>,
    pub entry_fee: Option<EntryFee>,
    pub token_gate_met: bool,
    pub entry_fee_paid: bool,
    pub payment_amount: Option<f64>,
    pub owner_wallet: Option<WalletAddress>,
    pub owner_username: Option<String>,
    pub banner: Banner,
    pub message: Option<String>,
}

impl EntryRequirements {
    pub fn synthesize(cached: Option<&Space>, result: &EntryCheckResult) -> Self {
        let access_type = result
            .access_type
            .or_else(|| cached.map(|space| space.access_type))
            // Denied and nothing known about the space: report it as closed.
            .unwrap_or(AccessType::Private);
        let token_gate = result
            .token_gate
            .clone()
            .or_else(|| cached.and_then(|space| space.token_gate.clone()));
        let entry_fee = result
            .entry_fee
            .clone()
            .or_else(|| cached.and_then(|space| space.entry_fee.clone()));
        let payment_amount = result.payment_amount.or_else(|| {
            entry_fee
                .as_ref()
                .filter(|fee| fee.enabled)
                .map(|fee| fee.amount)
        });

        Self {
            space_id: result.space_id.clone(),
            reason: result.reason,
            access_type,
            token_gate,
            entry_fee,
            token_gate_met: result.token_gate_met,
            entry_fee_paid: result.entry_fee_paid,
            payment_amount,
            owner_wallet: result.owner_wallet.clone(),
            owner_username: result.owner_username.clone(),
            banner: cached.map(|space| space.banner.clone()).unwrap_or_default(),
            message: result.message.clone(),
        }
    }

    /// Entry fee still has to be paid before the server will grant entry.
    pub fn needs_fee_payment(&self) -> bool {
        !self.entry_fee_paid && (self.access_type.requires_fee() || self.payment_amount.is_some())
    }
}
