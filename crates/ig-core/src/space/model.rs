use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{SpaceId, WalletAddress};

/// Who may enter a space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessType {
    /// Owner only.
    Private,
    /// Open to everyone. Assumed when the server omits the field, which it
    /// does for unrented igloos; see [`Space::vacant`].
    #[default]
    Public,
    /// Holders of a minimum token balance.
    Token,
    /// Players who paid the entry fee.
    Fee,
    /// Token balance and entry fee.
    Both,
}

impl AccessType {
    /// Entry depends on a server-side check for non-owners.
    pub fn is_gated(self) -> bool {
        !matches!(self, Self::Public)
    }

    pub fn requires_token(self) -> bool {
        matches!(self, Self::Token | Self::Both)
    }

    pub fn requires_fee(self) -> bool {
        matches!(self, Self::Fee | Self::Both)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenGate {
    #[serde(default)]
    pub enabled: bool,
    pub token_address: Option<String>,
    pub token_symbol: Option<String>,
    #[serde(default)]
    pub minimum_balance: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryFee {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub amount: f64,
    pub token_address: Option<String>,
    pub token_symbol: Option<String>,
}

/// Display metadata shown above the igloo.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    pub title: Option<String>,
    pub ticker: Option<String>,
    pub short_description: Option<String>,
    pub background_color: Option<String>,
    pub text_color: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RentStatus {
    Current,
    GracePeriod,
    Overdue,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceStats {
    #[serde(default)]
    pub total_visits: u64,
    #[serde(default)]
    pub unique_visitors: u64,
    #[serde(default)]
    pub total_revenue: f64,
}

/// Server-authoritative record of one rentable space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Space {
    pub id: SpaceId,
    #[serde(default)]
    pub is_rented: bool,
    pub owner_wallet: Option<WalletAddress>,
    pub owner_username: Option<String>,
    #[serde(default)]
    pub access_type: AccessType,
    pub token_gate: Option<TokenGate>,
    pub entry_fee: Option<EntryFee>,
    #[serde(default)]
    pub banner: Banner,
    pub rent_status: Option<RentStatus>,
    pub rent_due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub stats: SpaceStats,
}

impl Space {
    /// Unrented public space with no owner, as the server lists free igloos.
    pub fn vacant(id: impl Into<SpaceId>) -> Self {
        Self {
            id: id.into(),
            is_rented: false,
            owner_wallet: None,
            owner_username: None,
            access_type: AccessType::Public,
            token_gate: None,
            entry_fee: None,
            banner: Banner::default(),
            rent_status: None,
            rent_due_date: None,
            stats: SpaceStats::default(),
        }
    }

    pub fn is_owned_by(&self, wallet: &WalletAddress) -> bool {
        self.owner_wallet.as_ref() == Some(wallet)
    }

    /// Apply the fields present in `patch`; absent fields are left untouched.
    pub fn apply(&mut self, patch: &SpacePatch) {
        if let Some(is_rented) = patch.is_rented {
            self.is_rented = is_rented;
        }
        if let Some(owner_wallet) = &patch.owner_wallet {
            self.owner_wallet = Some(owner_wallet.clone());
        }
        if let Some(owner_username) = &patch.owner_username {
            self.owner_username = Some(owner_username.clone());
        }
        if let Some(access_type) = patch.access_type {
            self.access_type = access_type;
        }
        if let Some(token_gate) = &patch.token_gate {
            self.token_gate = Some(token_gate.clone());
        }
        if let Some(entry_fee) = &patch.entry_fee {
            self.entry_fee = Some(entry_fee.clone());
        }
        if let Some(banner) = &patch.banner {
            self.banner = banner.clone();
        }
        if let Some(rent_status) = patch.rent_status {
            self.rent_status = Some(rent_status);
        }
        if let Some(rent_due_date) = patch.rent_due_date {
            self.rent_due_date = Some(rent_due_date);
        }
        if let Some(stats) = &patch.stats {
            self.stats = stats.clone();
        }
    }
}

/// Partial update pushed by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpacePatch {
    pub is_rented: Option<bool>,
    pub owner_wallet: Option<WalletAddress>,
    pub owner_username: Option<String>,
    pub access_type: Option<AccessType>,
    pub token_gate: Option<TokenGate>,
    pub entry_fee: Option<EntryFee>,
    pub banner: Option<Banner>,
    pub rent_status: Option<RentStatus>,
    pub rent_due_date: Option<DateTime<Utc>>,
    pub stats: Option<SpaceStats>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_camel_case_wire_record_with_missing_optional_fields() {
        let space: Space = serde_json::from_value(json!({
            "id": "s2",
            "isRented": true,
            "ownerUsername": "Ann",
            "accessType": "both",
            "entryFee": { "enabled": true, "amount": 500, "tokenSymbol": "PEBL" },
            "rentStatus": "grace_period"
        }))
        .unwrap();

        assert_eq!(space.id, "s2");
        assert!(space.is_rented);
        assert_eq!(space.owner_username.as_deref(), Some("Ann"));
        assert_eq!(space.owner_wallet, None);
        assert_eq!(space.access_type, AccessType::Both);
        assert_eq!(space.entry_fee.as_ref().map(|f| f.amount), Some(500.0));
        assert_eq!(space.rent_status, Some(RentStatus::GracePeriod));
        assert_eq!(space.stats, SpaceStats::default());
    }

    #[test]
    fn access_type_defaults_to_public_like_a_vacant_igloo() {
        let space: Space =
            serde_json::from_value(json!({ "id": "s1", "isRented": false })).unwrap();
        assert_eq!(space.access_type, AccessType::Public);
        assert_eq!(space, Space::vacant("s1"));
        assert!(!space.access_type.is_gated());
    }

    #[test]
    fn apply_only_touches_present_fields() {
        let mut space = Space::vacant("s1");
        space.owner_username = Some("Ann".to_string());
        space.banner.title = Some("Ann's place".to_string());

        space.apply(&SpacePatch {
            access_type: Some(AccessType::Token),
            is_rented: Some(true),
            ..SpacePatch::default()
        });

        assert_eq!(space.access_type, AccessType::Token);
        assert!(space.is_rented);
        assert_eq!(space.owner_username.as_deref(), Some("Ann"));
        assert_eq!(space.banner.title.as_deref(), Some("Ann's place"));
    }

    #[test]
    fn gating_flags_follow_access_type() {
        assert!(!AccessType::Public.is_gated());
        assert!(AccessType::Private.is_gated());
        assert!(AccessType::Both.requires_token() && AccessType::Both.requires_fee());
        assert!(AccessType::Fee.requires_fee() && !AccessType::Fee.requires_token());
    }
}
