use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::default_true;
use crate::ids::{SpaceId, WalletAddress};
use crate::space::{RentStatus, Space};

/// Affordability information returned before renting or paying rent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentQuote {
    pub space_id: SpaceId,
    #[serde(default)]
    pub can_afford: bool,
    #[serde(default)]
    pub rent_amount: f64,
    pub balance: Option<f64>,
    pub token_symbol: Option<String>,
    pub token_address: Option<String>,
    /// Where rent payments are sent.
    pub treasury_wallet: Option<WalletAddress>,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalResult {
    pub space_id: SpaceId,
    pub success: bool,
    pub space: Option<Space>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdated {
    pub space_id: SpaceId,
    #[serde(default = "default_true")]
    pub success: bool,
    pub space: Option<Space>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentPaymentResult {
    pub space_id: SpaceId,
    pub success: bool,
    pub rent_due_date: Option<DateTime<Utc>>,
    pub rent_status: Option<RentStatus>,
    pub error: Option<String>,
}
