use serde::{Deserialize, Serialize};

use super::{
    EligibilityResult, EntryCheckResult, EntryFeeResult, EvictedMessage, MyRentalsMessage,
    OwnerInfoMessage, RentPaymentResult, RentQuote, RentalResult, ServerError, SettingsUpdated,
    SpaceListMessage, SpaceUpdated,
};

/// Type tags routed by the igloo dispatcher. Anything else on the shared
/// channel belongs to another subsystem.
pub const HANDLED_INBOUND_TYPES: &[&str] = &[
    "space_list",
    "my_rentals",
    "entry_check_result",
    "rent_quote",
    "rental_result",
    "settings_updated",
    "rent_payment_result",
    "entry_fee_result",
    "owner_info",
    "eligibility_result",
    "space_updated",
    "evicted",
    "error",
];

/// Server to client envelopes handled by this subsystem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InboundMessage {
    SpaceList(SpaceListMessage),
    MyRentals(MyRentalsMessage),
    EntryCheckResult(EntryCheckResult),
    RentQuote(RentQuote),
    RentalResult(RentalResult),
    SettingsUpdated(SettingsUpdated),
    RentPaymentResult(RentPaymentResult),
    EntryFeeResult(EntryFeeResult),
    OwnerInfo(OwnerInfoMessage),
    EligibilityResult(EligibilityResult),
    SpaceUpdated(SpaceUpdated),
    Evicted(EvictedMessage),
    Error(ServerError),
}

/// Outcome of reading one raw envelope off the channel.
#[derive(Debug, Clone, PartialEq)]
pub enum InboundDecode {
    Message(Box<InboundMessage>),
    /// Well-formed but addressed to another subsystem.
    Ignored { kind: String },
    Malformed { reason: String },
}

impl InboundMessage {
    pub fn decode(raw: &str) -> InboundDecode {
        let value: serde_json::Value = match serde_json::from_str(raw) {
            Ok(value) => value,
            Err(err) => {
                return InboundDecode::Malformed {
                    reason: err.to_string(),
                }
            }
        };

        let kind = match value.get("type").and_then(serde_json::Value::as_str) {
            Some(kind) => kind.to_string(),
            None => {
                return InboundDecode::Malformed {
                    reason: "missing type tag".to_string(),
                }
            }
        };

        if !HANDLED_INBOUND_TYPES.contains(&kind.as_str()) {
            return InboundDecode::Ignored { kind };
        }

        match serde_json::from_value::<InboundMessage>(value) {
            Ok(message) => InboundDecode::Message(Box::new(message)),
            Err(err) => InboundDecode::Malformed {
                reason: format!("{kind}: {err}"),
            },
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::SpaceList(_) => "space_list",
            Self::MyRentals(_) => "my_rentals",
            Self::EntryCheckResult(_) => "entry_check_result",
            Self::RentQuote(_) => "rent_quote",
            Self::RentalResult(_) => "rental_result",
            Self::SettingsUpdated(_) => "settings_updated",
            Self::RentPaymentResult(_) => "rent_payment_result",
            Self::EntryFeeResult(_) => "entry_fee_result",
            Self::OwnerInfo(_) => "owner_info",
            Self::EligibilityResult(_) => "eligibility_result",
            Self::SpaceUpdated(_) => "space_updated",
            Self::Evicted(_) => "evicted",
            Self::Error(_) => "error",
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
