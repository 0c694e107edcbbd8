use serde::{Deserialize, Serialize};

use crate::ids::SpaceId;
use crate::space::SpaceSettings;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceRef {
    pub space_id: SpaceId,
}

impl From<&SpaceId> for SpaceRef {
    fn from(space_id: &SpaceId) -> Self {
        Self {
            space_id: space_id.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsSubmission {
    pub space_id: SpaceId,
    pub settings: SpaceSettings,
}

/// Opaque proof (transaction signature) produced by the payment collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProofSubmission {
    pub space_id: SpaceId,
    pub proof: String,
}

/// Client to server requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutboundMessage {
    ListSpaces,
    ListMyRentals,
    RequestEntry(SpaceRef),
    RequestRentQuote(SpaceRef),
    SubmitRental(SpaceRef),
    SubmitSettings(SettingsSubmission),
    SubmitRentPayment(ProofSubmission),
    SubmitEntryFeePayment(ProofSubmission),
    RequestOwnerInfo(SpaceRef),
    /// Fire-and-forget, feeds visit statistics.
    DeclareOccupancy(SpaceRef),
    EligibilityCheck(SpaceRef),
}

impl OutboundMessage {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ListSpaces => "list_spaces",
            Self::ListMyRentals => "list_my_rentals",
            Self::RequestEntry(_) => "request_entry",
            Self::RequestRentQuote(_) => "request_rent_quote",
            Self::SubmitRental(_) => "submit_rental",
            Self::SubmitSettings(_) => "submit_settings",
            Self::SubmitRentPayment(_) => "submit_rent_payment",
            Self::SubmitEntryFeePayment(_) => "submit_entry_fee_payment",
            Self::RequestOwnerInfo(_) => "request_owner_info",
            Self::DeclareOccupancy(_) => "declare_occupancy",
            Self::EligibilityCheck(_) => "eligibility_check",
        }
    }

    pub fn space_id(&self) -> Option<&SpaceId> {
        match self {
            Self::ListSpaces | Self::ListMyRentals => None,
            Self::RequestEntry(r)
            | Self::RequestRentQuote(r)
            | Self::SubmitRental(r)
            | Self::RequestOwnerInfo(r)
            | Self::DeclareOccupancy(r)
            | Self::EligibilityCheck(r) => Some(&r.space_id),
            Self::SubmitSettings(s) => Some(&s.space_id),
            Self::SubmitRentPayment(p) | Self::SubmitEntryFeePayment(p) => Some(&p.space_id),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn unit_requests_carry_only_the_type_tag() {
        let value: Value = serde_json::from_str(&OutboundMessage::ListSpaces.to_json().unwrap())
            .unwrap();
        assert_eq!(value, json!({ "type": "list_spaces" }));
    }

    #[test]
    fn space_scoped_requests_use_camel_case_fields() {
        let message = OutboundMessage::SubmitEntryFeePayment(ProofSubmission {
            space_id: "s7".into(),
            proof: "sig-1".to_string(),
        });
        let value: Value = serde_json::from_str(&message.to_json().unwrap()).unwrap();

        assert_eq!(
            value,
            json!({ "type": "submit_entry_fee_payment", "spaceId": "s7", "proof": "sig-1" })
        );
        assert_eq!(message.kind(), "submit_entry_fee_payment");
        assert_eq!(message.space_id().map(SpaceId::as_str), Some("s7"));
    }
}
