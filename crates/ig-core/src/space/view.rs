//! Read-only projection consumed by the renderer.

use serde::Serialize;

use super::model::{AccessType, Space};
use crate::ids::SpaceId;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceDisplay {
    pub id: SpaceId,
    pub title: String,
    pub access_type: AccessType,
    pub is_rented: bool,
    pub owner_label: Option<String>,
    pub fee_summary: Option<String>,
    pub gate_summary: Option<String>,
}

impl From<&Space> for SpaceDisplay {
    fn from(space: &Space) -> Self {
        let title = space
            .banner
            .title
            .clone()
            .unwrap_or_else(|| space.id.to_string());

        let owner_label = space
            .owner_username
            .clone()
            .or_else(|| space.owner_wallet.as_ref().map(|w| short_wallet(w.as_str())));

        let fee_summary = space
            .entry_fee
            .as_ref()
            .filter(|fee| fee.enabled && space.access_type.requires_fee())
            .map(|fee| {
                format!(
                    "{} {} entry",
                    format_amount(fee.amount),
                    fee.token_symbol.as_deref().unwrap_or("tokens")
                )
            });

        let gate_summary = space
            .token_gate
            .as_ref()
            .filter(|gate| gate.enabled && space.access_type.requires_token())
            .map(|gate| {
                format!(
                    "hold {} {}",
                    format_amount(gate.minimum_balance),
                    gate.token_symbol.as_deref().unwrap_or("tokens")
                )
            });

        Self {
            id: space.id.clone(),
            title,
            access_type: space.access_type,
            is_rented: space.is_rented,
            owner_label,
            fee_summary,
            gate_summary,
        }
    }
}

fn short_wallet(wallet: &str) -> String {
    if wallet.len() <= 10 || !wallet.is_ascii() {
        return wallet.to_string();
    }
    format!("{}…{}", &wallet[..4], &wallet[wallet.len() - 4..])
}

fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{}", amount as i64)
    } else {
        format!("{amount}")
    }
}
