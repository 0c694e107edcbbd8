use serde::{Deserialize, Serialize};

use crate::network::protocol::{EntryCheckResult, EntryFeeResult};

/// Verbatim outcome of a server entry decision.
///
/// Only constructed from server responses; there is deliberately no
/// constructor taking loose booleans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearanceRecord {
    can_enter: bool,
    token_gate_met: bool,
    entry_fee_paid: bool,
    is_owner: bool,
    checked_at: i64,
}

impl ClearanceRecord {
    /// `received_at_ms` is used only when the server did not stamp the check.
    pub fn from_entry_check(result: &EntryCheckResult, received_at_ms: i64) -> Self {
        Self {
            can_enter: result.can_enter,
            token_gate_met: result.token_gate_met,
            entry_fee_paid: result.entry_fee_paid,
            is_owner: result.is_owner,
            checked_at: result.checked_at.unwrap_or(received_at_ms),
        }
    }

    pub fn from_entry_fee_grant(result: &EntryFeeResult, received_at_ms: i64) -> Self {
        Self {
            can_enter: result.can_enter,
            token_gate_met: result.token_gate_met,
            entry_fee_paid: result.entry_fee_paid,
            is_owner: result.is_owner,
            checked_at: result.checked_at.unwrap_or(received_at_ms),
        }
    }

    pub fn can_enter(&self) -> bool {
        self.can_enter
    }

    pub fn token_gate_met(&self) -> bool {
        self.token_gate_met
    }

    pub fn entry_fee_paid(&self) -> bool {
        self.entry_fee_paid
    }

    pub fn is_owner(&self) -> bool {
        self.is_owner
    }

    /// Milliseconds since the epoch of the last server confirmation.
    pub fn checked_at(&self) -> i64 {
        self.checked_at
    }
}
