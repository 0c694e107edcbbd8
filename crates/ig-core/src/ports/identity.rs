use serde::{Deserialize, Serialize};

use crate::ids::WalletAddress;

/// The player the session acts for. Clearance is scoped to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub wallet: WalletAddress,
    pub username: Option<String>,
}

impl Identity {
    pub fn new(wallet: impl Into<WalletAddress>, username: Option<String>) -> Self {
        Self {
            wallet: wallet.into(),
            username,
        }
    }
}

pub trait IdentityPort: Send + Sync {
    /// `None` when no wallet is connected or auth expired.
    fn current(&self) -> Option<Identity>;
}
