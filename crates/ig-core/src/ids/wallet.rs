use serde::{Deserialize, Serialize};

use super::id_macro::impl_id;

/// Public wallet address identifying a player.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WalletAddress(String);

impl_id!(WalletAddress);
