//! Value transfer collaborator. Builds and submits the on-chain payment and
//! hands back an opaque proof; the session only forwards that proof.

use async_trait::async_trait;
use thiserror::Error;

use crate::ids::{SpaceId, WalletAddress};

#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRequest {
    pub space_id: SpaceId,
    pub amount: f64,
    pub destination: WalletAddress,
    pub token_address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentReceipt {
    pub success: bool,
    pub proof: Option<String>,
}

#[derive(Debug, Error)]
pub enum PaymentError {
    #[error("payment rejected: {0}")]
    Rejected(String),

    #[error("payment backend failed: {0}")]
    Backend(String),
}

#[async_trait]
pub trait PaymentPort: Send + Sync {
    async fn transfer(&self, request: PaymentRequest) -> Result<PaymentReceipt, PaymentError>;
}
