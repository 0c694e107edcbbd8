use ig_core::ports::{ChannelError, PaymentError};
use ig_core::SpaceId;

/// Errors surfaced by session operations. Every failure is terminal for the
/// attempt; nothing here is retried.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("request not sent: {0}")]
    Channel(#[from] ChannelError),

    #[error("eligibility timer failed: {0}")]
    Timer(#[source] anyhow::Error),

    #[error("no payment collaborator configured")]
    PaymentUnavailable,

    #[error("payment failed: {0}")]
    Payment(#[from] PaymentError),

    #[error("payment for {0} produced no proof")]
    PaymentDeclined(SpaceId),

    #[error("nothing to pay for {space_id}: {detail}")]
    NothingToPay {
        space_id: SpaceId,
        detail: &'static str,
    },

    #[error("session runtime has stopped")]
    RuntimeClosed,
}
