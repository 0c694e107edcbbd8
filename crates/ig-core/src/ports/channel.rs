//! Message channel port - the duplex transport shared with the game server.

use async_trait::async_trait;
use thiserror::Error;

use crate::network::OutboundMessage;

#[derive(Debug, Error)]
pub enum ChannelError {
    #[error("message channel is not connected")]
    NotConnected,

    #[error("failed to encode {kind}: {source}")]
    Encode {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("message channel closed: {0}")]
    Closed(String),
}

/// Outbound half of the channel. Inbound envelopes are pushed to the
/// session by whoever owns the read side.
#[async_trait]
pub trait MessageChannelPort: Send + Sync {
    /// Whether a send is expected to reach the server right now.
    fn is_connected(&self) -> bool;

    async fn send(&self, message: OutboundMessage) -> Result<(), ChannelError>;
}
