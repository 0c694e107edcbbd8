//! Wire protocol spoken with the game server.

pub mod protocol;

pub use protocol::{InboundDecode, InboundMessage, OutboundMessage};
