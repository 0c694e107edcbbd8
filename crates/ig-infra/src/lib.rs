//! Adapters binding the igloo session ports to tokio.

pub mod channel;
pub mod identity;
pub mod time;

pub use channel::JsonLinesChannel;
pub use identity::SharedIdentity;
pub use time::{SystemClock, TokioTimer};
