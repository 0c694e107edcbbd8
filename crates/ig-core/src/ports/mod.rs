//! Port interfaces for the application layer
//!
//! Ports define the contract between the session (use cases) and the
//! collaborators it does not own: the message transport, the wallet/auth
//! layer, wall-clock time, timers and the payment flow. Infrastructure
//! adapters live in `ig-infra`; tests provide fakes.

mod channel;
mod clock;
mod identity;
mod payment;
mod timer;

pub use channel::{ChannelError, MessageChannelPort};
pub use clock::ClockPort;
pub use identity::{Identity, IdentityPort};
pub use payment::{PaymentError, PaymentPort, PaymentReceipt, PaymentRequest};
pub use timer::{TimerEvent, TimerPort};
