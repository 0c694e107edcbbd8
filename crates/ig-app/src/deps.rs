//! # Session Dependencies
//!
//! Parameter grouping for [`IglooSession`](crate::IglooSession) construction.
//!
//! **NOT a Builder pattern** - no build steps, no hidden logic. The only
//! optional collaborator is the payment port, because a host without a
//! wallet integration can still browse and enter spaces.

use std::sync::Arc;

use ig_core::ports::{ClockPort, IdentityPort, MessageChannelPort, PaymentPort, TimerPort};
use ig_core::PollSchedule;

pub struct SessionDeps {
    // Transport
    pub channel: Arc<dyn MessageChannelPort>,

    // Who we are
    pub identity: Arc<dyn IdentityPort>,

    // Time
    pub clock: Arc<dyn ClockPort>,
    pub timer: Box<dyn TimerPort>,
    pub schedule: PollSchedule,

    // Value transfer
    pub payment: Option<Arc<dyn PaymentPort>>,
}
