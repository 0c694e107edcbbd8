//! Eligibility poller: re-validates access while the player occupies a gated space.

pub mod action;
pub mod event;
pub mod schedule;
pub mod state;
pub mod state_machine;

pub use action::{EvictionCause, OccupancyAction};
pub use event::OccupancyEvent;
pub use schedule::PollSchedule;
pub use state::OccupancyState;
pub use state_machine::OccupancyStateMachine;
