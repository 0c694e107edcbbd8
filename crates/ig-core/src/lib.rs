//! # ig-core
//!
//! Core domain models and ports for the igloo sync client.
//!
//! This crate contains pure domain logic without any infrastructure dependencies.

pub mod clearance;
pub mod config;
pub mod ids;
pub mod network;
pub mod occupancy;
pub mod ports;
pub mod space;

// Re-export commonly used types at the crate root
pub use clearance::{ClearanceCache, ClearanceRecord, QuickAccess};
pub use config::AppConfig;
pub use ids::{RequestTicket, SpaceId, TimerKey, WalletAddress};
pub use network::{InboundDecode, InboundMessage, OutboundMessage};
pub use occupancy::{OccupancyState, PollSchedule};
pub use space::{AccessType, EntryRequirements, Space, SpaceDisplay};
