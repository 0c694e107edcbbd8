//! Space (igloo) domain models.

mod model;
mod requirements;
mod settings;
mod view;

pub use model::{
    AccessType, Banner, EntryFee, RentStatus, Space, SpacePatch, SpaceStats, TokenGate,
};
pub use requirements::{EntryDenyReason, EntryRequirements};
pub use settings::SpaceSettings;
pub use view::SpaceDisplay;
