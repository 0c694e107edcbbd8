use serde::{Deserialize, Serialize};

use crate::space::Space;

/// Every space the server knows about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpaceListMessage {
    #[serde(default)]
    pub spaces: Vec<Space>,
}

/// Spaces owned or rented by the current identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MyRentalsMessage {
    #[serde(default)]
    pub spaces: Vec<Space>,
}

/// Owner view of one space, including counters hidden from visitors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnerInfoMessage {
    pub space: Space,
}
