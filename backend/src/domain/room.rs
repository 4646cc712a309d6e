//! Chat room entity.

use serde::{Deserialize, Serialize};

use super::RoomName;

/// A named chat room. The name is the only attribute.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Room {
    name: RoomName,
}

impl Room {
    pub fn new(name: RoomName) -> Self {
        Self { name }
    }

    pub fn name(&self) -> &RoomName {
        &self.name
    }
}

impl From<RoomName> for Room {
    fn from(name: RoomName) -> Self {
        Self::new(name)
    }
}
