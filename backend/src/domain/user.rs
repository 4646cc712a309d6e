//! Chat participant entity.

use serde::{Deserialize, Serialize};

use super::UserName;

/// A named chat participant.
///
/// ## Invariants
/// - `name` is unique within the users collection; the store enforces this.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct User {
    name: UserName,
}

impl User {
    pub fn new(name: UserName) -> Self {
        Self { name }
    }

    pub fn name(&self) -> &UserName {
        &self.name
    }
}

impl From<UserName> for User {
    fn from(name: UserName) -> Self {
        Self::new(name)
    }
}
