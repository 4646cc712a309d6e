//! Names of the store's collections.

use std::fmt;
use std::str::FromStr;

/// One of the three collections held by the data store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Collection {
    Flavors,
    Rooms,
    Users,
}

impl Collection {
    /// Lowercase identifier used in configuration and logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Flavors => "flavors",
            Self::Rooms => "rooms",
            Self::Users => "users",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a configuration value names no known collection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown collection `{0}`; expected flavors, rooms or users")]
pub struct UnknownCollection(pub String);

impl FromStr for Collection {
    type Err = UnknownCollection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "flavors" => Ok(Self::Flavors),
            "rooms" => Ok(Self::Rooms),
            "users" => Ok(Self::Users),
            _ => Err(UnknownCollection(s.to_owned())),
        }
    }
}
