//! Driving ports for the flavor catalogue.
//!
//! HTTP handlers depend on these traits only; the domain service behind them
//! owns the mapping from store outcomes to [`Error`] codes.

use async_trait::async_trait;

use crate::domain::{Error, Flavor, FlavorName};

/// Read side of the catalogue.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FlavorsQuery: Send + Sync {
    /// List every flavor. Fails with `NotFound` when the store is missing.
    async fn list_flavors(&self) -> Result<Vec<Flavor>, Error>;
}

/// Write side of the catalogue.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FlavorsCommand: Send + Sync {
    /// Add a flavor and return the name it was stored under.
    async fn create_flavor(&self, flavor: Flavor) -> Result<FlavorName, Error>;
}
