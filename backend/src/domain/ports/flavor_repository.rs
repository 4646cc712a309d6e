//! Driven port for the flavors collection of the data store.

use async_trait::async_trait;

use crate::domain::Flavor;

use super::define_port_error;

define_port_error! {
    /// Outcomes other than success reported by flavor store adapters.
    pub enum FlavorRepositoryError {
        /// The flavors collection does not exist or cannot be reached.
        StoreMissing => "flavor collection is not provisioned",
        /// A flavor with the same name is already stored.
        Duplicate { name: String } => "flavor {name} already exists",
        /// The store failed while executing the operation.
        Query { message: String } => "flavor repository query failed: {message}",
    }
}

/// Port for reading and inserting flavors.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FlavorRepository: Send + Sync {
    /// Every stored flavor, ordered by name. Empty when the collection is
    /// provisioned but holds nothing.
    async fn list(&self) -> Result<Vec<Flavor>, FlavorRepositoryError>;

    /// Insert a new flavor keyed by its name.
    async fn insert(&self, flavor: &Flavor) -> Result<(), FlavorRepositoryError>;
}
