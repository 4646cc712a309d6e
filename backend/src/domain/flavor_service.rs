//! Flavor catalogue service.
//!
//! Implements the flavor driving ports over a [`FlavorRepository`].

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, info};

use crate::domain::ports::{FlavorRepository, FlavorRepositoryError, FlavorsCommand, FlavorsQuery};
use crate::domain::{Error, Flavor, FlavorName};

const STORE_MISSING_MESSAGE: &str = "Flavor db not found.";

fn map_repository_error(error: FlavorRepositoryError) -> Error {
    match error {
        FlavorRepositoryError::StoreMissing => Error::not_found(STORE_MISSING_MESSAGE),
        FlavorRepositoryError::Duplicate { name } => {
            Error::duplicate("Flavor already exists.").with_details(json!({ "name": name }))
        }
        FlavorRepositoryError::Query { message } => {
            Error::internal(format!("flavor repository error: {message}"))
        }
    }
}

/// Flavor service implementing both catalogue ports.
#[derive(Clone)]
pub struct FlavorService<R> {
    flavor_repo: Arc<R>,
}

impl<R> FlavorService<R> {
    /// Create a new service over the flavor repository.
    pub fn new(flavor_repo: Arc<R>) -> Self {
        Self { flavor_repo }
    }
}

#[async_trait]
impl<R> FlavorsQuery for FlavorService<R>
where
    R: FlavorRepository,
{
    async fn list_flavors(&self) -> Result<Vec<Flavor>, Error> {
        self.flavor_repo.list().await.map_err(map_repository_error)
    }
}

#[async_trait]
impl<R> FlavorsCommand for FlavorService<R>
where
    R: FlavorRepository,
{
    async fn create_flavor(&self, flavor: Flavor) -> Result<FlavorName, Error> {
        if let Err(error) = self.flavor_repo.insert(&flavor).await {
            debug!(flavor = %flavor.name(), %error, "flavor rejected by store");
            return Err(map_repository_error(error));
        }
        info!(flavor = %flavor.name(), price = flavor.price(), "flavor created");
        Ok(flavor.name().clone())
    }
}
