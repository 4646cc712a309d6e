//! Driven port for the users collection of the data store.
use async_trait::async_trait;

use crate::domain::{User, UserName};

use super::define_port_error;

define_port_error! {
    /// Outcomes other than success reported by user store adapters.
    pub enum UserRepositoryError {
        /// The users collection does not exist or cannot be reached.
        StoreMissing => "user collection is not provisioned",
        /// A user with the same name is already stored.
        Duplicate { name: String } => "user {name} already exists",
        /// The store failed while executing the operation.
        Query { message: String } => "user repository query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Every stored user, ordered by name.
    async fn list(&self) -> Result<Vec<User>, UserRepositoryError>;

    /// Insert a user.
    async fn insert(&self, name: &UserName) -> Result<(), UserRepositoryError>;
}
