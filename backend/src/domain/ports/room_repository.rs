//! Driven port for the rooms collection of the data store.

use async_trait::async_trait;

use crate::domain::{Room, RoomName};

use super::define_port_error;

define_port_error! {
    /// Outcomes other than success reported by room store adapters.
    pub enum RoomRepositoryError {
        /// The rooms collection does not exist or cannot be reached.
        StoreMissing => "room collection is not provisioned",
        /// A room with the same name is already stored.
        Duplicate { name: String } => "room {name} already exists",
        /// No room with the given name is stored.
        NotFound { name: String } => "room {name} does not exist",
        /// The store failed while executing the operation.
        Query { message: String } => "room repository query failed: {message}",
    }
}

/// Port for creating, deleting and listing rooms.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Every stored room, ordered by name.
    async fn list(&self) -> Result<Vec<Room>, RoomRepositoryError>;

    /// Insert a room.
    async fn insert(&self, name: &RoomName) -> Result<(), RoomRepositoryError>;

    /// Remove a room.
    async fn remove(&self, name: &RoomName) -> Result<(), RoomRepositoryError>;
}
