//! Driving ports for chat rooms.

use async_trait::async_trait;

use crate::domain::{Error, Room, RoomName};

/// Read side of the room directory.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoomsQuery: Send + Sync {
    async fn list_rooms(&self) -> Result<Vec<Room>, Error>;
}

/// Write side of the room directory.
///
/// Deletion is open to everyone: there is no ownership model, so the
/// `Forbidden` outcome is never produced.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoomsCommand: Send + Sync {
    async fn create_room(&self, name: RoomName) -> Result<RoomName, Error>;

    async fn delete_room(&self, name: RoomName) -> Result<RoomName, Error>;
}
