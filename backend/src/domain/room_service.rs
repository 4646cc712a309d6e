//! Chat room service.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, info};

use crate::domain::ports::{RoomRepository, RoomRepositoryError, RoomsCommand, RoomsQuery};
use crate::domain::{Error, Room, RoomName};

fn map_repository_error(error: RoomRepositoryError) -> Error {
    match error {
        RoomRepositoryError::StoreMissing => Error::not_found("Chat room db not found."),
        RoomRepositoryError::Duplicate { name } => {
            Error::duplicate("Chat room name already exists.").with_details(json!({ "name": name }))
        }
        RoomRepositoryError::NotFound { name } => {
            Error::not_found(format!("Chat room {name} not found."))
                .with_details(json!({ "name": name }))
        }
        RoomRepositoryError::Query { message } => {
            Error::internal(format!("room repository error: {message}"))
        }
    }
}

/// Room service implementing the room driving ports.
#[derive(Clone)]
pub struct RoomService<R> {
    room_repo: Arc<R>,
}

impl<R> RoomService<R> {
    /// Create a new service over the room repository.
    pub fn new(room_repo: Arc<R>) -> Self {
        Self { room_repo }
    }
}

#[async_trait]
impl<R> RoomsQuery for RoomService<R>
where
    R: RoomRepository,
{
    async fn list_rooms(&self) -> Result<Vec<Room>, Error> {
        self.room_repo.list().await.map_err(map_repository_error)
    }
}

#[async_trait]
impl<R> RoomsCommand for RoomService<R>
where
    R: RoomRepository,
{
    async fn create_room(&self, name: RoomName) -> Result<RoomName, Error> {
        self.room_repo.insert(&name).await.map_err(|error| {
            debug!(room = %name, %error, "room creation rejected");
            map_repository_error(error)
        })?;
        info!(room = %name, "room created");
        Ok(name)
    }

    async fn delete_room(&self, name: RoomName) -> Result<RoomName, Error> {
        self.room_repo.remove(&name).await.map_err(|error| {
            debug!(room = %name, %error, "room deletion rejected");
            map_repository_error(error)
        })?;
        info!(room = %name, "room deleted");
        Ok(name)
    }
}
