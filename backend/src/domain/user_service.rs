//! Chat participant service.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, info};

use crate::domain::ports::{UserRepository, UserRepositoryError, UsersCommand, UsersQuery};
use crate::domain::{Error, User, UserName};

fn map_repository_error(error: UserRepositoryError) -> Error {
    match error {
        UserRepositoryError::StoreMissing => Error::not_found("User db not found."),
        UserRepositoryError::Duplicate { name } => {
            Error::duplicate("User name already exists.").with_details(json!({ "name": name }))
        }
        UserRepositoryError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
    }
}

/// User service implementing the user driving ports.
#[derive(Clone)]
pub struct UserService<R> {
    user_repo: Arc<R>,
}

impl<R> UserService<R> {
    pub fn new(user_repo: Arc<R>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl<R> UsersQuery for UserService<R>
where
    R: UserRepository,
{
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.user_repo.list().await.map_err(map_repository_error)
    }
}

#[async_trait]
impl<R> UsersCommand for UserService<R>
where
    R: UserRepository,
{
    async fn create_user(&self, name: UserName) -> Result<UserName, Error> {
        self.user_repo.insert(&name).await.map_err(|error| {
            debug!(user = %name, %error, "user creation rejected");
            map_repository_error(error)
        })?;
        info!(user = %name, "user created");
        Ok(name)
    }
}
