//! Driving ports for chat participants.

use async_trait::async_trait;

use crate::domain::{Error, User, UserName};

/// Domain use-case port for listing users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    async fn list_users(&self) -> Result<Vec<User>, Error>;
}

/// Domain use-case port for registering users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersCommand: Send + Sync {
    async fn create_user(&self, name: UserName) -> Result<UserName, Error>;
}
