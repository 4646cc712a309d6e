//! Domain ports for the hexagonal boundary.
//!
//! Driven ports (`*Repository`) form the data access facade implemented by
//! outbound adapters. Driving ports (`*Query`, `*Command`) are the use-cases
//! HTTP handlers call; domain services implement them.

mod macros;
pub(crate) use macros::define_port_error;

mod flavor_repository;
mod flavors;
mod room_repository;
mod rooms;
mod user_repository;
mod users;

#[cfg(test)]
pub use flavor_repository::MockFlavorRepository;
pub use flavor_repository::{FlavorRepository, FlavorRepositoryError};
#[cfg(test)]
pub use flavors::{MockFlavorsCommand, MockFlavorsQuery};
pub use flavors::{FlavorsCommand, FlavorsQuery};
#[cfg(test)]
pub use room_repository::MockRoomRepository;
pub use room_repository::{RoomRepository, RoomRepositoryError};
#[cfg(test)]
pub use rooms::{MockRoomsCommand, MockRoomsQuery};
pub use rooms::{RoomsCommand, RoomsQuery};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserRepository, UserRepositoryError};
#[cfg(test)]
pub use users::{MockUsersCommand, MockUsersQuery};
pub use users::{UsersCommand, UsersQuery};
