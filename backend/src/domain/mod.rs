//! Domain primitives, ports and services.
//!
//! Purpose: define the strongly typed entities served by the API, the ports
//! that form the data access facade, and the services that translate store
//! outcomes into transport-agnostic [`Error`] values.
//!
//! Public surface:
//! - `Error` / `ErrorCode`: error envelope shared by every endpoint.
//! - `TraceId`: request-scoped correlation identifier.
//! - `Flavor`, `Room`, `User` and their name newtypes.
//! - `FlavorService`, `RoomService`, `UserService`: driving port
//!   implementations.

pub mod error;
pub mod flavor;
pub mod flavor_service;
pub mod names;
pub mod ports;
pub mod room;
pub mod room_service;
pub mod trace_id;
pub mod user;
pub mod user_service;

pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::flavor::{Flavor, FlavorDetails};
pub use self::flavor_service::FlavorService;
pub use self::names::{FlavorName, NameValidationError, RoomName, UserName};
pub use self::room::Room;
pub use self::room_service::RoomService;
pub use self::trace_id::TraceId;
pub use self::user::User;
pub use self::user_service::UserService;

