//! HTTP inbound adapter exposing the REST endpoints.

pub mod endpoints;
pub mod error;
pub mod flavors;
pub mod health;
pub mod hello;
pub mod rooms;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod validation;

pub use error::ApiResult;

use actix_web::web;

/// Register the catalogue routes and the form decoding policy.
///
/// Expects [`state::HttpState`] as app data. Health probes are registered
/// separately because they depend on server-owned state.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(validation::form_config())
        .service(hello::hello)
        .service(endpoints::list_endpoints)
        .service(flavors::list_flavors)
        .service(flavors::create_flavor)
        .service(rooms::create_room)
        .service(rooms::delete_room)
        .service(rooms::list_rooms)
        .service(users::list_users)
        .service(users::create_user);
}
