//! Wiring of domain services over the data store into HTTP state.

use std::sync::Arc;

use actix_web::web;

use scoops_backend::domain::{FlavorService, RoomService, UserService};
use scoops_backend::inbound::http::state::{HttpState, HttpStatePorts};
use scoops_backend::outbound::memory::MemoryStore;

use super::served_endpoints;

/// Build handler state with one service per collection, all sharing `store`.
///
/// The endpoint catalogue lists every route the server mounts.
pub(super) fn build_http_state(store: &MemoryStore) -> web::Data<HttpState> {
    let store = Arc::new(store.clone());
    let flavors = Arc::new(FlavorService::new(store.clone()));
    let rooms = Arc::new(RoomService::new(store.clone()));
    let users = Arc::new(UserService::new(store));
    web::Data::new(HttpState::new(HttpStatePorts {
        flavors: flavors.clone(),
        flavors_query: flavors,
        rooms: rooms.clone(),
        rooms_query: rooms,
        users: users.clone(),
        users_query: users,
    })
    .with_endpoints(served_endpoints()))
}
