//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::Trace;
use crate::domain::ports::{
    MockFlavorsCommand, MockFlavorsQuery, MockRoomsCommand, MockRoomsQuery, MockUsersCommand,
    MockUsersQuery,
};
use crate::inbound::http::state::{HttpState, HttpStatePorts};

/// Mock ports for handler tests.
///
/// Mocks left at their defaults have no expectations, so any call fails the
/// test. Set expectations only on the ports a handler should reach.
#[derive(Default)]
pub struct MockPorts {
    pub flavors: MockFlavorsCommand,
    pub flavors_query: MockFlavorsQuery,
    pub rooms: MockRoomsCommand,
    pub rooms_query: MockRoomsQuery,
    pub users: MockUsersCommand,
    pub users_query: MockUsersQuery,
}

impl MockPorts {
    pub fn into_state(self) -> HttpState {
        HttpState::new(HttpStatePorts {
            flavors: Arc::new(self.flavors),
            flavors_query: Arc::new(self.flavors_query),
            rooms: Arc::new(self.rooms),
            rooms_query: Arc::new(self.rooms_query),
            users: Arc::new(self.users),
            users_query: Arc::new(self.users_query),
        })
    }
}

/// Application wiring every catalogue route over the given mocks.
pub fn test_app(
    ports: MockPorts,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(ports.into_state()))
        .wrap(Trace)
        .configure(crate::inbound::http::configure)
}
