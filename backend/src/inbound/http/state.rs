//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and only see driving ports, so
//! they can be exercised against mocks without a store.

use std::sync::Arc;

use crate::domain::ports::{
    FlavorsCommand, FlavorsQuery, RoomsCommand, RoomsQuery, UsersCommand, UsersQuery,
};
use crate::inbound::http::endpoints::EndpointCatalogue;

/// Parameter object bundling the port implementations for handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub flavors: Arc<dyn FlavorsCommand>,
    pub flavors_query: Arc<dyn FlavorsQuery>,
    pub rooms: Arc<dyn RoomsCommand>,
    pub rooms_query: Arc<dyn RoomsQuery>,
    pub users: Arc<dyn UsersCommand>,
    pub users_query: Arc<dyn UsersQuery>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub flavors: Arc<dyn FlavorsCommand>,
    pub flavors_query: Arc<dyn FlavorsQuery>,
    pub rooms: Arc<dyn RoomsCommand>,
    pub rooms_query: Arc<dyn RoomsQuery>,
    pub users: Arc<dyn UsersCommand>,
    pub users_query: Arc<dyn UsersQuery>,
    pub endpoints: Arc<EndpointCatalogue>,
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}

impl HttpState {
    /// Construct state from a ports bundle.
    ///
    /// The endpoint catalogue starts as the routes mounted by
    /// [`configure`](super::configure), read from the OpenAPI document once,
    /// here.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use scoops_backend::domain::{FlavorService, RoomService, UserService};
    /// use scoops_backend::inbound::http::state::{HttpState, HttpStatePorts};
    /// use scoops_backend::outbound::memory::MemoryStore;
    ///
    /// let store = Arc::new(MemoryStore::new());
    /// let flavors = Arc::new(FlavorService::new(store.clone()));
    /// let rooms = Arc::new(RoomService::new(store.clone()));
    /// let users = Arc::new(UserService::new(store));
    /// let state = HttpState::new(HttpStatePorts {
    ///     flavors: flavors.clone(),
    ///     flavors_query: flavors,
    ///     rooms: rooms.clone(),
    ///     rooms_query: rooms,
    ///     users: users.clone(),
    ///     users_query: users,
    /// });
    /// assert!(state.endpoints.paths().iter().any(|path| path == "/hello"));
    /// ```
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            flavors,
            flavors_query,
            rooms,
            rooms_query,
            users,
            users_query,
        } = ports;
        Self {
            flavors,
            flavors_query,
            rooms,
            rooms_query,
            users,
            users_query,
            endpoints: Arc::new(EndpointCatalogue::from_api_doc()),
        }
    }

    /// Replace the endpoint catalogue, e.g. with one that also lists routes
    /// the server mounts beside `configure`.
    #[must_use]
    pub fn with_endpoints(mut self, endpoints: EndpointCatalogue) -> Self {
        self.endpoints = Arc::new(endpoints);
        self
    }
}
