//! HTTP server configuration object.

use std::net::SocketAddr;

use scoops_backend::outbound::memory::MemoryStore;

/// Everything `create_server` needs besides health state.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) store: MemoryStore,
}

impl ServerConfig {
    /// Configuration over a fully provisioned store.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            store: MemoryStore::new(),
        }
    }

    /// Replace the data store, e.g. one with unprovisioned collections.
    #[must_use]
    pub fn with_store(mut self, store: MemoryStore) -> Self {
        self.store = store;
        self
    }

    #[cfg_attr(not(test), expect(dead_code, reason = "Read by server tests"))]
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
