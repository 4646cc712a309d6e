//! Server harness and shared world for the catalogue scenarios.
//!
//! The harness owns a single-threaded Tokio runtime plus a `LocalSet` because
//! Actix uses `spawn_local` internally. Each scenario starts its own server
//! over a fresh `MemoryStore`; `WorldFixture` stops it even if a step panics.

use std::cell::RefCell;
use std::net::TcpListener;
use std::rc::Rc;
use std::sync::Arc;

use actix_web::dev::ServerHandle;
use actix_web::{App, HttpServer, web};
use rstest::fixture;
use serde_json::Value;
use tokio::runtime::Runtime;
use tokio::task::LocalSet;

use scoops_backend::Trace;
use scoops_backend::domain::{FlavorService, RoomService, UserService};
use scoops_backend::inbound::http;
use scoops_backend::inbound::http::state::{HttpState, HttpStatePorts};
use scoops_backend::outbound::memory::MemoryStore;

pub(crate) struct ScenarioWorld {
    pub(crate) runtime: Runtime,
    pub(crate) local: LocalSet,
    pub(crate) base_url: Option<String>,
    pub(crate) server: Option<ServerHandle>,
    pub(crate) last_status: Option<u16>,
    pub(crate) last_body: Option<Value>,
    pub(crate) last_trace_id: Option<String>,
}

pub(crate) type SharedWorld = Rc<RefCell<ScenarioWorld>>;

pub(crate) struct WorldFixture {
    world: SharedWorld,
}

impl WorldFixture {
    pub(crate) fn world(&self) -> SharedWorld {
        self.world.clone()
    }
}

impl Drop for WorldFixture {
    fn drop(&mut self) {
        shutdown(self.world.clone());
    }
}

fn shutdown(world: SharedWorld) {
    // `LocalSet` must be driven on the thread that owns it.
    let ctx = world.borrow();
    let Some(server) = ctx.server.clone() else {
        return;
    };
    ctx.local.block_on(&ctx.runtime, async move {
        server.stop(true).await;
    });
}

/// Run `operation` against the scenario's server on its runtime.
pub(crate) fn with_world_async<R, F>(world: &SharedWorld, operation: impl FnOnce(String) -> F) -> R
where
    F: std::future::Future<Output = R>,
{
    let ctx = world.borrow();
    let base_url = ctx
        .base_url
        .clone()
        .expect("a Given step must start the server first");
    ctx.local.block_on(&ctx.runtime, operation(base_url))
}

fn http_state(store: MemoryStore) -> HttpState {
    let store = Arc::new(store);
    let flavors = Arc::new(FlavorService::new(store.clone()));
    let rooms = Arc::new(RoomService::new(store.clone()));
    let users = Arc::new(UserService::new(store));
    HttpState::new(HttpStatePorts {
        flavors: flavors.clone(),
        flavors_query: flavors,
        rooms: rooms.clone(),
        rooms_query: rooms,
        users: users.clone(),
        users_query: users,
    })
}

async fn spawn_server(store: MemoryStore) -> Result<(String, ServerHandle), String> {
    let listener = TcpListener::bind("127.0.0.1:0").map_err(|err| err.to_string())?;
    let addr = listener.local_addr().map_err(|err| err.to_string())?;
    let http_data = web::Data::new(http_state(store));

    let server = HttpServer::new(move || {
        App::new()
            .app_data(http_data.clone())
            .wrap(Trace)
            .configure(http::configure)
    })
    .disable_signals()
    .workers(1)
    .listen(listener)
    .map_err(|err| err.to_string())?
    .run();

    let handle = server.handle();
    actix_web::rt::spawn(server);

    Ok((format!("http://{addr}"), handle))
}

/// Start the scenario's server over `store`.
pub(crate) fn start_server(world: &SharedWorld, store: MemoryStore) {
    let (base_url, handle) = {
        let ctx = world.borrow();
        ctx.local
            .block_on(&ctx.runtime, spawn_server(store))
            .expect("server should start")
    };
    let mut ctx = world.borrow_mut();
    ctx.base_url = Some(base_url);
    ctx.server = Some(handle);
}

#[fixture]
pub(crate) fn world() -> WorldFixture {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("tokio runtime");
    let world = Rc::new(RefCell::new(ScenarioWorld {
        runtime,
        local: LocalSet::new(),
        base_url: None,
        server: None,
        last_status: None,
        last_body: None,
        last_trace_id: None,
    }));
    WorldFixture { world }
}
