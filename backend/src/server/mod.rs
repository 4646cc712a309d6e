//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::ServerConfig;

use state_builders::build_http_state;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

use scoops_backend::Trace;
#[cfg(debug_assertions)]
use scoops_backend::doc::ApiDoc;
use scoops_backend::inbound::http;
use scoops_backend::inbound::http::endpoints::EndpointCatalogue;
use scoops_backend::inbound::http::health::{HealthState, PROBE_PATHS, live, ready};
use scoops_backend::inbound::http::state::HttpState;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

const DOCS_ROUTE: &str = "/docs/{_:.*}";
const OPENAPI_ROUTE: &str = "/api-docs/openapi.json";

/// Every route pattern [`build_app`] mounts.
fn served_endpoints() -> EndpointCatalogue {
    let docs: &[&str] = if cfg!(debug_assertions) {
        &[DOCS_ROUTE, OPENAPI_ROUTE]
    } else {
        &[]
    };
    EndpointCatalogue::from_api_doc().with_paths(
        PROBE_PATHS
            .iter()
            .chain(docs)
            .map(|path| (*path).to_owned()),
    )
}

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .configure(http::configure)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new(DOCS_ROUTE).url(OPENAPI_ROUTE, ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server over the configured store.
///
/// Readiness flips to true once the listener is bound.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let ServerConfig { bind_addr, store } = config;
    let http_state = build_http_state(&store);
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || build_app(server_health_state.clone(), http_state.clone()))
        .bind(bind_addr)?
        .run();

    info!(%bind_addr, "listening");
    health_state.mark_ready();
    Ok(server)
}
