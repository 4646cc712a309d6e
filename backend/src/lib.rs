//! Scoops backend: a flavor catalogue and chat directory over HTTP.
//!
//! Layout follows ports and adapters: [`domain`] holds entities, ports and
//! services; [`inbound::http`] the Actix handlers; [`outbound::memory`] the
//! in-process data store.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
