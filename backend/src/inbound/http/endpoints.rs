//! Route catalogue endpoint.
//!
//! Every operation mounted by [`configure`](super::configure) is registered in
//! [`ApiDoc`], so its path keys give that part of the route table. Routes the
//! server mounts itself (probes, Swagger UI) are added with
//! [`EndpointCatalogue::with_paths`]. Path parameters keep their `{name}`
//! placeholders.

use actix_web::{get, web};
use serde::Serialize;
use utoipa::OpenApi;
use utoipa::openapi::path::PathItem;

use crate::doc::ApiDoc;
use crate::inbound::http::state::HttpState;

/// Documented operations carrying this tag are mounted by the server, not by
/// `configure`.
const PROBE_TAG: &str = "health";

fn is_probe(item: &PathItem) -> bool {
    item.get
        .iter()
        .chain(item.post.iter())
        .filter_map(|operation| operation.tags.as_deref())
        .flatten()
        .any(|tag| tag == PROBE_TAG)
}

/// Sorted, de-duplicated list of mounted route patterns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointCatalogue {
    paths: Vec<String>,
}

impl EndpointCatalogue {
    /// Build the catalogue from arbitrary route patterns.
    pub fn new(paths: impl IntoIterator<Item = String>) -> Self {
        let mut paths: Vec<String> = paths.into_iter().collect();
        paths.sort();
        paths.dedup();
        Self { paths }
    }

    /// Routes mounted by `configure`, read from the OpenAPI document.
    pub fn from_api_doc() -> Self {
        Self::new(
            ApiDoc::openapi()
                .paths
                .paths
                .into_iter()
                .filter(|(_, item)| !is_probe(item))
                .map(|(path, _)| path),
        )
    }

    /// Add routes mounted outside `configure`.
    #[must_use]
    pub fn with_paths(self, extra: impl IntoIterator<Item = String>) -> Self {
        Self::new(self.paths.into_iter().chain(extra))
    }

    /// Route patterns in ascending order.
    pub fn paths(&self) -> &[String] {
        &self.paths
    }
}

/// Body of `GET /endpoints`.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct EndpointsResponse {
    #[serde(rename = "Available endpoints")]
    #[schema(example = json!(["/endpoints", "/hello"]))]
    available: Vec<String>,
}

/// List every route the server exposes, sorted.
#[utoipa::path(
    get,
    path = "/endpoints",
    responses((status = 200, description = "Available endpoints", body = EndpointsResponse)),
    tags = ["meta"],
    operation_id = "listEndpoints"
)]
#[get("/endpoints")]
pub async fn list_endpoints(state: web::Data<HttpState>) -> web::Json<EndpointsResponse> {
    web::Json(EndpointsResponse {
        available: state.endpoints.paths().to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbound::http::test_utils::{MockPorts, test_app};
    use actix_web::test as actix_test;
    use rstest::rstest;
    use serde_json::Value;

    #[rstest]
    fn catalogue_sorts_and_dedups() {
        let catalogue = EndpointCatalogue::new(
            ["/users/list", "/hello", "/users/list", "/endpoints"].map(String::from),
        );
        assert_eq!(catalogue.paths(), ["/endpoints", "/hello", "/users/list"]);
    }

    #[rstest]
    fn api_doc_catalogue_lists_every_route() {
        let catalogue = EndpointCatalogue::from_api_doc();
        for expected in [
            "/endpoints",
            "/flavors",
            "/flavors/create",
            "/hello",
            "/rooms/create/{roomname}",
            "/rooms/delete/{roomname}",
            "/rooms/list",
            "/users/create/{username}",
            "/users/list",
        ] {
            assert!(
                catalogue.paths().iter().any(|path| path == expected),
                "missing {expected}"
            );
        }
    }

    #[rstest]
    fn api_doc_catalogue_leaves_out_probes() {
        let catalogue = EndpointCatalogue::from_api_doc();
        assert!(
            !catalogue.paths().iter().any(|path| path.starts_with("/health")),
            "probes are not mounted by configure: {:?}",
            catalogue.paths()
        );
    }

    #[rstest]
    fn extra_paths_are_merged_in_order() {
        let catalogue = EndpointCatalogue::new(["/hello".to_owned()])
            .with_paths(["/health/ready", "/api-docs/openapi.json", "/hello"].map(String::from));
        assert_eq!(
            catalogue.paths(),
            ["/api-docs/openapi.json", "/health/ready", "/hello"]
        );
    }

    #[rstest]
    #[actix_web::test]
    async fn endpoints_response_is_sorted() {
        let app = actix_test::init_service(test_app(MockPorts::default())).await;
        let request = actix_test::TestRequest::get().uri("/endpoints").to_request();

        let body: Value = actix_test::call_and_read_body_json(&app, request).await;
        let paths: Vec<&str> = body["Available endpoints"]
            .as_array()
            .expect("array of paths")
            .iter()
            .filter_map(Value::as_str)
            .collect();
        let mut sorted = paths.clone();
        sorted.sort_unstable();
        assert_eq!(paths, sorted);
        assert!(paths.contains(&"/hello"));
        assert!(paths.contains(&"/endpoints"));
    }
}
