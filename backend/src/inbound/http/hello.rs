//! Greeting endpoint.

use actix_web::{get, web};
use serde::Serialize;

/// Body of `GET /hello`.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct HelloResponse {
    #[serde(rename = "Hola")]
    #[schema(example = "Mundo")]
    hola: &'static str,
}

/// Fixed greeting used as a smoke test.
#[utoipa::path(
    get,
    path = "/hello",
    responses((status = 200, description = "Greeting", body = HelloResponse)),
    tags = ["meta"],
    operation_id = "hello"
)]
#[get("/hello")]
pub async fn hello() -> web::Json<HelloResponse> {
    web::Json(HelloResponse { hola: "Mundo" })
}
