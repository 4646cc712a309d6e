//! OpenAPI documentation.
//!
//! [`ApiDoc`] registers every HTTP operation. Besides feeding Swagger UI in
//! debug builds and `openapi-dump`, its path keys seed the route table served
//! by `GET /endpoints`, so a handler missing here is invisible to clients.

use utoipa::OpenApi;

use crate::inbound::http::endpoints::EndpointsResponse;
use crate::inbound::http::flavors::CreateFlavorForm;
use crate::inbound::http::hello::HelloResponse;
use crate::inbound::http::schemas::{
    ErrorCodeSchema, ErrorSchema, FlavorSchema, RoomSchema, UserSchema,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Scoops backend API",
        description = "Flavor catalogue plus chat rooms and users."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::hello::hello,
        crate::inbound::http::endpoints::list_endpoints,
        crate::inbound::http::flavors::list_flavors,
        crate::inbound::http::flavors::create_flavor,
        crate::inbound::http::rooms::create_room,
        crate::inbound::http::rooms::delete_room,
        crate::inbound::http::rooms::list_rooms,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::create_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        FlavorSchema,
        RoomSchema,
        UserSchema,
        CreateFlavorForm,
        HelloResponse,
        EndpointsResponse,
    )),
    tags(
        (name = "flavors", description = "Flavor catalogue"),
        (name = "rooms", description = "Chat rooms"),
        (name = "users", description = "Chat participants"),
        (name = "meta", description = "Greeting and route listing"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
