//! Chat room handlers.
//!
//! ```text
//! POST /rooms/create/{roomname}
//! POST /rooms/delete/{roomname}
//! GET /rooms/list
//! ```

use actix_web::{get, post, web};

use crate::domain::{Room, RoomName};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, RoomSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, name_error};

const ROOM_NAME: FieldName = FieldName::new("roomname");

fn parse_room_name(path: web::Path<String>) -> ApiResult<RoomName> {
    RoomName::new(path.into_inner()).map_err(|err| name_error(ROOM_NAME, err))
}

/// Create a chat room.
#[utoipa::path(
    post,
    path = "/rooms/create/{roomname}",
    params(("roomname" = String, Path, description = "Unique room name")),
    responses(
        (status = 200, description = "Confirmation message", body = String, example = json!("lobby added.")),
        (status = 400, description = "Blank room name", body = ErrorSchema),
        (status = 404, description = "Room store missing", body = ErrorSchema),
        (status = 406, description = "Room already exists", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["rooms"],
    operation_id = "createRoom"
)]
#[post("/rooms/create/{roomname}")]
pub async fn create_room(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<String>> {
    let name = state.rooms.create_room(parse_room_name(path)?).await?;
    Ok(web::Json(format!("{name} added.")))
}

/// Delete a chat room.
///
/// `403 Forbidden` is reserved for a future privilege check and is never
/// returned today.
#[utoipa::path(
    post,
    path = "/rooms/delete/{roomname}",
    params(("roomname" = String, Path, description = "Name of the room to delete")),
    responses(
        (status = 200, description = "Confirmation message", body = String, example = json!("lobby deleted.")),
        (status = 400, description = "Blank room name", body = ErrorSchema),
        (status = 403, description = "Reserved; not currently produced", body = ErrorSchema),
        (status = 404, description = "Room or room store missing", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["rooms"],
    operation_id = "deleteRoom"
)]
#[post("/rooms/delete/{roomname}")]
pub async fn delete_room(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<String>> {
    let name = state.rooms.delete_room(parse_room_name(path)?).await?;
    Ok(web::Json(format!("{name} deleted.")))
}

/// List chat rooms, ordered by name.
#[utoipa::path(
    get,
    path = "/rooms/list",
    responses(
        (status = 200, description = "Rooms", body = [RoomSchema]),
        (status = 404, description = "Room store missing", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["rooms"],
    operation_id = "listRooms"
)]
#[get("/rooms/list")]
pub async fn list_rooms(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Room>>> {
    let rooms = state.rooms_query.list_rooms().await?;
    Ok(web::Json(rooms))
}
