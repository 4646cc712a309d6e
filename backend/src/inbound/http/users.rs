//! Chat participant handlers.
//!
//! ```text
//! GET /users/list
//! POST /users/create/{username}
//! ```

use actix_web::{get, post, web};

use crate::domain::{User, UserName};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, UserSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, name_error};

/// List known users, ordered by name.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use scoops_backend::inbound::http::users::list_users;
///
/// let _app = App::new().service(list_users);
/// ```
#[utoipa::path(
    get,
    path = "/users/list",
    responses(
        (status = 200, description = "Users", body = [UserSchema]),
        (status = 404, description = "User store missing", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users/list")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    let users = state.users_query.list_users().await?;
    Ok(web::Json(users))
}

/// Register a user.
#[utoipa::path(
    post,
    path = "/users/create/{username}",
    params(("username" = String, Path, description = "Unique user name")),
    responses(
        (status = 200, description = "Confirmation message", body = String, example = json!("alice added.")),
        (status = 400, description = "Blank user name", body = ErrorSchema),
        (status = 404, description = "User store missing", body = ErrorSchema),
        (status = 406, description = "User already exists", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users/create/{username}")]
pub async fn create_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<String>> {
    let name = UserName::new(path.into_inner())
        .map_err(|err| name_error(FieldName::new("username"), err))?;
    let name = state.users.create_user(name).await?;
    Ok(web::Json(format!("{name} added.")))
}
