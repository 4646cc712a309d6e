//! Flavor catalogue handlers.
//!
//! ```text
//! GET /flavors
//! POST /flavors/create  (application/x-www-form-urlencoded)
//! ```

use actix_web::{get, post, web};
use serde::Deserialize;
use tracing::debug;

use crate::domain::{Flavor, FlavorDetails, FlavorName};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, FlavorSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, name_error};

/// Form body for `POST /flavors/create`.
///
/// Every field is required. `flavorPrice` must be a non-negative integer and
/// `flavorAvailability` must be `true` or `false`.
#[derive(Debug, Deserialize, serde::Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateFlavorForm {
    #[schema(example = "mint")]
    pub flavor_name: String,
    #[schema(example = "/img/mint.png")]
    pub flavor_image: String,
    pub flavor_description: String,
    pub flavor_nutrition: String,
    #[schema(example = 350)]
    pub flavor_price: u32,
    pub flavor_availability: bool,
}

impl TryFrom<CreateFlavorForm> for Flavor {
    type Error = crate::domain::Error;

    fn try_from(form: CreateFlavorForm) -> Result<Self, Self::Error> {
        let name = FlavorName::new(form.flavor_name)
            .map_err(|err| name_error(FieldName::new("flavorName"), err))?;
        Ok(Flavor::new(
            name,
            FlavorDetails {
                image: form.flavor_image,
                description: form.flavor_description,
                nutrition: form.flavor_nutrition,
                price: form.flavor_price,
                availability: form.flavor_availability,
            },
        ))
    }
}

/// List the flavor catalogue, ordered by name.
#[utoipa::path(
    get,
    path = "/flavors",
    responses(
        (status = 200, description = "Flavor catalogue", body = [FlavorSchema]),
        (status = 404, description = "Flavor store missing", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["flavors"],
    operation_id = "listFlavors"
)]
#[get("/flavors")]
pub async fn list_flavors(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Flavor>>> {
    let flavors = state.flavors_query.list_flavors().await?;
    Ok(web::Json(flavors))
}

/// Add a flavor to the catalogue.
#[utoipa::path(
    post,
    path = "/flavors/create",
    request_body(
        content = CreateFlavorForm,
        content_type = "application/x-www-form-urlencoded"
    ),
    responses(
        (status = 200, description = "Confirmation message", body = String, example = json!("mint added.")),
        (status = 400, description = "Missing or malformed form field", body = ErrorSchema),
        (status = 404, description = "Flavor store missing", body = ErrorSchema),
        (status = 406, description = "Flavor already exists", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["flavors"],
    operation_id = "createFlavor"
)]
#[post("/flavors/create")]
pub async fn create_flavor(
    state: web::Data<HttpState>,
    form: web::Form<CreateFlavorForm>,
) -> ApiResult<web::Json<String>> {
    let flavor = Flavor::try_from(form.into_inner())?;
    debug!(flavor = %flavor.name(), price = flavor.price(), "creating flavor");
    let name = state.flavors.create_flavor(flavor).await?;
    Ok(web::Json(format!("{name} added.")))
}
