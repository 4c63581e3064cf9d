//! Ingredient catalogue handlers.
//!
//! ```text
//! POST /api/v1/ingredients {"name":"Saffron"}
//! GET  /api/v1/ingredients
//! ```

use actix_web::{HttpResponse, get, post, web};

use crate::inbound::http::ApiResult;
use crate::inbound::http::dto::{CreateIngredientRequest, IngredientResponse};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Add an ingredient to the shared catalogue.
#[utoipa::path(
    post,
    path = "/api/v1/ingredients",
    request_body = CreateIngredientRequest,
    responses(
        (status = 201, description = "Ingredient created", body = IngredientResponse),
        (status = 400, description = "Invalid name", body = ErrorSchema),
        (status = 409, description = "Name already taken", body = ErrorSchema)
    ),
    tags = ["ingredients"],
    operation_id = "createIngredient"
)]
#[post("/ingredients")]
pub async fn create_ingredient(
    state: web::Data<HttpState>,
    payload: web::Json<CreateIngredientRequest>,
) -> ApiResult<HttpResponse> {
    let ingredient = state.ingredients.create_ingredient(&payload.name).await?;
    Ok(HttpResponse::Created().json(IngredientResponse::from(ingredient)))
}

#[utoipa::path(
    get,
    path = "/api/v1/ingredients",
    responses(
        (status = 200, description = "Every ingredient ordered by name", body = [IngredientResponse]),
        (status = 503, description = "Storage unavailable", body = ErrorSchema)
    ),
    tags = ["ingredients"],
    operation_id = "listIngredients"
)]
#[get("/ingredients")]
pub async fn list_ingredients(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<IngredientResponse>>> {
    let ingredients = state.ingredients_query.list_ingredients().await?;
    Ok(web::Json(
        ingredients.into_iter().map(IngredientResponse::from).collect(),
    ))
}
