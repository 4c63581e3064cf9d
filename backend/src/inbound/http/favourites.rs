//! Favourite recipe handlers.
//!
//! ```text
//! PUT /api/v1/users/{user_id}/favourites/{recipe_id}
//! GET /api/v1/users/{user_id}/favourites
//! ```

use actix_web::{get, put, web};

use crate::inbound::http::ApiResult;
use crate::inbound::http::dto::{RecipeSummaryResponse, ToggleResponse, summaries};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Add the recipe to the user's favourites, or remove it if present.
#[utoipa::path(
    put,
    path = "/api/v1/users/{user_id}/favourites/{recipe_id}",
    params(
        ("user_id" = String, Path, description = "User identifier"),
        ("recipe_id" = String, Path, description = "Recipe identifier")
    ),
    responses(
        (status = 200, description = "`active` is true when the recipe is now a favourite", body = ToggleResponse),
        (status = 404, description = "Unknown user or recipe", body = ErrorSchema)
    ),
    tags = ["favourites"],
    operation_id = "toggleFavourite"
)]
#[put("/users/{user_id}/favourites/{recipe_id}")]
pub async fn toggle_favourite(
    state: web::Data<HttpState>,
    path: web::Path<(String, String)>,
) -> ApiResult<web::Json<ToggleResponse>> {
    let (user_id, recipe_id) = path.into_inner();
    let active = state
        .favourites
        .toggle_favourite(&user_id, &recipe_id)
        .await?;
    Ok(web::Json(ToggleResponse { active }))
}

#[utoipa::path(
    get,
    path = "/api/v1/users/{user_id}/favourites",
    params(("user_id" = String, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Favourite recipes in the order added", body = [RecipeSummaryResponse]),
        (status = 404, description = "Unknown user", body = ErrorSchema)
    ),
    tags = ["favourites"],
    operation_id = "listFavourites"
)]
#[get("/users/{user_id}/favourites")]
pub async fn list_favourites(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<RecipeSummaryResponse>>> {
    let favourites = state
        .favourites_query
        .retrieve_favourites(&path.into_inner())
        .await?;
    Ok(web::Json(summaries(favourites)))
}
