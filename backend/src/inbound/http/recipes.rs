//! Recipe search and recipe collection handlers.
//!
//! ```text
//! POST   /api/v1/recipes/search {"query": "Maria", "userId": "<uuid>"}
//! GET    /api/v1/users/{user_id}/recipes/search?q=Paella
//! POST   /api/v1/users/{user_id}/recipes
//! POST   /api/v1/users/{user_id}/recipes/ideas
//! GET    /api/v1/users/{user_id}/recipes/{recipe_id}
//! DELETE /api/v1/users/{user_id}/recipes/{recipe_id}
//! ```

use actix_web::{HttpResponse, delete, get, post, web};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};

use crate::domain::Error;
use crate::domain::validation::literal;
use crate::inbound::http::ApiResult;
use crate::inbound::http::dto::{
    CreateRecipeRequest, RecipeIdeasRequest, RecipeResponse, RecipeSummaryResponse, summaries,
};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Keep an explicit `null` distinct from an absent field.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Untyped search body. Either field may hold any JSON value; only strings
/// are accepted by the search itself.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Object, example = "Maria")]
    pub query: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Object, example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub user_id: Option<Value>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchParams {
    /// Recipe name or author to look for.
    pub q: Option<String>,
}

/// Search the caller's visible recipes by name or author.
#[utoipa::path(
    post,
    path = "/api/v1/recipes/search",
    request_body = SearchRequest,
    responses(
        (status = 200, description = "Matching recipes", body = [RecipeSummaryResponse]),
        (status = 400, description = "An argument is not a string", body = ErrorSchema),
        (status = 404, description = "Unknown user or no match", body = ErrorSchema),
        (status = 503, description = "Storage unavailable", body = ErrorSchema)
    ),
    tags = ["recipes"],
    operation_id = "searchRecipes"
)]
#[post("/recipes/search")]
pub async fn search_recipes(
    state: web::Data<HttpState>,
    payload: web::Json<SearchRequest>,
) -> ApiResult<web::Json<Vec<RecipeSummaryResponse>>> {
    let SearchRequest { query, user_id } = payload.into_inner();
    let found = state.search.search(query.as_ref(), user_id.as_ref())?.await?;
    Ok(web::Json(summaries(found)))
}

/// Typed variant of the search with the user taken from the path.
#[utoipa::path(
    get,
    path = "/api/v1/users/{user_id}/recipes/search",
    params(("user_id" = String, Path, description = "User identifier"), SearchParams),
    responses(
        (status = 200, description = "Matching recipes", body = [RecipeSummaryResponse]),
        (status = 400, description = "Missing query", body = ErrorSchema),
        (status = 404, description = "Unknown user or no match", body = ErrorSchema)
    ),
    tags = ["recipes"],
    operation_id = "searchUserRecipes"
)]
#[get("/users/{user_id}/recipes/search")]
pub async fn search_user_recipes(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    params: web::Query<SearchParams>,
) -> ApiResult<web::Json<Vec<RecipeSummaryResponse>>> {
    let user_id = path.into_inner();
    let query = params
        .into_inner()
        .q
        .ok_or_else(|| Error::argument_type(literal(None)))?;
    let found = state.search.search_typed(&query, &user_id).await?;
    Ok(web::Json(summaries(found)))
}

/// Create a recipe in the user's collection.
#[utoipa::path(
    post,
    path = "/api/v1/users/{user_id}/recipes",
    params(("user_id" = String, Path, description = "User identifier")),
    request_body = CreateRecipeRequest,
    responses(
        (status = 201, description = "Recipe created", body = RecipeResponse),
        (status = 400, description = "Invalid recipe", body = ErrorSchema),
        (status = 404, description = "Unknown user or ingredient", body = ErrorSchema),
        (status = 409, description = "Recipe name already used", body = ErrorSchema)
    ),
    tags = ["recipes"],
    operation_id = "createRecipe"
)]
#[post("/users/{user_id}/recipes")]
pub async fn create_recipe(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<CreateRecipeRequest>,
) -> ApiResult<HttpResponse> {
    let user_id = path.into_inner();
    let recipe = state
        .recipes
        .create_recipe(&user_id, payload.into_inner().into())
        .await?;
    Ok(HttpResponse::Created().json(RecipeResponse::from(recipe)))
}

/// Recipes using every listed ingredient.
#[utoipa::path(
    post,
    path = "/api/v1/users/{user_id}/recipes/ideas",
    params(("user_id" = String, Path, description = "User identifier")),
    request_body = RecipeIdeasRequest,
    responses(
        (status = 200, description = "Recipe ideas", body = [RecipeSummaryResponse]),
        (status = 400, description = "Empty ingredient list", body = ErrorSchema),
        (status = 404, description = "Unknown user or ingredient, or no idea", body = ErrorSchema)
    ),
    tags = ["recipes"],
    operation_id = "recipeIdeas"
)]
#[post("/users/{user_id}/recipes/ideas")]
pub async fn recipe_ideas(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<RecipeIdeasRequest>,
) -> ApiResult<web::Json<Vec<RecipeSummaryResponse>>> {
    let user_id = path.into_inner();
    let ideas = state
        .recipes_query
        .recipe_ideas(&user_id, &payload.ingredient_ids)
        .await?;
    Ok(web::Json(summaries(ideas)))
}

#[utoipa::path(
    get,
    path = "/api/v1/users/{user_id}/recipes/{recipe_id}",
    params(
        ("user_id" = String, Path, description = "User identifier"),
        ("recipe_id" = String, Path, description = "Recipe identifier")
    ),
    responses(
        (status = 200, description = "Recipe", body = RecipeResponse),
        (status = 404, description = "Unknown user or recipe", body = ErrorSchema)
    ),
    tags = ["recipes"],
    operation_id = "getRecipe"
)]
#[get("/users/{user_id}/recipes/{recipe_id}")]
pub async fn get_recipe(
    state: web::Data<HttpState>,
    path: web::Path<(String, String)>,
) -> ApiResult<web::Json<RecipeResponse>> {
    let (user_id, recipe_id) = path.into_inner();
    let recipe = state
        .recipes_query
        .retrieve_recipe(&user_id, &recipe_id)
        .await?;
    Ok(web::Json(recipe.into()))
}

/// Delete an owned recipe together with its favourite and menu entries.
#[utoipa::path(
    delete,
    path = "/api/v1/users/{user_id}/recipes/{recipe_id}",
    params(
        ("user_id" = String, Path, description = "User identifier"),
        ("recipe_id" = String, Path, description = "Recipe identifier")
    ),
    responses(
        (status = 204, description = "Recipe deleted"),
        (status = 404, description = "Unknown user or recipe not owned", body = ErrorSchema)
    ),
    tags = ["recipes"],
    operation_id = "deleteRecipe"
)]
#[delete("/users/{user_id}/recipes/{recipe_id}")]
pub async fn delete_recipe(
    state: web::Data<HttpState>,
    path: web::Path<(String, String)>,
) -> ApiResult<HttpResponse> {
    let (user_id, recipe_id) = path.into_inner();
    state.recipes.delete_recipe(&user_id, &recipe_id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "recipes_tests.rs"]
mod tests;
