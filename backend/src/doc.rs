//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every REST endpoint of the inbound layer together
//! with the error envelope and DTO schemas. The document is served by Swagger
//! UI in debug builds and exported with `cargo run --bin openapi-dump`.

use crate::inbound::http::dto::{
    CreateIngredientRequest, CreateRecipeRequest, GroceryItemResponse, IngredientLineRequest,
    IngredientLineResponse, IngredientResponse, MenuDayResponse, RecipeIdeasRequest,
    RecipeResponse, RecipeSummaryResponse, ToggleResponse, UserProfileResponse,
};
use crate::inbound::http::recipes::SearchRequest;
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Cookbook backend API",
        description = "Recipe collections, search, favourites and weekly menu planning."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::recipes::search_recipes,
        crate::inbound::http::recipes::search_user_recipes,
        crate::inbound::http::recipes::create_recipe,
        crate::inbound::http::recipes::recipe_ideas,
        crate::inbound::http::recipes::get_recipe,
        crate::inbound::http::recipes::delete_recipe,
        crate::inbound::http::ingredients::create_ingredient,
        crate::inbound::http::ingredients::list_ingredients,
        crate::inbound::http::favourites::toggle_favourite,
        crate::inbound::http::favourites::list_favourites,
        crate::inbound::http::menu::toggle_menu_day,
        crate::inbound::http::menu::get_menu_day,
        crate::inbound::http::menu::clear_menu_day,
        crate::inbound::http::menu::get_menu,
        crate::inbound::http::menu::clear_menu,
        crate::inbound::http::menu::get_grocery_list,
        crate::inbound::http::users::get_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        SearchRequest,
        RecipeSummaryResponse,
        RecipeResponse,
        IngredientLineResponse,
        IngredientLineRequest,
        CreateRecipeRequest,
        RecipeIdeasRequest,
        CreateIngredientRequest,
        IngredientResponse,
        UserProfileResponse,
        ToggleResponse,
        MenuDayResponse,
        GroceryItemResponse,
    )),
    tags(
        (name = "recipes", description = "Recipe search and user recipe collections"),
        (name = "ingredients", description = "Shared ingredient catalogue"),
        (name = "favourites", description = "Favourite recipes of a user"),
        (name = "menu", description = "Weekly menu planning and grocery lists"),
        (name = "users", description = "User profiles"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
