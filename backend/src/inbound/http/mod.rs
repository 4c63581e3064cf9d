//! HTTP inbound adapter exposing the REST endpoints.

pub mod dto;
pub mod error;
pub mod favourites;
pub mod health;
pub mod ingredients;
pub mod menu;
pub mod recipes;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;

use actix_web::web;

pub use error::ApiResult;

/// Register every `/api/v1` handler together with JSON and query extractor
/// configs that report failures in the domain error envelope.
///
/// Search routes are registered before `/users/{user_id}/recipes/{recipe_id}`
/// so `search` is never captured as a recipe id.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use cookbook::inbound::http::configure_api;
///
/// let _app = App::new().service(web::scope("/api/v1").configure(configure_api));
/// ```
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(error::query_error_handler))
        .service(recipes::search_recipes)
        .service(recipes::search_user_recipes)
        .service(recipes::create_recipe)
        .service(recipes::recipe_ideas)
        .service(recipes::get_recipe)
        .service(recipes::delete_recipe)
        .service(ingredients::create_ingredient)
        .service(ingredients::list_ingredients)
        .service(favourites::toggle_favourite)
        .service(favourites::list_favourites)
        .service(menu::toggle_menu_day)
        .service(menu::get_menu_day)
        .service(menu::clear_menu_day)
        .service(menu::get_menu)
        .service(menu::clear_menu)
        .service(menu::get_grocery_list)
        .service(users::get_user);
}
