//! Weekly menu and grocery list handlers.
//!
//! ```text
//! PUT    /api/v1/users/{user_id}/menu/{day}/{recipe_id}
//! GET    /api/v1/users/{user_id}/menu/{day}
//! DELETE /api/v1/users/{user_id}/menu/{day}
//! GET    /api/v1/users/{user_id}/menu
//! DELETE /api/v1/users/{user_id}/menu
//! GET    /api/v1/users/{user_id}/grocery-list
//! ```

use actix_web::{HttpResponse, delete, get, put, web};

use crate::inbound::http::ApiResult;
use crate::inbound::http::dto::{GroceryItemResponse, MenuDayResponse, ToggleResponse};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Plan the recipe on `day`, or unplan it if already planned.
#[utoipa::path(
    put,
    path = "/api/v1/users/{user_id}/menu/{day}/{recipe_id}",
    params(
        ("user_id" = String, Path, description = "User identifier"),
        ("day" = String, Path, description = "Weekday name, e.g. `monday`"),
        ("recipe_id" = String, Path, description = "Recipe identifier")
    ),
    responses(
        (status = 200, description = "`active` is true when the recipe is now planned", body = ToggleResponse),
        (status = 400, description = "Unknown weekday", body = ErrorSchema),
        (status = 404, description = "Unknown user or recipe", body = ErrorSchema)
    ),
    tags = ["menu"],
    operation_id = "toggleMenuDay"
)]
#[put("/users/{user_id}/menu/{day}/{recipe_id}")]
pub async fn toggle_menu_day(
    state: web::Data<HttpState>,
    path: web::Path<(String, String, String)>,
) -> ApiResult<web::Json<ToggleResponse>> {
    let (user_id, day, recipe_id) = path.into_inner();
    let active = state
        .menu
        .toggle_menu_day(&user_id, &recipe_id, &day)
        .await?;
    Ok(web::Json(ToggleResponse { active }))
}

#[utoipa::path(
    get,
    path = "/api/v1/users/{user_id}/menu/{day}",
    params(
        ("user_id" = String, Path, description = "User identifier"),
        ("day" = String, Path, description = "Weekday name")
    ),
    responses(
        (status = 200, description = "Recipes planned that day", body = MenuDayResponse),
        (status = 400, description = "Unknown weekday", body = ErrorSchema),
        (status = 404, description = "Unknown user", body = ErrorSchema)
    ),
    tags = ["menu"],
    operation_id = "getMenuDay"
)]
#[get("/users/{user_id}/menu/{day}")]
pub async fn get_menu_day(
    state: web::Data<HttpState>,
    path: web::Path<(String, String)>,
) -> ApiResult<web::Json<MenuDayResponse>> {
    let (user_id, day) = path.into_inner();
    let menu_day = state.menu_query.retrieve_day(&user_id, &day).await?;
    Ok(web::Json(menu_day.into()))
}

#[utoipa::path(
    delete,
    path = "/api/v1/users/{user_id}/menu/{day}",
    params(
        ("user_id" = String, Path, description = "User identifier"),
        ("day" = String, Path, description = "Weekday name")
    ),
    responses(
        (status = 204, description = "Day cleared"),
        (status = 400, description = "Unknown weekday", body = ErrorSchema),
        (status = 404, description = "Unknown user", body = ErrorSchema)
    ),
    tags = ["menu"],
    operation_id = "clearMenuDay"
)]
#[delete("/users/{user_id}/menu/{day}")]
pub async fn clear_menu_day(
    state: web::Data<HttpState>,
    path: web::Path<(String, String)>,
) -> ApiResult<HttpResponse> {
    let (user_id, day) = path.into_inner();
    state.menu.delete_day_menu(&user_id, &day).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Every planned day, Monday first; empty days are omitted.
#[utoipa::path(
    get,
    path = "/api/v1/users/{user_id}/menu",
    params(("user_id" = String, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Planned week", body = [MenuDayResponse]),
        (status = 404, description = "Unknown user", body = ErrorSchema)
    ),
    tags = ["menu"],
    operation_id = "getMenu"
)]
#[get("/users/{user_id}/menu")]
pub async fn get_menu(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<MenuDayResponse>>> {
    let week = state.menu_query.retrieve_menu(&path.into_inner()).await?;
    Ok(web::Json(week.into_iter().map(MenuDayResponse::from).collect()))
}

#[utoipa::path(
    delete,
    path = "/api/v1/users/{user_id}/menu",
    params(("user_id" = String, Path, description = "User identifier")),
    responses(
        (status = 204, description = "Week cleared"),
        (status = 404, description = "Unknown user", body = ErrorSchema)
    ),
    tags = ["menu"],
    operation_id = "clearMenu"
)]
#[delete("/users/{user_id}/menu")]
pub async fn clear_menu(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    state.menu.delete_timeline_menu(&path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Ingredient totals over every planned meal.
#[utoipa::path(
    get,
    path = "/api/v1/users/{user_id}/grocery-list",
    params(("user_id" = String, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Grocery list ordered by ingredient name", body = [GroceryItemResponse]),
        (status = 404, description = "Unknown user or empty menu", body = ErrorSchema)
    ),
    tags = ["menu"],
    operation_id = "getGroceryList"
)]
#[get("/users/{user_id}/grocery-list")]
pub async fn get_grocery_list(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<GroceryItemResponse>>> {
    let items = state.menu_query.grocery_list(&path.into_inner()).await?;
    Ok(web::Json(
        items.into_iter().map(GroceryItemResponse::from).collect(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbound::http::test_utils::{Seed, seeded_app};
    use actix_web::http::StatusCode;
    use actix_web::test;
    use rstest::rstest;
    use serde_json::Value;

    #[rstest]
    #[actix_web::test]
    async fn plans_and_lists_groceries() {
        let seed = Seed::kitchen();
        let app = test::init_service(seeded_app(&seed)).await;
        for day in ["monday", "Thursday"] {
            let request = test::TestRequest::put()
                .uri(&format!(
                    "/api/v1/users/{}/menu/{day}/{}",
                    seed.maria, seed.paella
                ))
                .to_request();
            let toggled: ToggleResponse = test::call_and_read_body_json(&app, request).await;
            assert!(toggled.active);
        }

        let week: Vec<MenuDayResponse> = test::call_and_read_body_json(
            &app,
            test::TestRequest::get()
                .uri(&format!("/api/v1/users/{}/menu", seed.maria))
                .to_request(),
        )
        .await;
        let days: Vec<_> = week.iter().map(|menu_day| menu_day.day.as_str()).collect();
        assert_eq!(days, vec!["monday", "thursday"]);

        let groceries: Vec<GroceryItemResponse> = test::call_and_read_body_json(
            &app,
            test::TestRequest::get()
                .uri(&format!("/api/v1/users/{}/grocery-list", seed.maria))
                .to_request(),
        )
        .await;
        let rice = groceries
            .iter()
            .find(|item| item.name == "Rice")
            .expect("rice listed");
        assert_eq!(rice.quantity, 4.0);
    }

    #[rstest]
    #[actix_web::test]
    async fn clearing_a_day_empties_it() {
        let seed = Seed::kitchen();
        let app = test::init_service(seeded_app(&seed)).await;
        let plan = test::TestRequest::put()
            .uri(&format!(
                "/api/v1/users/{}/menu/friday/{}",
                seed.maria, seed.paella
            ))
            .to_request();
        test::call_service(&app, plan).await;

        let cleared = test::call_service(
            &app,
            test::TestRequest::delete()
                .uri(&format!("/api/v1/users/{}/menu/friday", seed.maria))
                .to_request(),
        )
        .await;
        assert_eq!(cleared.status(), StatusCode::NO_CONTENT);

        let day: MenuDayResponse = test::call_and_read_body_json(
            &app,
            test::TestRequest::get()
                .uri(&format!("/api/v1/users/{}/menu/friday", seed.maria))
                .to_request(),
        )
        .await;
        assert!(day.recipes.is_empty());
    }

    #[rstest]
    #[actix_web::test]
    async fn rejects_unknown_weekday() {
        let seed = Seed::kitchen();
        let app = test::init_service(seeded_app(&seed)).await;
        let request = test::TestRequest::get()
            .uri(&format!("/api/v1/users/{}/menu/someday", seed.maria))
            .to_request();

        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(response).await;
        assert_eq!(body["message"], "someday is not a valid weekday");
    }

    #[rstest]
    #[actix_web::test]
    async fn empty_menu_has_no_grocery_list() {
        let seed = Seed::kitchen();
        let app = test::init_service(seeded_app(&seed)).await;
        let request = test::TestRequest::get()
            .uri(&format!("/api/v1/users/{}/grocery-list", seed.maria))
            .to_request();

        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
