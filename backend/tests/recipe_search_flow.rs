//! End-to-end search over recipes created through the HTTP API.

use actix_http::Request;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use rstest::rstest;
use serde_json::{Value, json};

use cookbook::domain::RecipeVisibility;
use cookbook::middleware::trace::TRACE_ID_HEADER;

mod support;

use support::{app, cook, empty_state, state_for};

async fn create_ingredient<S>(app: &S, name: &str) -> String
where
    S: Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let req = actix_test::TestRequest::post()
        .uri("/api/v1/ingredients")
        .set_json(json!({ "name": name }))
        .to_request();
    let body: Value = actix_test::call_and_read_body_json(app, req).await;
    body["id"].as_str().expect("ingredient id").to_owned()
}

#[actix_web::test]
async fn created_recipe_is_found_by_name_and_author() {
    let maria = cook("Maria", "maria@example.com");
    let user_id = maria.id().to_string();
    let app = actix_test::init_service(app(state_for([maria], RecipeVisibility::Owned))).await;

    let rice = create_ingredient(&app, "Rice").await;
    let req = actix_test::TestRequest::post()
        .uri(&format!("/api/v1/users/{user_id}/recipes"))
        .set_json(json!({
            "name": "Paella",
            "author": "Maria",
            "description": "Rice with saffron",
            "time": 45,
            "ingredients": [{ "ingredient": rice, "quantity": 2.0 }]
        }))
        .to_request();
    let res = actix_test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::CREATED);

    for query in ["Paella", "Maria", "  maria "] {
        let req = actix_test::TestRequest::post()
            .uri("/api/v1/recipes/search")
            .set_json(json!({ "query": query, "userId": user_id }))
            .to_request();
        let found: Value = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(found.as_array().map(Vec::len), Some(1), "query {query:?}");
        assert_eq!(found[0]["name"], "Paella");
        assert_eq!(found[0]["ingredients"][0]["ingredient"], rice.as_str());
    }
}

#[actix_web::test]
async fn repeated_searches_return_the_same_result() {
    let maria = cook("Maria", "maria@example.com");
    let user_id = maria.id().to_string();
    let app = actix_test::init_service(app(state_for([maria], RecipeVisibility::Owned))).await;
    let rice = create_ingredient(&app, "Rice").await;
    let req = actix_test::TestRequest::post()
        .uri(&format!("/api/v1/users/{user_id}/recipes"))
        .set_json(json!({
            "name": "Paella",
            "author": "Maria",
            "description": "Rice with saffron",
            "time": 30,
            "ingredients": [{ "ingredient": rice, "quantity": 1.0 }]
        }))
        .to_request();
    let res = actix_test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::CREATED);

    let mut bodies = Vec::new();
    for _ in 0..2 {
        let req = actix_test::TestRequest::get()
            .uri(&format!("/api/v1/users/{user_id}/recipes/search?q=Paella"))
            .to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(res).await;
        bodies.push(body);
    }
    assert_eq!(bodies[0].as_array().map(Vec::len), Some(1));
    assert_eq!(bodies[0], bodies[1]);
}

#[actix_web::test]
async fn unmatched_query_is_reported_with_trace_id() {
    let maria = cook("Maria", "maria@example.com");
    let user_id = maria.id().to_string();
    let app = actix_test::init_service(app(state_for([maria], RecipeVisibility::Owned))).await;

    let req = actix_test::TestRequest::post()
        .uri("/api/v1/recipes/search")
        .set_json(json!({ "query": "Risotto", "userId": user_id }))
        .to_request();
    let res = actix_test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let header = res
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["message"], "Risotto is not found like recipe or author");
    assert_eq!(body["details"]["code"], "unexistence");
    assert_eq!(body["traceId"].as_str().map(str::to_owned), header);
}

#[rstest]
#[case(json!({ "query": "Paella", "userId": 1 }), "1 is not a string")]
#[case(json!({ "query": null, "userId": "x" }), "null is not a string")]
#[case(json!({ "userId": "x" }), "undefined is not a string")]
#[case(json!({ "query": ["a", null], "userId": "x" }), "a, is not a string")]
#[actix_web::test]
async fn non_string_arguments_are_rejected(#[case] body: Value, #[case] message: &str) {
    let app = actix_test::init_service(app(empty_state())).await;

    let req = actix_test::TestRequest::post()
        .uri("/api/v1/recipes/search")
        .set_json(body)
        .to_request();
    let res = actix_test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["message"], message);
    assert_eq!(body["details"]["code"], "argument_type");
}

#[actix_web::test]
async fn unknown_user_is_reported_before_matching() {
    let app = actix_test::init_service(app(empty_state())).await;

    let req = actix_test::TestRequest::post()
        .uri("/api/v1/recipes/search")
        .set_json(json!({ "query": "Paella", "userId": "ghost" }))
        .to_request();
    let res = actix_test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["message"], "user with id ghost does not exist");
}

#[rstest]
#[case(RecipeVisibility::Owned, StatusCode::NOT_FOUND)]
#[case(RecipeVisibility::OwnedAndFavourites, StatusCode::OK)]
#[actix_web::test]
async fn favourites_join_the_search_scope_when_configured(
    #[case] visibility: RecipeVisibility,
    #[case] expected: StatusCode,
) {
    let maria = cook("Maria", "maria@example.com");
    let ana = cook("Ana", "ana@example.com");
    let (maria_id, ana_id) = (maria.id().to_string(), ana.id().to_string());
    let app = actix_test::init_service(app(state_for([maria, ana], visibility))).await;
    let tomato = create_ingredient(&app, "Tomato").await;

    let req = actix_test::TestRequest::post()
        .uri(&format!("/api/v1/users/{ana_id}/recipes"))
        .set_json(json!({
            "name": "Gazpacho",
            "author": "Ana",
            "description": "Cold soup",
            "time": 15,
            "ingredients": [{ "ingredient": tomato, "quantity": 4.0 }]
        }))
        .to_request();
    let created: Value = actix_test::call_and_read_body_json(&app, req).await;
    let gazpacho = created["id"].as_str().expect("recipe id");

    let req = actix_test::TestRequest::put()
        .uri(&format!("/api/v1/users/{maria_id}/favourites/{gazpacho}"))
        .to_request();
    let toggled: Value = actix_test::call_and_read_body_json(&app, req).await;
    assert_eq!(toggled["active"], true);

    let req = actix_test::TestRequest::get()
        .uri(&format!("/api/v1/users/{maria_id}/recipes/search?q=gazpacho"))
        .to_request();
    let res = actix_test::call_service(&app, req).await;
    assert_eq!(res.status(), expected);
}
