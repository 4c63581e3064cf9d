//! Tests for the recipe search service.

use std::sync::Arc;

use rstest::{fixture, rstest};
use serde_json::{Value, json};

use super::*;
use crate::domain::ports::{MockRecipeRepository, MockUserRepository, RecipePersistenceError};
use crate::domain::{
    ErrorClass, ErrorCode, IngredientId, Recipe, RecipeId, RecipeIngredient, User, UserId,
};
use crate::outbound::memory::{InMemoryRecipeRepository, InMemoryUserRepository};

type MemoryService = RecipeSearchService<InMemoryUserRepository, InMemoryRecipeRepository>;

struct World {
    service: MemoryService,
    user: User,
    paella: Recipe,
}

fn recipe(name: &str, author: &str) -> Recipe {
    Recipe {
        id: RecipeId::random(),
        name: name.into(),
        author: author.into(),
        description: "Spanish rice dish".into(),
        time: 45,
        ingredients: vec![RecipeIngredient {
            ingredient: IngredientId::random(),
            quantity: 2.0,
        }],
    }
}

#[fixture]
fn world() -> World {
    let paella = recipe("Paella", "Maria");
    let foreign = recipe("Tortilla", "Maria");
    let liked = recipe("Crema catalana", "Jordi");
    let mut user = User::try_new(UserId::random(), "Ada", "Lovelace", "ada@example.com")
        .expect("valid user");
    user.add_recipe(paella.id);
    user.toggle_favourite(liked.id);

    let users = InMemoryUserRepository::with_users([user.clone()]);
    let recipes = InMemoryRecipeRepository::with_recipes([paella.clone(), foreign, liked]);
    World {
        service: RecipeSearchService::new(Arc::new(users), Arc::new(recipes)),
        user,
        paella,
    }
}

#[rstest]
#[case::author("Maria")]
#[case::name("Paella")]
#[tokio::test]
async fn exact_name_or_author_returns_the_owned_recipe(world: World, #[case] query: &str) {
    let found = world
        .service
        .search_typed(query, &world.user.id().to_string())
        .await
        .expect("match");
    assert_eq!(found, vec![RecipeSummary::from(&world.paella)]);
}

#[rstest]
#[tokio::test]
async fn unmatched_query_is_an_unexistence_error(world: World) {
    let err = world
        .service
        .search_typed("Risotto", &world.user.id().to_string())
        .await
        .expect_err("no match");
    assert_eq!(err.message(), "Risotto is not found like recipe or author");
    assert_eq!(err.class(), Some(ErrorClass::Unexistence));
}

#[rstest]
#[tokio::test]
async fn unknown_user_short_circuits(world: World) {
    let id = UserId::random().to_string();
    let err = world
        .service
        .search_typed("Maria", &id)
        .await
        .expect_err("no user");
    assert_eq!(err.message(), format!("user with id {id} does not exist"));
}

#[rstest]
#[tokio::test]
async fn favourites_are_searchable_when_configured(world: World) {
    let user_id = world.user.id().to_string();
    let owned_only = world
        .service
        .search_typed("Jordi", &user_id)
        .await
        .expect_err("favourite is not owned");
    assert_eq!(owned_only.code(), ErrorCode::NotFound);

    let widened = world
        .service
        .with_visibility(RecipeVisibility::OwnedAndFavourites);
    let found = widened
        .search_typed("Jordi", &user_id)
        .await
        .expect("favourite is visible");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Crema catalana");
}

#[rstest]
#[tokio::test]
async fn repeated_searches_are_idempotent(world: World) {
    let user_id = world.user.id().to_string();
    let first = world.service.search_typed("paella", &user_id).await;
    let second = world.service.search_typed("paella", &user_id).await;
    assert_eq!(first, second);
}

#[rstest]
#[case::undefined(None, Some(json!("Maria")), "undefined is not a string")]
#[case::number(Some(json!(1)), Some(json!("Maria")), "1 is not a string")]
#[case::null(Some(json!(null)), Some(json!("Maria")), "null is not a string")]
#[case::boolean(Some(json!(true)), None, "true is not a string")]
#[case::bad_query(Some(json!("u")), Some(json!(false)), "false is not a string")]
fn untyped_arguments_fail_before_any_lookup(
    #[case] user_id: Option<Value>,
    #[case] query: Option<Value>,
    #[case] message: &str,
) {
    let mut users = MockUserRepository::new();
    users.expect_find_by_id().never();
    let mut recipes = MockRecipeRepository::new();
    recipes.expect_find_by_name_or_author().never();
    let service = RecipeSearchService::new(Arc::new(users), Arc::new(recipes));

    let Err(err) = service.search(query.as_ref(), user_id.as_ref()) else {
        panic!("expected a synchronous argument error");
    };
    assert_eq!(err.message(), message);
    assert_eq!(err.class(), Some(ErrorClass::ArgumentType));
}

#[rstest]
#[tokio::test]
async fn untyped_search_resolves_like_typed_search(world: World) {
    let user_id = json!(world.user.id().to_string());
    let found = world
        .service
        .search(Some(&json!("Maria")), Some(&user_id))
        .expect("arguments are strings")
        .await
        .expect("match");
    assert_eq!(found, vec![RecipeSummary::from(&world.paella)]);
}

#[rstest]
#[case(RecipePersistenceError::connection("refused"), ErrorCode::ServiceUnavailable)]
#[case(RecipePersistenceError::query("syntax"), ErrorCode::InternalError)]
#[tokio::test]
async fn recipe_storage_failures_propagate(
    #[case] failure: RecipePersistenceError,
    #[case] expected: ErrorCode,
) {
    let user = User::try_new(UserId::random(), "Ada", "Lovelace", "ada@example.com")
        .expect("valid user");
    let user_id = user.id().to_string();
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_id()
        .times(1)
        .return_once(move |_| Ok(Some(user)));
    let mut recipes = MockRecipeRepository::new();
    recipes
        .expect_find_by_name_or_author()
        .times(1)
        .return_once(move |_, _, _| Err(failure));
    let service = RecipeSearchService::new(Arc::new(users), Arc::new(recipes));

    let err = service
        .search_typed("Maria", &user_id)
        .await
        .expect_err("storage failure");
    assert_eq!(err.code(), expected);
}
