//! Existence checks shared by the recipe services.
//!
//! Every user-scoped operation starts by resolving the user; operations that
//! reference recipes or ingredients resolve those next. A raw identifier that
//! does not parse is reported with the same unexistence message as one that
//! parses but is unknown.

use std::collections::HashSet;

use tracing::debug;

use super::ports::{
    IngredientPersistenceError, IngredientRepository, RecipePersistenceError, RecipeRepository,
    UserPersistenceError, UserRepository,
};
use super::{Error, IngredientId, Recipe, RecipeId, RecipeVisibility, User, UserId};

pub(crate) fn missing_user(raw_id: &str) -> Error {
    Error::unexistence(format!("user with id {raw_id} does not exist"))
}

pub(crate) fn missing_recipe(raw_id: &str) -> Error {
    Error::unexistence(format!("recipe with id {raw_id} does not exist"))
}

pub(crate) fn missing_ingredient(raw_id: &str) -> Error {
    Error::unexistence(format!("ingredient with id {raw_id} does not exist"))
}

pub(crate) fn map_user_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserPersistenceError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
    }
}

pub(crate) fn map_recipe_error(error: RecipePersistenceError) -> Error {
    match error {
        RecipePersistenceError::Connection { message } => {
            Error::service_unavailable(format!("recipe repository unavailable: {message}"))
        }
        RecipePersistenceError::Query { message } => {
            Error::internal(format!("recipe repository error: {message}"))
        }
    }
}

pub(crate) fn map_ingredient_error(error: IngredientPersistenceError) -> Error {
    match error {
        IngredientPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("ingredient repository unavailable: {message}"))
        }
        IngredientPersistenceError::Query { message } => {
            Error::internal(format!("ingredient repository error: {message}"))
        }
        IngredientPersistenceError::Duplicate { name } => {
            Error::duplicity(format!("ingredient {name} already exists"))
        }
    }
}

/// Resolve a user or fail with `user with id <raw_id> does not exist`.
///
/// This is the existence oracle every user-scoped operation goes through.
pub async fn require_user<U>(users: &U, raw_id: &str) -> Result<User, Error>
where
    U: UserRepository + ?Sized,
{
    let Ok(id) = UserId::new(raw_id) else {
        debug!(user_id = raw_id, "user id does not parse");
        return Err(missing_user(raw_id));
    };
    users
        .find_by_id(&id)
        .await
        .map_err(map_user_error)?
        .ok_or_else(|| missing_user(raw_id))
}

/// Resolve a recipe that must exist, regardless of who can see it.
pub async fn require_recipe<R>(recipes: &R, raw_id: &str) -> Result<Recipe, Error>
where
    R: RecipeRepository + ?Sized,
{
    let Ok(id) = RecipeId::new(raw_id) else {
        return Err(missing_recipe(raw_id));
    };
    recipes
        .find_by_id(&id)
        .await
        .map_err(map_recipe_error)?
        .ok_or_else(|| missing_recipe(raw_id))
}

/// Resolve a recipe that must be visible to `user`.
///
/// Invisible recipes are reported as missing so their existence is not
/// leaked.
pub async fn require_visible_recipe<R>(
    recipes: &R,
    user: &User,
    visibility: RecipeVisibility,
    raw_id: &str,
) -> Result<Recipe, Error>
where
    R: RecipeRepository + ?Sized,
{
    let Ok(id) = RecipeId::new(raw_id) else {
        return Err(missing_recipe(raw_id));
    };
    if !visibility.is_visible(user, &id) {
        return Err(missing_recipe(raw_id));
    }
    recipes
        .find_by_id(&id)
        .await
        .map_err(map_recipe_error)?
        .ok_or_else(|| missing_recipe(raw_id))
}

/// Parse and look up ingredient identifiers, keeping their order.
///
/// Fails on the first identifier that does not parse or is not stored.
pub async fn resolve_ingredients<I>(
    ingredients: &I,
    raw_ids: &[String],
) -> Result<Vec<IngredientId>, Error>
where
    I: IngredientRepository + ?Sized,
{
    let mut parsed = Vec::with_capacity(raw_ids.len());
    for raw in raw_ids {
        let id = IngredientId::new(raw).map_err(|_| missing_ingredient(raw))?;
        parsed.push(id);
    }

    let mut unique = parsed.clone();
    unique.sort_unstable();
    unique.dedup();
    let known: HashSet<IngredientId> = ingredients
        .find_by_ids(&unique)
        .await
        .map_err(map_ingredient_error)?
        .into_iter()
        .map(|ingredient| ingredient.id)
        .collect();

    if let Some((raw, _)) = raw_ids
        .iter()
        .zip(&parsed)
        .find(|(_, id)| !known.contains(id))
    {
        return Err(missing_ingredient(raw));
    }
    Ok(parsed)
}
