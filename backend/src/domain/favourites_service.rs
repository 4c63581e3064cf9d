//! Favourite recipes service.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::existence::{
    map_recipe_error, map_user_error, missing_user, require_recipe, require_user,
};
use crate::domain::ports::{FavouritesCommand, FavouritesQuery, RecipeRepository, UserRepository};
use crate::domain::{Error, RecipeSummary, UserChange};

/// Service implementing the favourites driving ports.
#[derive(Clone)]
pub struct FavouritesService<U, R> {
    users: Arc<U>,
    recipes: Arc<R>,
}

impl<U, R> FavouritesService<U, R> {
    pub fn new(users: Arc<U>, recipes: Arc<R>) -> Self {
        Self { users, recipes }
    }
}

#[async_trait]
impl<U, R> FavouritesCommand for FavouritesService<U, R>
where
    U: UserRepository,
    R: RecipeRepository,
{
    async fn toggle_favourite(&self, user_id: &str, recipe_id: &str) -> Result<bool, Error> {
        let user = require_user(self.users.as_ref(), user_id).await?;
        let recipe = require_recipe(self.recipes.as_ref(), recipe_id).await?;

        let favourite = self
            .users
            .apply(user.id(), UserChange::ToggleFavourite(recipe.id))
            .await
            .map_err(map_user_error)?
            .ok_or_else(|| missing_user(user_id))?;
        info!(user_id, recipe_id, favourite, "favourite toggled");
        Ok(favourite)
    }
}

#[async_trait]
impl<U, R> FavouritesQuery for FavouritesService<U, R>
where
    U: UserRepository,
    R: RecipeRepository,
{
    async fn retrieve_favourites(&self, user_id: &str) -> Result<Vec<RecipeSummary>, Error> {
        let user = require_user(self.users.as_ref(), user_id).await?;
        let recipes = self
            .recipes
            .find_by_ids(user.favourites())
            .await
            .map_err(map_recipe_error)?;
        Ok(recipes.iter().map(RecipeSummary::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Recipe, RecipeId, User, UserId};
    use crate::outbound::memory::{InMemoryRecipeRepository, InMemoryUserRepository};
    use rstest::rstest;

    fn recipe(name: &str) -> Recipe {
        Recipe {
            id: RecipeId::random(),
            name: name.into(),
            author: "Jordi".into(),
            description: "Catalan dessert".into(),
            time: 30,
            ingredients: Vec::new(),
        }
    }

    fn setup(
        recipes: Vec<Recipe>,
    ) -> (
        FavouritesService<InMemoryUserRepository, InMemoryRecipeRepository>,
        String,
    ) {
        let user = User::try_new(UserId::random(), "Ada", "Lovelace", "ada@example.com")
            .expect("valid user");
        let user_id = user.id().to_string();
        let service = FavouritesService::new(
            Arc::new(InMemoryUserRepository::with_users([user])),
            Arc::new(InMemoryRecipeRepository::with_recipes(recipes)),
        );
        (service, user_id)
    }

    #[rstest]
    #[tokio::test]
    async fn toggling_twice_restores_state() {
        let crema = recipe("Crema catalana");
        let (service, user_id) = setup(vec![crema.clone()]);
        let raw = crema.id.to_string();

        assert!(service.toggle_favourite(&user_id, &raw).await.expect("on"));
        assert_eq!(
            service.retrieve_favourites(&user_id).await.expect("list"),
            vec![RecipeSummary::from(&crema)]
        );
        assert!(!service.toggle_favourite(&user_id, &raw).await.expect("off"));
        assert!(
            service
                .retrieve_favourites(&user_id)
                .await
                .expect("list")
                .is_empty()
        );
    }

    #[rstest]
    #[tokio::test]
    async fn unknown_recipe_cannot_be_favourited() {
        let (service, user_id) = setup(Vec::new());
        let raw = RecipeId::random().to_string();

        let err = service
            .toggle_favourite(&user_id, &raw)
            .await
            .expect_err("missing recipe");
        assert_eq!(err.message(), format!("recipe with id {raw} does not exist"));
    }

    #[rstest]
    #[tokio::test]
    async fn user_removed_before_the_update_is_reported() {
        use crate::domain::ErrorClass;
        use crate::domain::ports::{MockRecipeRepository, MockUserRepository};

        let user = User::try_new(UserId::random(), "Ada", "Lovelace", "ada@example.com")
            .expect("valid user");
        let user_id = user.id().to_string();
        let crema = recipe("Crema catalana");
        let raw = crema.id.to_string();

        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .times(1)
            .return_once(move |_| Ok(Some(user)));
        users
            .expect_apply()
            .withf(|_, change| matches!(change, UserChange::ToggleFavourite(_)))
            .times(1)
            .return_once(|_, _| Ok(None));
        let mut recipes = MockRecipeRepository::new();
        recipes
            .expect_find_by_id()
            .times(1)
            .return_once(move |_| Ok(Some(crema)));

        let service = FavouritesService::new(Arc::new(users), Arc::new(recipes));
        let err = service
            .toggle_favourite(&user_id, &raw)
            .await
            .expect_err("user vanished");
        assert_eq!(err.class(), Some(ErrorClass::Unexistence));
        assert_eq!(
            err.message(),
            format!("user with id {user_id} does not exist")
        );
    }

    #[rstest]
    #[tokio::test]
    async fn favourites_keep_insertion_order() {
        let first = recipe("Crema catalana");
        let second = recipe("Flan");
        let (service, user_id) = setup(vec![first.clone(), second.clone()]);

        for id in [&second.id, &first.id] {
            service
                .toggle_favourite(&user_id, &id.to_string())
                .await
                .expect("toggle");
        }
        let names: Vec<String> = service
            .retrieve_favourites(&user_id)
            .await
            .expect("list")
            .into_iter()
            .map(|summary| summary.name)
            .collect();
        assert_eq!(names, ["Flan", "Crema catalana"]);
    }
}
