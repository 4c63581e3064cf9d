//! Recipe collection service.
//!
//! Implements creation, retrieval and deletion of a user's recipes, recipe
//! ideas by ingredient, and the user profile read model. Every operation
//! resolves the user first.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::domain::existence::{
    map_recipe_error, map_user_error, missing_recipe, missing_user, require_user,
    require_visible_recipe, resolve_ingredients,
};
use crate::domain::ports::{
    IngredientRepository, RecipeCatalogueCommand, RecipeCatalogueQuery, RecipeRepository,
    UserRepository,
};
use crate::domain::recipe_matching::normalize;
use crate::domain::{
    Error, Recipe, RecipeDraft, RecipeId, RecipeSummary, RecipeVisibility, User, UserChange,
    UserProfile,
};

/// Service implementing the recipe catalogue driving ports.
#[derive(Clone)]
pub struct RecipeCatalogueService<U, R, I> {
    users: Arc<U>,
    recipes: Arc<R>,
    ingredients: Arc<I>,
    visibility: RecipeVisibility,
}

impl<U, R, I> RecipeCatalogueService<U, R, I> {
    pub fn new(users: Arc<U>, recipes: Arc<R>, ingredients: Arc<I>) -> Self {
        Self {
            users,
            recipes,
            ingredients,
            visibility: RecipeVisibility::default(),
        }
    }

    #[must_use]
    pub fn with_visibility(mut self, visibility: RecipeVisibility) -> Self {
        self.visibility = visibility;
        self
    }
}

impl<U, R, I> RecipeCatalogueService<U, R, I>
where
    U: UserRepository,
    R: RecipeRepository,
    I: IngredientRepository,
{
    async fn ensure_unique_name(&self, user: &User, name: &str) -> Result<(), Error> {
        let folded = normalize(name);
        let owned = self
            .recipes
            .find_by_ids(user.recipes())
            .await
            .map_err(map_recipe_error)?;
        if owned.iter().any(|recipe| normalize(&recipe.name) == folded) {
            return Err(Error::duplicity(format!(
                "recipe {} already exists",
                name.trim()
            )));
        }
        Ok(())
    }

    /// Store the recipe, then add it to the user's collection. If the user
    /// cannot be updated the recipe record is removed again.
    async fn store_owned_recipe(&self, user: &User, recipe: &Recipe) -> Result<(), Error> {
        self.recipes
            .insert(recipe)
            .await
            .map_err(map_recipe_error)?;
        let error = match self
            .users
            .apply(user.id(), UserChange::AddRecipe(recipe.id))
            .await
        {
            Ok(Some(_)) => return Ok(()),
            Ok(None) => missing_user(&user.id().to_string()),
            Err(error) => map_user_error(error),
        };
        if let Err(cleanup) = self.recipes.delete(&recipe.id).await {
            warn!(recipe_id = %recipe.id, error = %cleanup, "orphaned recipe left behind");
        }
        Err(error)
    }
}

#[async_trait]
impl<U, R, I> RecipeCatalogueCommand for RecipeCatalogueService<U, R, I>
where
    U: UserRepository,
    R: RecipeRepository,
    I: IngredientRepository,
{
    async fn create_recipe(&self, user_id: &str, draft: RecipeDraft) -> Result<Recipe, Error> {
        let user = require_user(self.users.as_ref(), user_id).await?;
        draft
            .validate()
            .map_err(|err| Error::invalid_value(err.to_string()))?;

        let raw_ingredients: Vec<String> = draft
            .ingredients
            .iter()
            .map(|line| line.ingredient.clone())
            .collect();
        let resolved = resolve_ingredients(self.ingredients.as_ref(), &raw_ingredients).await?;
        self.ensure_unique_name(&user, &draft.name).await?;

        let recipe = draft.into_recipe(RecipeId::random(), resolved);
        self.store_owned_recipe(&user, &recipe).await?;
        info!(user_id, recipe_id = %recipe.id, name = %recipe.name, "recipe created");
        Ok(recipe)
    }

    async fn delete_recipe(&self, user_id: &str, recipe_id: &str) -> Result<(), Error> {
        let user = require_user(self.users.as_ref(), user_id).await?;
        let Some(id) = RecipeId::new(recipe_id).ok().filter(|id| user.owns(id)) else {
            return Err(missing_recipe(recipe_id));
        };

        match self
            .users
            .apply(user.id(), UserChange::RemoveRecipe(id))
            .await
            .map_err(map_user_error)?
        {
            Some(true) => {}
            Some(false) => return Err(missing_recipe(recipe_id)),
            None => return Err(missing_user(user_id)),
        }
        self.recipes.delete(&id).await.map_err(map_recipe_error)?;
        info!(user_id, recipe_id, "recipe deleted");
        Ok(())
    }
}

#[async_trait]
impl<U, R, I> RecipeCatalogueQuery for RecipeCatalogueService<U, R, I>
where
    U: UserRepository,
    R: RecipeRepository,
    I: IngredientRepository,
{
    async fn retrieve_recipe(&self, user_id: &str, recipe_id: &str) -> Result<Recipe, Error> {
        let user = require_user(self.users.as_ref(), user_id).await?;
        require_visible_recipe(self.recipes.as_ref(), &user, self.visibility, recipe_id).await
    }

    async fn recipe_ideas(
        &self,
        user_id: &str,
        ingredient_ids: &[String],
    ) -> Result<Vec<RecipeSummary>, Error> {
        let user = require_user(self.users.as_ref(), user_id).await?;
        if ingredient_ids.is_empty() {
            return Err(Error::invalid_value("ingredients must not be empty"));
        }
        let wanted = resolve_ingredients(self.ingredients.as_ref(), ingredient_ids).await?;

        let ideas: Vec<RecipeSummary> = self
            .recipes
            .find_visible_to(&user, self.visibility)
            .await
            .map_err(map_recipe_error)?
            .iter()
            .filter(|recipe| wanted.iter().all(|ingredient| recipe.uses(ingredient)))
            .map(RecipeSummary::from)
            .collect();
        if ideas.is_empty() {
            return Err(Error::unexistence(
                "no recipe ideas found for the given ingredients",
            ));
        }
        Ok(ideas)
    }

    async fn retrieve_user(&self, user_id: &str) -> Result<UserProfile, Error> {
        let user = require_user(self.users.as_ref(), user_id).await?;
        Ok(UserProfile::from(&user))
    }
}

#[cfg(test)]
#[path = "recipe_catalogue_service_tests.rs"]
mod tests;
