//! Driving ports for a user's recipe collection.
//!
//! Identifiers are taken as raw strings: an identifier that does not parse
//! is reported exactly like one that parses but is unknown.

use async_trait::async_trait;

use crate::domain::{Error, Recipe, RecipeDraft, RecipeSummary, UserProfile};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecipeCatalogueCommand: Send + Sync {
    /// Create a recipe and append it to the user's collection.
    ///
    /// # Errors
    /// - `user with id <id> does not exist`.
    /// - A value error for an invalid draft.
    /// - `ingredient with id <id> does not exist` for the first unknown
    ///   ingredient.
    /// - `recipe <name> already exists` when the collection already holds a
    ///   recipe with that case-folded name.
    async fn create_recipe(&self, user_id: &str, draft: RecipeDraft) -> Result<Recipe, Error>;

    /// Delete an owned recipe and every reference to it from the user.
    async fn delete_recipe(&self, user_id: &str, recipe_id: &str) -> Result<(), Error>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecipeCatalogueQuery: Send + Sync {
    /// Fetch one visible recipe.
    async fn retrieve_recipe(&self, user_id: &str, recipe_id: &str) -> Result<Recipe, Error>;

    /// Visible recipes using every listed ingredient.
    async fn recipe_ideas(
        &self,
        user_id: &str,
        ingredient_ids: &[String],
    ) -> Result<Vec<RecipeSummary>, Error>;

    /// Profile summary of a user.
    async fn retrieve_user(&self, user_id: &str) -> Result<UserProfile, Error>;
}
