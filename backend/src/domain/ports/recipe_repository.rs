//! Port abstraction for recipe storage.
//!
//! Adapters only need to load and store records by identifier. The visibility
//! scope and the name/author matching are provided methods built on
//! [`RecipeRepository::find_by_ids`], so every adapter shares one definition
//! of both. An adapter may override them with a native query as long as the
//! results stay identical.

use async_trait::async_trait;

use crate::domain::{Recipe, RecipeId, RecipeMatcher, RecipeVisibility, User};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by recipe repository adapters.
    pub enum RecipePersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "recipe repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "recipe repository query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecipeRepository: Send + Sync {
    /// Load the recipes for `ids`, in the order given. Unknown ids are
    /// skipped.
    async fn find_by_ids(&self, ids: &[RecipeId]) -> Result<Vec<Recipe>, RecipePersistenceError>;

    async fn find_by_id(&self, id: &RecipeId) -> Result<Option<Recipe>, RecipePersistenceError>;

    /// Store a new recipe with its ingredient lines.
    async fn insert(&self, recipe: &Recipe) -> Result<(), RecipePersistenceError>;

    /// Remove a recipe; removing an unknown id is not an error.
    async fn delete(&self, id: &RecipeId) -> Result<(), RecipePersistenceError>;

    /// Recipes reachable from `user` under `visibility`, owned ones first.
    async fn find_visible_to(
        &self,
        user: &User,
        visibility: RecipeVisibility,
    ) -> Result<Vec<Recipe>, RecipePersistenceError> {
        let ids = visibility.visible_recipe_ids(user);
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        self.find_by_ids(&ids).await
    }

    /// Visible recipes whose name or author satisfies `matcher`.
    async fn find_by_name_or_author(
        &self,
        user: &User,
        visibility: RecipeVisibility,
        matcher: &RecipeMatcher,
    ) -> Result<Vec<Recipe>, RecipePersistenceError> {
        let visible = self.find_visible_to(user, visibility).await?;
        Ok(matcher.filter(visible))
    }
}
