//! Recipe search over the recipes a user can see.
//!
//! Flow: resolve the user, load the visible recipes matching the query by
//! name or author, and shape each match as a [`RecipeSummary`]. An empty
//! result is an error, not an empty list.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::existence::{map_recipe_error, require_user};
use crate::domain::ports::{RecipeRepository, RecipeSearchQuery, UserRepository};
use crate::domain::{Error, RecipeMatcher, RecipeSummary, RecipeVisibility};

/// Recipe search service implementing [`RecipeSearchQuery`].
#[derive(Clone)]
pub struct RecipeSearchService<U, R> {
    users: Arc<U>,
    recipes: Arc<R>,
    visibility: RecipeVisibility,
}

impl<U, R> RecipeSearchService<U, R> {
    /// Create a service searching owned recipes only.
    pub fn new(users: Arc<U>, recipes: Arc<R>) -> Self {
        Self {
            users,
            recipes,
            visibility: RecipeVisibility::default(),
        }
    }

    /// Override the visibility scope.
    #[must_use]
    pub fn with_visibility(mut self, visibility: RecipeVisibility) -> Self {
        self.visibility = visibility;
        self
    }
}

pub(crate) fn not_found_like_recipe_or_author(query: &str) -> Error {
    Error::unexistence(format!("{query} is not found like recipe or author"))
}

#[async_trait]
impl<U, R> RecipeSearchQuery for RecipeSearchService<U, R>
where
    U: UserRepository,
    R: RecipeRepository,
{
    async fn search_typed(
        &self,
        query: &str,
        user_id: &str,
    ) -> Result<Vec<RecipeSummary>, Error> {
        let user = require_user(self.users.as_ref(), user_id).await?;
        let matcher = RecipeMatcher::new(query);
        let matches = self
            .recipes
            .find_by_name_or_author(&user, self.visibility, &matcher)
            .await
            .map_err(map_recipe_error)?;

        if matches.is_empty() {
            return Err(not_found_like_recipe_or_author(query));
        }
        debug!(
            user_id,
            matches = matches.len(),
            visibility = %self.visibility,
            "recipe search matched"
        );
        Ok(matches.iter().map(RecipeSummary::from).collect())
    }
}

#[cfg(test)]
#[path = "recipe_search_service_tests.rs"]
mod tests;
