//! Driving port for recipe search.
//!
//! Search has two entry points. [`RecipeSearchQuery::search_typed`] serves
//! callers that already hold strings. [`RecipeSearchQuery::search`] accepts
//! the raw JSON values of an untyped request and checks them *before* any
//! future is created, so an argument type error is returned synchronously and
//! no repository is touched.

use async_trait::async_trait;
use futures_util::future::BoxFuture;
use serde_json::Value;

use crate::domain::validation::validate_search_arguments;
use crate::domain::{Error, RecipeSummary};

/// Future returned by [`RecipeSearchQuery::search`] once its arguments passed
/// the type checks.
pub type SearchFuture<'a> = BoxFuture<'a, Result<Vec<RecipeSummary>, Error>>;

#[async_trait]
pub trait RecipeSearchQuery: Send + Sync {
    /// Search the recipes visible to `user_id` by name or author.
    ///
    /// # Errors
    /// - `user with id <user_id> does not exist` when the user is unknown.
    /// - `<query> is not found like recipe or author` when nothing matches.
    /// - Storage failures as service-unavailable or internal errors.
    async fn search_typed(&self, query: &str, user_id: &str)
    -> Result<Vec<RecipeSummary>, Error>;

    /// Untyped search entry point.
    ///
    /// The outer `Result` carries argument type errors (`<value> is not a
    /// string`); the user id is checked first. The returned future resolves
    /// like [`RecipeSearchQuery::search_typed`].
    fn search<'a>(
        &'a self,
        query: Option<&Value>,
        user_id: Option<&Value>,
    ) -> Result<SearchFuture<'a>, Error> {
        let arguments = validate_search_arguments(query, user_id)?;
        Ok(Box::pin(async move {
            self.search_typed(&arguments.query, &arguments.user_id)
                .await
        }))
    }
}
