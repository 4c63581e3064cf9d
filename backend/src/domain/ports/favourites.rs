//! Driving ports for favourite recipes.

use async_trait::async_trait;

use crate::domain::{Error, RecipeSummary};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FavouritesCommand: Send + Sync {
    /// Flip the favourite flag of an existing recipe; returns `true` when the
    /// recipe is now a favourite.
    async fn toggle_favourite(&self, user_id: &str, recipe_id: &str) -> Result<bool, Error>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FavouritesQuery: Send + Sync {
    /// Favourite recipes in the order they were added.
    async fn retrieve_favourites(&self, user_id: &str) -> Result<Vec<RecipeSummary>, Error>;
}
