//! Port abstraction for the ingredient catalogue.
use async_trait::async_trait;

use crate::domain::{Ingredient, IngredientId, IngredientName};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by ingredient repository adapters.
    pub enum IngredientPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "ingredient repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "ingredient repository query failed: {message}",
        /// An ingredient with the same case-folded name is already stored.
        Duplicate { name: String } => "ingredient {name} already exists",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IngredientRepository: Send + Sync {
    /// Load the ingredients for `ids`. Unknown ids are skipped; order is not
    /// significant.
    async fn find_by_ids(
        &self,
        ids: &[IngredientId],
    ) -> Result<Vec<Ingredient>, IngredientPersistenceError>;

    /// Case-insensitive lookup by name.
    async fn find_by_name(
        &self,
        name: &IngredientName,
    ) -> Result<Option<Ingredient>, IngredientPersistenceError>;

    /// Store a new ingredient, failing with
    /// [`IngredientPersistenceError::Duplicate`] when the name is taken.
    async fn insert(&self, ingredient: &Ingredient) -> Result<(), IngredientPersistenceError>;

    /// Every ingredient ordered by name.
    async fn list(&self) -> Result<Vec<Ingredient>, IngredientPersistenceError>;
}
