//! Driving ports for the shared ingredient catalogue.

use async_trait::async_trait;

use crate::domain::{Error, Ingredient};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IngredientCatalogueCommand: Send + Sync {
    /// Add an ingredient.
    ///
    /// # Errors
    /// A value error for a blank or overlong name, and a duplicity error
    /// (`ingredient <name> already exists`) when the case-folded name is
    /// taken.
    async fn create_ingredient(&self, name: &str) -> Result<Ingredient, Error>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IngredientCatalogueQuery: Send + Sync {
    /// Every ingredient ordered by name.
    async fn list_ingredients(&self) -> Result<Vec<Ingredient>, Error>;
}
