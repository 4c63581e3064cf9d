//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod favourites;
mod ingredient_catalogue;
mod ingredient_repository;
mod menu;
mod recipe_catalogue;
mod recipe_repository;
mod recipe_search_query;
mod user_repository;

pub use favourites::{FavouritesCommand, FavouritesQuery};
#[cfg(test)]
pub use favourites::{MockFavouritesCommand, MockFavouritesQuery};
pub use ingredient_catalogue::{IngredientCatalogueCommand, IngredientCatalogueQuery};
#[cfg(test)]
pub use ingredient_catalogue::{MockIngredientCatalogueCommand, MockIngredientCatalogueQuery};
#[cfg(test)]
pub use ingredient_repository::MockIngredientRepository;
pub use ingredient_repository::{IngredientPersistenceError, IngredientRepository};
pub use menu::{MenuCommand, MenuQuery};
#[cfg(test)]
pub use menu::{MockMenuCommand, MockMenuQuery};
pub use recipe_catalogue::{RecipeCatalogueCommand, RecipeCatalogueQuery};
#[cfg(test)]
pub use recipe_catalogue::{MockRecipeCatalogueCommand, MockRecipeCatalogueQuery};
#[cfg(test)]
pub use recipe_repository::MockRecipeRepository;
pub use recipe_repository::{RecipePersistenceError, RecipeRepository};
pub use recipe_search_query::{RecipeSearchQuery, SearchFuture};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
