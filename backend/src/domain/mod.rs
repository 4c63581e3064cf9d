//! Domain primitives, aggregates and services.
//!
//! Purpose: define strongly typed recipe-management entities and the services
//! that implement the driving ports in [`ports`]. Nothing here knows about
//! HTTP or SQL.
//!
//! Public surface:
//! - [`Error`] / [`ErrorCode`] / [`ErrorClass`]: transport-agnostic failures.
//! - [`User`], [`Recipe`], [`Ingredient`], [`WeeklyMenu`]: aggregates.
//! - [`RecipeSearchService`] and the catalogue, favourites and menu services.

pub mod error;
pub(crate) mod existence;
pub mod favourites_service;
mod identifier;
pub mod ingredient;
pub mod ingredient_service;
pub mod menu;
pub mod menu_service;
pub mod ports;
pub mod recipe;
pub mod recipe_catalogue_service;
pub mod recipe_matching;
pub mod recipe_search_service;
pub mod trace_id;
pub mod user;
pub mod validation;
pub mod visibility;

pub use self::error::{Error, ErrorClass, ErrorCode};
pub use self::favourites_service::FavouritesService;
pub use self::identifier::IdentifierError;
pub use self::ingredient::{
    INGREDIENT_NAME_MAX, Ingredient, IngredientId, IngredientName, IngredientValidationError,
};
pub use self::ingredient_service::IngredientCatalogueService;
pub use self::menu::{GroceryItem, MenuDay, MenuEntry, Weekday, WeekdayParseError, WeeklyMenu};
pub use self::menu_service::MenuService;
pub use self::recipe::{
    RECIPE_TIME_MAX, Recipe, RecipeDraft, RecipeId, RecipeIngredient, RecipeIngredientDraft,
    RecipeSummary, RecipeValidationError,
};
pub use self::recipe_catalogue_service::RecipeCatalogueService;
pub use self::recipe_matching::RecipeMatcher;
pub use self::recipe_search_service::RecipeSearchService;
pub use self::trace_id::TraceId;
pub use self::user::{
    Email, PERSON_NAME_MAX, PersonName, User, UserChange, UserId, UserProfile,
    UserValidationError,
};
pub use self::visibility::{RecipeVisibility, RecipeVisibilityParseError};

/// Convenient result alias for domain operations.
pub type DomainResult<T> = Result<T, Error>;
