//! Recipe aggregate, creation drafts and the externally visible summary.
//!
//! Purpose: keep one canonical record shape for stored recipes ([`Recipe`])
//! and one for search and listing responses ([`RecipeSummary`]). Drafts arrive
//! with raw ingredient identifiers; services resolve them before a [`Recipe`]
//! is built, so a stored recipe always satisfies:
//!
//! - `name`, `author` and `description` are non-empty once trimmed,
//! - `ingredients` is non-empty,
//! - every quantity is finite and strictly positive,
//! - `time` fits the storage column ([`RECIPE_TIME_MAX`]).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::identifier::uuid_identifier;
use super::ingredient::IngredientId;

uuid_identifier!(
    /// Stable recipe identifier stored as a UUID.
    RecipeId,
    "recipe"
);

/// Longest accepted preparation time in minutes; `time` is stored as a
/// signed 32-bit integer.
pub const RECIPE_TIME_MAX: u32 = i32::MAX.unsigned_abs();

/// One line of a recipe: which ingredient and how much of it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RecipeIngredient {
    pub ingredient: IngredientId,
    pub quantity: f64,
}

/// Stored recipe.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    pub author: String,
    pub description: String,
    /// Preparation time in minutes.
    pub time: u32,
    pub ingredients: Vec<RecipeIngredient>,
}

impl Recipe {
    /// Whether the recipe lists `ingredient` at least once.
    pub fn uses(&self, ingredient: &IngredientId) -> bool {
        self.ingredients
            .iter()
            .any(|line| &line.ingredient == ingredient)
    }
}

/// Validation errors raised while turning a [`RecipeDraft`] into a [`Recipe`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecipeValidationError {
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },
    #[error("ingredients must not be empty")]
    NoIngredients,
    #[error("quantity of ingredient at position {index} must be a positive number")]
    InvalidQuantity { index: usize },
    #[error("time must be at most {max} minutes")]
    TimeTooLong { max: u32 },
}

/// Ingredient line as submitted by a client, before the identifier is
/// resolved against the catalogue.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RecipeIngredientDraft {
    pub ingredient: String,
    pub quantity: f64,
}

/// Recipe creation request.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RecipeDraft {
    pub name: String,
    pub author: String,
    pub description: String,
    pub time: u32,
    pub ingredients: Vec<RecipeIngredientDraft>,
}

impl RecipeDraft {
    /// Check the shape rules that do not need storage access.
    pub fn validate(&self) -> Result<(), RecipeValidationError> {
        for (field, value) in [
            ("name", &self.name),
            ("author", &self.author),
            ("description", &self.description),
        ] {
            if value.trim().is_empty() {
                return Err(RecipeValidationError::EmptyField { field });
            }
        }
        if self.time > RECIPE_TIME_MAX {
            return Err(RecipeValidationError::TimeTooLong {
                max: RECIPE_TIME_MAX,
            });
        }
        if self.ingredients.is_empty() {
            return Err(RecipeValidationError::NoIngredients);
        }
        if let Some(index) = self
            .ingredients
            .iter()
            .position(|line| !line.quantity.is_finite() || line.quantity <= 0.0)
        {
            return Err(RecipeValidationError::InvalidQuantity { index });
        }
        Ok(())
    }

    /// Build the stored recipe once every ingredient has been resolved.
    ///
    /// `resolved` must be index-aligned with `self.ingredients`.
    pub fn into_recipe(self, id: RecipeId, resolved: Vec<IngredientId>) -> Recipe {
        let ingredients = self
            .ingredients
            .iter()
            .zip(resolved)
            .map(|(line, ingredient)| RecipeIngredient {
                ingredient,
                quantity: line.quantity,
            })
            .collect();
        Recipe {
            id,
            name: self.name.trim().to_owned(),
            author: self.author.trim().to_owned(),
            description: self.description.trim().to_owned(),
            time: self.time,
            ingredients,
        }
    }
}

/// Externally visible shape of a matched recipe.
///
/// # Examples
/// ```
/// use cookbook::domain::{Recipe, RecipeId, RecipeSummary};
///
/// let recipe = Recipe {
///     id: RecipeId::random(),
///     name: "Paella".into(),
///     author: "Maria".into(),
///     description: "Spanish rice dish".into(),
///     time: 45,
///     ingredients: Vec::new(),
/// };
/// let summary = RecipeSummary::from(&recipe);
/// assert_eq!(summary.name, "Paella");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeSummary {
    pub name: String,
    pub author: String,
    pub time: u32,
    pub description: String,
    pub ingredients: Vec<RecipeIngredient>,
}

impl From<&Recipe> for RecipeSummary {
    fn from(recipe: &Recipe) -> Self {
        Self {
            name: recipe.name.clone(),
            author: recipe.author.clone(),
            time: recipe.time,
            description: recipe.description.clone(),
            ingredients: recipe.ingredients.clone(),
        }
    }
}
