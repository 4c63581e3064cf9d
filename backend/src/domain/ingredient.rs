//! Ingredient catalogue entries.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use super::identifier::uuid_identifier;

uuid_identifier!(
    /// Stable ingredient identifier stored as a UUID.
    IngredientId,
    "ingredient"
);

/// Maximum allowed length for an ingredient name.
pub const INGREDIENT_NAME_MAX: usize = 64;

/// Validation errors for [`IngredientName`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IngredientValidationError {
    /// Name is empty once trimmed.
    #[error("ingredient name must not be empty")]
    EmptyName,
    /// Name exceeds [`INGREDIENT_NAME_MAX`] characters.
    #[error("ingredient name must be at most {max} characters")]
    NameTooLong { max: usize },
}

/// Trimmed, non-empty ingredient name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub struct IngredientName(String);

impl IngredientName {
    /// Validate and construct an [`IngredientName`], trimming surrounding
    /// whitespace.
    pub fn new(name: impl AsRef<str>) -> Result<Self, IngredientValidationError> {
        let trimmed = name.as_ref().trim();
        if trimmed.is_empty() {
            return Err(IngredientValidationError::EmptyName);
        }
        if trimmed.chars().count() > INGREDIENT_NAME_MAX {
            return Err(IngredientValidationError::NameTooLong {
                max: INGREDIENT_NAME_MAX,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Lowercased form used for uniqueness checks.
    pub fn folded(&self) -> String {
        self.0.to_lowercase()
    }
}

impl AsRef<str> for IngredientName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for IngredientName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<IngredientName> for String {
    fn from(value: IngredientName) -> Self {
        value.0
    }
}

/// An ingredient recipes can reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ingredient {
    pub id: IngredientId,
    pub name: IngredientName,
}

impl Ingredient {
    /// Create an ingredient with a fresh identifier.
    pub fn new(name: IngredientName) -> Self {
        Self {
            id: IngredientId::random(),
            name,
        }
    }
}
