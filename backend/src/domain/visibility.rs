//! Which recipes a user may search over and reference.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::recipe::RecipeId;
use super::user::User;

/// Visibility predicate applied to a user's recipe scope.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipeVisibility {
    /// Only recipes in the user's own collection.
    #[default]
    Owned,
    /// Owned recipes plus any recipe the user has favourited.
    OwnedAndFavourites,
}

impl RecipeVisibility {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Owned => "owned",
            Self::OwnedAndFavourites => "owned_and_favourites",
        }
    }

    /// Recipe references visible to `user`, owned ones first, without
    /// duplicates.
    pub fn visible_recipe_ids(self, user: &User) -> Vec<RecipeId> {
        let mut ids = user.recipes().to_vec();
        if self == Self::OwnedAndFavourites {
            ids.extend(
                user.favourites()
                    .iter()
                    .filter(|id| !user.owns(id))
                    .copied(),
            );
        }
        ids
    }

    pub fn is_visible(self, user: &User, recipe: &RecipeId) -> bool {
        match self {
            Self::Owned => user.owns(recipe),
            Self::OwnedAndFavourites => user.owns(recipe) || user.is_favourite(recipe),
        }
    }
}

impl fmt::Display for RecipeVisibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown recipe visibility: {0}")]
pub struct RecipeVisibilityParseError(pub String);

impl FromStr for RecipeVisibility {
    type Err = RecipeVisibilityParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "owned" => Ok(Self::Owned),
            "owned_and_favourites" => Ok(Self::OwnedAndFavourites),
            _ => Err(RecipeVisibilityParseError(s.to_owned())),
        }
    }
}
