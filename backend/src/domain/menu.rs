//! Weekly meal planning and grocery aggregation.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use super::ingredient::{Ingredient, IngredientId};
use super::recipe::{Recipe, RecipeId, RecipeSummary};

/// Day of the week a meal is planned on. Weeks start on Monday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Every day in week order.
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
            Self::Sunday => "sunday",
        }
    }

    /// Zero-based position in the week, Monday being `0`.
    pub const fn index(self) -> i16 {
        match self {
            Self::Monday => 0,
            Self::Tuesday => 1,
            Self::Wednesday => 2,
            Self::Thursday => 3,
            Self::Friday => 4,
            Self::Saturday => 5,
            Self::Sunday => 6,
        }
    }

    /// Inverse of [`Weekday::index`].
    pub fn from_index(index: i16) -> Option<Self> {
        Self::ALL.into_iter().find(|day| day.index() == index)
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a day name is not one of `monday`..`sunday`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0} is not a valid weekday")]
pub struct WeekdayParseError(pub String);

impl FromStr for Weekday {
    type Err = WeekdayParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|day| day.as_str() == folded)
            .ok_or_else(|| WeekdayParseError(s.to_owned()))
    }
}

/// A recipe planned on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub day: Weekday,
    pub recipe: RecipeId,
}

/// The week plan of a single user.
///
/// A recipe appears at most once per day; entries keep insertion order within
/// a day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeeklyMenu {
    entries: Vec<MenuEntry>,
}

impl WeeklyMenu {
    /// Rebuild a menu from stored entries, dropping duplicates.
    pub fn from_entries(entries: impl IntoIterator<Item = MenuEntry>) -> Self {
        let mut menu = Self::default();
        for entry in entries {
            if !menu.contains(entry.day, &entry.recipe) {
                menu.entries.push(entry);
            }
        }
        menu
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    /// Number of planned meals across the week.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, day: Weekday, recipe: &RecipeId) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.day == day && &entry.recipe == recipe)
    }

    /// Add or remove `recipe` on `day`; returns `true` when now planned.
    pub fn toggle(&mut self, day: Weekday, recipe: RecipeId) -> bool {
        if self.contains(day, &recipe) {
            self.entries
                .retain(|entry| !(entry.day == day && entry.recipe == recipe));
            false
        } else {
            self.entries.push(MenuEntry { day, recipe });
            true
        }
    }

    /// Recipes planned on `day`, in insertion order.
    pub fn recipes_on(&self, day: Weekday) -> Vec<RecipeId> {
        self.entries
            .iter()
            .filter(|entry| entry.day == day)
            .map(|entry| entry.recipe)
            .collect()
    }

    /// Days with at least one planned recipe, Monday first.
    pub fn planned_days(&self) -> Vec<Weekday> {
        Weekday::ALL
            .into_iter()
            .filter(|day| self.entries.iter().any(|entry| entry.day == *day))
            .collect()
    }

    pub fn clear_day(&mut self, day: Weekday) {
        self.entries.retain(|entry| entry.day != day);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn remove_recipe(&mut self, recipe: &RecipeId) {
        self.entries.retain(|entry| &entry.recipe != recipe);
    }
}

/// One day of the plan as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuDay {
    pub day: Weekday,
    pub recipes: Vec<RecipeSummary>,
}

/// Aggregated quantity of one ingredient across the week.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroceryItem {
    pub ingredient: IngredientId,
    pub name: String,
    pub quantity: f64,
}

/// Sum ingredient quantities over every planned meal.
///
/// A recipe planned on two days counts twice. Entries whose recipe is missing
/// from `recipes` are skipped; ingredients missing from `catalogue` fall back
/// to their identifier as name. The result is ordered by name, then id.
pub fn aggregate_grocery_list(
    menu: &WeeklyMenu,
    recipes: &HashMap<RecipeId, Recipe>,
    catalogue: &HashMap<IngredientId, Ingredient>,
) -> Vec<GroceryItem> {
    let mut totals: HashMap<IngredientId, f64> = HashMap::new();
    for entry in menu.entries() {
        let Some(recipe) = recipes.get(&entry.recipe) else {
            warn!(recipe_id = %entry.recipe, "planned recipe no longer exists");
            continue;
        };
        for line in &recipe.ingredients {
            *totals.entry(line.ingredient).or_insert(0.0) += line.quantity;
        }
    }

    let mut items: Vec<GroceryItem> = totals
        .into_iter()
        .map(|(ingredient, quantity)| GroceryItem {
            ingredient,
            name: catalogue
                .get(&ingredient)
                .map_or_else(|| ingredient.to_string(), |found| found.name.to_string()),
            quantity,
        })
        .collect();
    items.sort_by(|a, b| {
        a.name
            .cmp(&b.name)
            .then_with(|| a.ingredient.cmp(&b.ingredient))
    });
    items
}
