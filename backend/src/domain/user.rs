//! User data model.
//!
//! A user owns an ordered collection of recipes, keeps a list of favourite
//! recipes, and plans meals on a [`WeeklyMenu`]. All three collections hold
//! recipe references only; recipe records live in the recipe repository.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

use super::identifier::uuid_identifier;
use super::menu::{Weekday, WeeklyMenu};
use super::recipe::RecipeId;

uuid_identifier!(
    /// Stable user identifier stored as a UUID.
    UserId,
    "user"
);

/// Maximum allowed length for a personal name or surname.
pub const PERSON_NAME_MAX: usize = 64;

/// Validation errors returned by [`User::try_new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserValidationError {
    #[error("{field} must not be empty")]
    EmptyName { field: &'static str },
    #[error("{field} must be at most {max} characters")]
    NameTooLong { field: &'static str, max: usize },
    #[error("email must be a valid address")]
    InvalidEmail,
}

/// Personal name or surname.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub struct PersonName(String);

impl PersonName {
    fn parse(field: &'static str, raw: &str) -> Result<Self, UserValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(UserValidationError::EmptyName { field });
        }
        if trimmed.chars().count() > PERSON_NAME_MAX {
            return Err(UserValidationError::NameTooLong {
                field,
                max: PERSON_NAME_MAX,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for PersonName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<PersonName> for String {
    fn from(value: PersonName) -> Self {
        value.0
    }
}

/// Lowercased e-mail address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub struct Email(String);

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // One `@`, no whitespace, and a dotted domain part.
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$")
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

impl Email {
    /// Validate and normalise an e-mail address.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let normalised = raw.as_ref().trim().to_lowercase();
        if !email_regex().is_match(&normalised) {
            return Err(UserValidationError::InvalidEmail);
        }
        Ok(Self(normalised))
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Email> for String {
    fn from(value: Email) -> Self {
        value.0
    }
}

/// Application user.
///
/// ## Invariants
/// - `recipes` and `favourites` never contain the same id twice.
/// - Removing a recipe from the collection also drops it from favourites and
///   from every menu day.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    id: UserId,
    name: PersonName,
    surname: PersonName,
    email: Email,
    recipes: Vec<RecipeId>,
    favourites: Vec<RecipeId>,
    menu: WeeklyMenu,
}

impl User {
    /// Build a user with empty collections.
    ///
    /// # Examples
    /// ```
    /// use cookbook::domain::{User, UserId};
    ///
    /// let user = User::try_new(UserId::random(), "Ada", "Lovelace", "ada@example.com")
    ///     .expect("valid user");
    /// assert!(user.recipes().is_empty());
    /// ```
    pub fn try_new(
        id: UserId,
        name: &str,
        surname: &str,
        email: &str,
    ) -> Result<Self, UserValidationError> {
        Ok(Self {
            id,
            name: PersonName::parse("name", name)?,
            surname: PersonName::parse("surname", surname)?,
            email: Email::new(email)?,
            recipes: Vec::new(),
            favourites: Vec::new(),
            menu: WeeklyMenu::default(),
        })
    }

    /// Replace the stored collections, deduplicating while keeping first
    /// occurrences. Used by adapters rebuilding an aggregate from storage.
    pub fn with_collections(
        mut self,
        recipes: Vec<RecipeId>,
        favourites: Vec<RecipeId>,
        menu: WeeklyMenu,
    ) -> Self {
        self.recipes = dedup(recipes);
        self.favourites = dedup(favourites);
        self.menu = menu;
        self
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn name(&self) -> &PersonName {
        &self.name
    }

    pub fn surname(&self) -> &PersonName {
        &self.surname
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    /// Owned recipe references in insertion order.
    pub fn recipes(&self) -> &[RecipeId] {
        &self.recipes
    }

    /// Favourite recipe references in the order they were added.
    pub fn favourites(&self) -> &[RecipeId] {
        &self.favourites
    }

    pub fn menu(&self) -> &WeeklyMenu {
        &self.menu
    }

    pub fn menu_mut(&mut self) -> &mut WeeklyMenu {
        &mut self.menu
    }

    pub fn owns(&self, recipe: &RecipeId) -> bool {
        self.recipes.contains(recipe)
    }

    pub fn is_favourite(&self, recipe: &RecipeId) -> bool {
        self.favourites.contains(recipe)
    }

    /// Add a recipe to the collection; returns `false` when already present.
    pub fn add_recipe(&mut self, recipe: RecipeId) -> bool {
        if self.owns(&recipe) {
            return false;
        }
        self.recipes.push(recipe);
        true
    }

    /// Drop a recipe from the collection, favourites and menu.
    pub fn remove_recipe(&mut self, recipe: &RecipeId) -> bool {
        let before = self.recipes.len();
        self.recipes.retain(|id| id != recipe);
        self.favourites.retain(|id| id != recipe);
        self.menu.remove_recipe(recipe);
        self.recipes.len() != before
    }

    /// Flip the favourite flag; returns the new state.
    pub fn toggle_favourite(&mut self, recipe: RecipeId) -> bool {
        if self.is_favourite(&recipe) {
            self.favourites.retain(|id| id != &recipe);
            false
        } else {
            self.favourites.push(recipe);
            true
        }
    }
}

/// A single mutation of a user's collections.
///
/// Repositories apply a change against the latest stored aggregate while
/// holding that user exclusively, so concurrent changes never overwrite one
/// another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserChange {
    AddRecipe(RecipeId),
    RemoveRecipe(RecipeId),
    ToggleFavourite(RecipeId),
    ToggleMenuEntry { day: Weekday, recipe: RecipeId },
    ClearMenuDay(Weekday),
    ClearMenu,
}

impl User {
    /// Apply `change` and report its outcome.
    ///
    /// Adding or removing a recipe returns whether the collection changed,
    /// toggles return the new state, and clearing always returns `true`.
    pub fn apply(&mut self, change: UserChange) -> bool {
        match change {
            UserChange::AddRecipe(recipe) => self.add_recipe(recipe),
            UserChange::RemoveRecipe(recipe) => self.remove_recipe(&recipe),
            UserChange::ToggleFavourite(recipe) => self.toggle_favourite(recipe),
            UserChange::ToggleMenuEntry { day, recipe } => self.menu.toggle(day, recipe),
            UserChange::ClearMenuDay(day) => {
                self.menu.clear_day(day);
                true
            }
            UserChange::ClearMenu => {
                self.menu.clear();
                true
            }
        }
    }
}

fn dedup(ids: Vec<RecipeId>) -> Vec<RecipeId> {
    let mut seen = Vec::with_capacity(ids.len());
    for id in ids {
        if !seen.contains(&id) {
            seen.push(id);
        }
    }
    seen
}

/// Read model returned by the retrieve-user operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: UserId,
    pub name: PersonName,
    pub surname: PersonName,
    pub email: Email,
    pub recipe_count: usize,
    pub favourite_count: usize,
    pub planned_meal_count: usize,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            surname: user.surname.clone(),
            email: user.email.clone(),
            recipe_count: user.recipes.len(),
            favourite_count: user.favourites.len(),
            planned_meal_count: user.menu.len(),
        }
    }
}
