//! Text matching of recipes by name or author.

use super::recipe::Recipe;

/// Case-insensitive substring matcher over recipe name and author.
///
/// Both the query and the candidate fields are trimmed and lowercased before
/// comparison, so an exact name or author always matches. A query that is
/// blank after trimming matches nothing.
///
/// # Examples
/// ```
/// use cookbook::domain::RecipeMatcher;
///
/// let matcher = RecipeMatcher::new("  mar ");
/// assert!(matcher.matches_text("Maria"));
/// assert!(!matcher.matches_text("Paella"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeMatcher {
    raw: String,
    needle: String,
}

impl RecipeMatcher {
    pub fn new(query: impl Into<String>) -> Self {
        let raw = query.into();
        let needle = normalize(&raw);
        Self { raw, needle }
    }

    /// The query exactly as supplied.
    pub fn query(&self) -> &str {
        &self.raw
    }

    pub fn matches_text(&self, text: &str) -> bool {
        !self.needle.is_empty() && normalize(text).contains(&self.needle)
    }

    /// Whether `recipe` matches on its name or its author.
    pub fn matches(&self, recipe: &Recipe) -> bool {
        self.matches_text(&recipe.name) || self.matches_text(&recipe.author)
    }

    /// Keep matching recipes in their original order.
    pub fn filter(&self, recipes: impl IntoIterator<Item = Recipe>) -> Vec<Recipe> {
        recipes
            .into_iter()
            .filter(|recipe| self.matches(recipe))
            .collect()
    }
}

/// Trim and lowercase text for comparison.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}
