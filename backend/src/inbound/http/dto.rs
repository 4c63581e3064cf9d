//! Request and response bodies shared by the recipe HTTP handlers.
//!
//! Responses are built from domain read models so handlers never serialise
//! domain aggregates directly.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    GroceryItem, Ingredient, MenuDay, Recipe, RecipeDraft, RecipeIngredient,
    RecipeIngredientDraft, RecipeSummary, UserProfile,
};

/// One ingredient line of a recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IngredientLineResponse {
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub ingredient: String,
    #[schema(example = 2.5)]
    pub quantity: f64,
}

impl From<&RecipeIngredient> for IngredientLineResponse {
    fn from(line: &RecipeIngredient) -> Self {
        Self {
            ingredient: line.ingredient.to_string(),
            quantity: line.quantity,
        }
    }
}

/// Recipe as returned by search, favourites, ideas and menu endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummaryResponse {
    #[schema(example = "Paella")]
    pub name: String,
    #[schema(example = "Maria")]
    pub author: String,
    /// Preparation time in minutes.
    pub time: u32,
    pub description: String,
    pub ingredients: Vec<IngredientLineResponse>,
}

impl From<RecipeSummary> for RecipeSummaryResponse {
    fn from(summary: RecipeSummary) -> Self {
        Self {
            ingredients: summary
                .ingredients
                .iter()
                .map(IngredientLineResponse::from)
                .collect(),
            name: summary.name,
            author: summary.author,
            time: summary.time,
            description: summary.description,
        }
    }
}

pub(crate) fn summaries(list: Vec<RecipeSummary>) -> Vec<RecipeSummaryResponse> {
    list.into_iter().map(RecipeSummaryResponse::from).collect()
}

/// Full recipe including its identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeResponse {
    pub id: String,
    #[serde(flatten)]
    pub summary: RecipeSummaryResponse,
}

impl From<Recipe> for RecipeResponse {
    fn from(recipe: Recipe) -> Self {
        Self {
            id: recipe.id.to_string(),
            summary: RecipeSummary::from(&recipe).into(),
        }
    }
}

/// Ingredient line of a recipe creation request.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IngredientLineRequest {
    pub ingredient: String,
    pub quantity: f64,
}

/// Body of `POST /api/v1/users/{user_id}/recipes`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecipeRequest {
    pub name: String,
    pub author: String,
    pub description: String,
    /// Preparation time in minutes.
    pub time: u32,
    pub ingredients: Vec<IngredientLineRequest>,
}

impl From<CreateRecipeRequest> for RecipeDraft {
    fn from(request: CreateRecipeRequest) -> Self {
        Self {
            name: request.name,
            author: request.author,
            description: request.description,
            time: request.time,
            ingredients: request
                .ingredients
                .into_iter()
                .map(|line| RecipeIngredientDraft {
                    ingredient: line.ingredient,
                    quantity: line.quantity,
                })
                .collect(),
        }
    }
}

/// Body of `POST /api/v1/ingredients`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateIngredientRequest {
    #[schema(example = "Saffron")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct IngredientResponse {
    pub id: String,
    pub name: String,
}

impl From<Ingredient> for IngredientResponse {
    fn from(ingredient: Ingredient) -> Self {
        Self {
            id: ingredient.id.to_string(),
            name: ingredient.name.into(),
        }
    }
}

/// Body of `POST /api/v1/users/{user_id}/recipes/ideas`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeIdeasRequest {
    pub ingredient_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileResponse {
    pub id: String,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub recipe_count: usize,
    pub favourite_count: usize,
    pub planned_meal_count: usize,
}

impl From<UserProfile> for UserProfileResponse {
    fn from(profile: UserProfile) -> Self {
        Self {
            id: profile.id.to_string(),
            name: profile.name.into(),
            surname: profile.surname.into(),
            email: profile.email.into(),
            recipe_count: profile.recipe_count,
            favourite_count: profile.favourite_count,
            planned_meal_count: profile.planned_meal_count,
        }
    }
}

/// Outcome of a toggle endpoint: whether the item is now set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ToggleResponse {
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MenuDayResponse {
    #[schema(example = "monday")]
    pub day: String,
    pub recipes: Vec<RecipeSummaryResponse>,
}

impl From<MenuDay> for MenuDayResponse {
    fn from(menu_day: MenuDay) -> Self {
        Self {
            day: menu_day.day.to_string(),
            recipes: summaries(menu_day.recipes),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GroceryItemResponse {
    pub ingredient: String,
    pub name: String,
    pub quantity: f64,
}

impl From<GroceryItem> for GroceryItemResponse {
    fn from(item: GroceryItem) -> Self {
        Self {
            ingredient: item.ingredient.to_string(),
            name: item.name,
            quantity: item.quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{IngredientId, RecipeId};
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn recipe_response_flattens_summary() {
        let ingredient = IngredientId::random();
        let recipe = Recipe {
            id: RecipeId::random(),
            name: "Paella".to_owned(),
            author: "Maria".to_owned(),
            description: "Rice".to_owned(),
            time: 40,
            ingredients: vec![RecipeIngredient {
                ingredient,
                quantity: 2.0,
            }],
        };
        let id = recipe.id.to_string();

        let value = serde_json::to_value(RecipeResponse::from(recipe)).expect("serialise");

        assert_eq!(
            value,
            json!({
                "id": id,
                "name": "Paella",
                "author": "Maria",
                "time": 40,
                "description": "Rice",
                "ingredients": [{"ingredient": ingredient.to_string(), "quantity": 2.0}],
            })
        );
    }

    #[rstest]
    fn create_request_becomes_draft() {
        let request: CreateRecipeRequest = serde_json::from_value(json!({
            "name": "Paella",
            "author": "Maria",
            "description": "Rice",
            "time": 40,
            "ingredients": [{"ingredient": "abc", "quantity": 1.5}],
        }))
        .expect("deserialise");

        let draft = RecipeDraft::from(request);
        assert_eq!(draft.ingredients[0].ingredient, "abc");
        assert_eq!(draft.ingredients[0].quantity, 1.5);
    }

    #[rstest]
    fn grocery_item_names_the_ingredient() {
        let ingredient = IngredientId::random();
        let item = GroceryItem {
            ingredient,
            name: "Rice".to_owned(),
            quantity: 4.0,
        };

        let value = serde_json::to_value(GroceryItemResponse::from(item)).expect("serialise");

        assert_eq!(
            value,
            json!({"ingredient": ingredient.to_string(), "name": "Rice", "quantity": 4.0})
        );
    }
}
