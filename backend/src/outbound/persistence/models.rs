//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use diesel::prelude::*;
use uuid::Uuid;

use super::schema::{
    ingredients, menu_entries, recipe_ingredients, recipes, user_favourites, user_recipes, users,
};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: Uuid,
    pub name: String,
    pub surname: String,
    pub email: String,
}

/// Insert-or-update shape of a user row; timestamps are left to defaults.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct UserUpsert<'a> {
    pub id: Uuid,
    pub name: &'a str,
    pub surname: &'a str,
    pub email: &'a str,
}

#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = ingredients)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct IngredientRow {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = recipes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct RecipeRow {
    pub id: Uuid,
    pub name: String,
    pub author: String,
    pub description: String,
    pub time_minutes: i32,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = recipes)]
pub(crate) struct NewRecipeRow<'a> {
    pub id: Uuid,
    pub name: &'a str,
    pub author: &'a str,
    pub description: &'a str,
    pub time_minutes: i32,
}

#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = recipe_ingredients)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct RecipeIngredientRow {
    pub recipe_id: Uuid,
    pub position: i32,
    pub ingredient_id: Uuid,
    pub quantity: f64,
}

/// Position-ordered reference from a user to a recipe.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = user_recipes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRecipeRow {
    pub user_id: Uuid,
    pub recipe_id: Uuid,
    pub position: i32,
}

#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = user_favourites)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserFavouriteRow {
    pub user_id: Uuid,
    pub recipe_id: Uuid,
    pub position: i32,
}

#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = menu_entries)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct MenuEntryRow {
    pub user_id: Uuid,
    pub weekday: i16,
    pub recipe_id: Uuid,
    pub position: i32,
}
