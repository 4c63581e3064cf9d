//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate them
//! with `diesel print-schema` after changing a migration.

diesel::table! {
    /// User accounts.
    users (id) {
        id -> Uuid,
        name -> Varchar,
        surname -> Varchar,
        /// Lowercased, unique.
        email -> Varchar,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Shared ingredient catalogue. `lower(name)` is unique.
    ingredients (id) {
        id -> Uuid,
        name -> Varchar,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    recipes (id) {
        id -> Uuid,
        name -> Varchar,
        author -> Varchar,
        description -> Text,
        /// Preparation time in minutes.
        time_minutes -> Int4,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Ordered ingredient lines of a recipe.
    recipe_ingredients (recipe_id, position) {
        recipe_id -> Uuid,
        position -> Int4,
        ingredient_id -> Uuid,
        quantity -> Float8,
    }
}

diesel::table! {
    /// Recipes owned by a user, in insertion order.
    user_recipes (user_id, recipe_id) {
        user_id -> Uuid,
        recipe_id -> Uuid,
        position -> Int4,
    }
}

diesel::table! {
    /// Favourite recipes of a user, in the order they were added.
    user_favourites (user_id, recipe_id) {
        user_id -> Uuid,
        recipe_id -> Uuid,
        position -> Int4,
    }
}

diesel::table! {
    /// Planned meals. `weekday` is 0 for Monday through 6 for Sunday.
    menu_entries (user_id, weekday, recipe_id) {
        user_id -> Uuid,
        weekday -> Int2,
        recipe_id -> Uuid,
        position -> Int4,
    }
}

diesel::joinable!(recipe_ingredients -> recipes (recipe_id));
diesel::joinable!(recipe_ingredients -> ingredients (ingredient_id));
diesel::joinable!(user_recipes -> users (user_id));
diesel::joinable!(user_recipes -> recipes (recipe_id));
diesel::joinable!(user_favourites -> users (user_id));
diesel::joinable!(user_favourites -> recipes (recipe_id));
diesel::joinable!(menu_entries -> users (user_id));
diesel::joinable!(menu_entries -> recipes (recipe_id));

diesel::allow_tables_to_appear_in_same_query!(
    users,
    ingredients,
    recipes,
    recipe_ingredients,
    user_recipes,
    user_favourites,
    menu_entries,
);
