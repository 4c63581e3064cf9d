//! Weekly menu service: planning recipes on days and deriving the grocery
//! list.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::existence::{
    map_ingredient_error, map_recipe_error, map_user_error, missing_user, require_user,
    require_visible_recipe,
};
use crate::domain::menu::aggregate_grocery_list;
use crate::domain::ports::{
    IngredientRepository, MenuCommand, MenuQuery, RecipeRepository, UserRepository,
};
use crate::domain::{
    Error, GroceryItem, IngredientId, MenuDay, Recipe, RecipeId, RecipeSummary,
    RecipeVisibility, User, UserChange, Weekday,
};

/// Service implementing the menu driving ports.
#[derive(Clone)]
pub struct MenuService<U, R, I> {
    users: Arc<U>,
    recipes: Arc<R>,
    ingredients: Arc<I>,
    visibility: RecipeVisibility,
}

impl<U, R, I> MenuService<U, R, I> {
    pub fn new(users: Arc<U>, recipes: Arc<R>, ingredients: Arc<I>) -> Self {
        Self {
            users,
            recipes,
            ingredients,
            visibility: RecipeVisibility::default(),
        }
    }

    #[must_use]
    pub fn with_visibility(mut self, visibility: RecipeVisibility) -> Self {
        self.visibility = visibility;
        self
    }
}

fn parse_day(day: &str) -> Result<Weekday, Error> {
    day.parse::<Weekday>()
        .map_err(|err| Error::invalid_value(err.to_string()))
}

fn unique_ids<T: Copy + Ord>(ids: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut ids: Vec<T> = ids.into_iter().collect();
    ids.sort_unstable();
    ids.dedup();
    ids
}

impl<U, R, I> MenuService<U, R, I>
where
    U: UserRepository,
    R: RecipeRepository,
    I: IngredientRepository,
{
    async fn load_planned(&self, user: &User) -> Result<HashMap<RecipeId, Recipe>, Error> {
        let ids = unique_ids(user.menu().entries().iter().map(|entry| entry.recipe));
        let recipes = self
            .recipes
            .find_by_ids(&ids)
            .await
            .map_err(map_recipe_error)?;
        Ok(recipes
            .into_iter()
            .map(|recipe| (recipe.id, recipe))
            .collect())
    }

    fn menu_day(user: &User, day: Weekday, planned: &HashMap<RecipeId, Recipe>) -> MenuDay {
        let recipes = user
            .menu()
            .recipes_on(day)
            .iter()
            .filter_map(|id| planned.get(id))
            .map(RecipeSummary::from)
            .collect();
        MenuDay { day, recipes }
    }

    /// Clear `day`, or the whole week when `day` is `None`.
    async fn clear_menu(&self, user_id: &str, day: Option<&str>) -> Result<(), Error> {
        let user = require_user(self.users.as_ref(), user_id).await?;
        let day = day.map(parse_day).transpose()?;
        let change = day.map_or(UserChange::ClearMenu, UserChange::ClearMenuDay);
        self.users
            .apply(user.id(), change)
            .await
            .map_err(map_user_error)?
            .ok_or_else(|| missing_user(user_id))?;
        info!(user_id, day = day.map(Weekday::as_str), "menu cleared");
        Ok(())
    }
}

#[async_trait]
impl<U, R, I> MenuCommand for MenuService<U, R, I>
where
    U: UserRepository,
    R: RecipeRepository,
    I: IngredientRepository,
{
    async fn toggle_menu_day(
        &self,
        user_id: &str,
        recipe_id: &str,
        day: &str,
    ) -> Result<bool, Error> {
        let user = require_user(self.users.as_ref(), user_id).await?;
        let day = parse_day(day)?;
        let recipe =
            require_visible_recipe(self.recipes.as_ref(), &user, self.visibility, recipe_id)
                .await?;

        let planned = self
            .users
            .apply(
                user.id(),
                UserChange::ToggleMenuEntry {
                    day,
                    recipe: recipe.id,
                },
            )
            .await
            .map_err(map_user_error)?
            .ok_or_else(|| missing_user(user_id))?;
        info!(user_id, recipe_id, %day, planned, "menu day toggled");
        Ok(planned)
    }

    async fn delete_day_menu(&self, user_id: &str, day: &str) -> Result<(), Error> {
        self.clear_menu(user_id, Some(day)).await
    }

    async fn delete_timeline_menu(&self, user_id: &str) -> Result<(), Error> {
        self.clear_menu(user_id, None).await
    }
}

#[async_trait]
impl<U, R, I> MenuQuery for MenuService<U, R, I>
where
    U: UserRepository,
    R: RecipeRepository,
    I: IngredientRepository,
{
    async fn retrieve_day(&self, user_id: &str, day: &str) -> Result<MenuDay, Error> {
        let user = require_user(self.users.as_ref(), user_id).await?;
        let day = parse_day(day)?;
        let planned = self.load_planned(&user).await?;
        Ok(Self::menu_day(&user, day, &planned))
    }

    async fn retrieve_menu(&self, user_id: &str) -> Result<Vec<MenuDay>, Error> {
        let user = require_user(self.users.as_ref(), user_id).await?;
        let planned = self.load_planned(&user).await?;
        Ok(user
            .menu()
            .planned_days()
            .into_iter()
            .map(|day| Self::menu_day(&user, day, &planned))
            .filter(|menu_day| !menu_day.recipes.is_empty())
            .collect())
    }

    async fn grocery_list(&self, user_id: &str) -> Result<Vec<GroceryItem>, Error> {
        let user = require_user(self.users.as_ref(), user_id).await?;
        if user.menu().is_empty() {
            return Err(Error::unexistence(format!(
                "menu of user with id {user_id} is empty"
            )));
        }

        let planned = self.load_planned(&user).await?;
        let ingredient_ids: Vec<IngredientId> = unique_ids(
            planned
                .values()
                .flat_map(|recipe| recipe.ingredients.iter().map(|line| line.ingredient)),
        );
        let catalogue = self
            .ingredients
            .find_by_ids(&ingredient_ids)
            .await
            .map_err(map_ingredient_error)?
            .into_iter()
            .map(|ingredient| (ingredient.id, ingredient))
            .collect();

        let items = aggregate_grocery_list(user.menu(), &planned, &catalogue);
        debug!(user_id, items = items.len(), "grocery list aggregated");
        Ok(items)
    }
}

#[cfg(test)]
#[path = "menu_service_tests.rs"]
mod tests;
