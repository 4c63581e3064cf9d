//! In-process repositories for database-less runs and tests.
//!
//! These adapters hold everything in `Mutex`-guarded maps and implement the
//! same ports as the Diesel adapters. A poisoned lock is reported as a query
//! error rather than a panic.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{
    IngredientPersistenceError, IngredientRepository, RecipePersistenceError, RecipeRepository,
    UserPersistenceError, UserRepository,
};
use crate::domain::{
    Ingredient, IngredientId, IngredientName, Recipe, RecipeId, User, UserChange, UserId,
};

fn guard<'a, T, E>(
    lock: &'a Mutex<T>,
    on_poison: impl FnOnce() -> E,
) -> Result<MutexGuard<'a, T>, E> {
    lock.lock().map_err(|_| on_poison())
}

/// Users keyed by identifier.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<UserId, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a repository with `users`.
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let map = users.into_iter().map(|user| (*user.id(), user)).collect();
        Self {
            users: Mutex::new(map),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        let users = guard(&self.users, || UserPersistenceError::query("user store poisoned"))?;
        Ok(users.get(id).cloned())
    }

    async fn save(&self, user: &User) -> Result<(), UserPersistenceError> {
        let mut users = guard(&self.users, || UserPersistenceError::query("user store poisoned"))?;
        users.insert(*user.id(), user.clone());
        Ok(())
    }

    async fn apply(
        &self,
        id: &UserId,
        change: UserChange,
    ) -> Result<Option<bool>, UserPersistenceError> {
        let mut users = guard(&self.users, || UserPersistenceError::query("user store poisoned"))?;
        Ok(users.get_mut(id).map(|user| user.apply(change)))
    }
}

/// Recipes keyed by identifier.
#[derive(Debug, Default)]
pub struct InMemoryRecipeRepository {
    recipes: Mutex<HashMap<RecipeId, Recipe>>,
}

impl InMemoryRecipeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_recipes(recipes: impl IntoIterator<Item = Recipe>) -> Self {
        let map = recipes.into_iter().map(|recipe| (recipe.id, recipe)).collect();
        Self {
            recipes: Mutex::new(map),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<RecipeId, Recipe>>, RecipePersistenceError> {
        guard(&self.recipes, || {
            RecipePersistenceError::query("recipe store poisoned")
        })
    }
}

#[async_trait]
impl RecipeRepository for InMemoryRecipeRepository {
    async fn find_by_ids(&self, ids: &[RecipeId]) -> Result<Vec<Recipe>, RecipePersistenceError> {
        let recipes = self.lock()?;
        Ok(ids.iter().filter_map(|id| recipes.get(id).cloned()).collect())
    }

    async fn find_by_id(&self, id: &RecipeId) -> Result<Option<Recipe>, RecipePersistenceError> {
        Ok(self.lock()?.get(id).cloned())
    }

    async fn insert(&self, recipe: &Recipe) -> Result<(), RecipePersistenceError> {
        let mut recipes = self.lock()?;
        if recipes.contains_key(&recipe.id) {
            return Err(RecipePersistenceError::query(format!(
                "recipe {} already stored",
                recipe.id
            )));
        }
        recipes.insert(recipe.id, recipe.clone());
        Ok(())
    }

    async fn delete(&self, id: &RecipeId) -> Result<(), RecipePersistenceError> {
        self.lock()?.remove(id);
        Ok(())
    }
}

/// Ingredient catalogue keyed by identifier.
#[derive(Debug, Default)]
pub struct InMemoryIngredientRepository {
    ingredients: Mutex<HashMap<IngredientId, Ingredient>>,
}

impl InMemoryIngredientRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ingredients(ingredients: impl IntoIterator<Item = Ingredient>) -> Self {
        let map = ingredients
            .into_iter()
            .map(|ingredient| (ingredient.id, ingredient))
            .collect();
        Self {
            ingredients: Mutex::new(map),
        }
    }

    fn lock(
        &self,
    ) -> Result<MutexGuard<'_, HashMap<IngredientId, Ingredient>>, IngredientPersistenceError> {
        guard(&self.ingredients, || {
            IngredientPersistenceError::query("ingredient store poisoned")
        })
    }
}

#[async_trait]
impl IngredientRepository for InMemoryIngredientRepository {
    async fn find_by_ids(
        &self,
        ids: &[IngredientId],
    ) -> Result<Vec<Ingredient>, IngredientPersistenceError> {
        let ingredients = self.lock()?;
        Ok(ids
            .iter()
            .filter_map(|id| ingredients.get(id).cloned())
            .collect())
    }

    async fn find_by_name(
        &self,
        name: &IngredientName,
    ) -> Result<Option<Ingredient>, IngredientPersistenceError> {
        let folded = name.folded();
        Ok(self
            .lock()?
            .values()
            .find(|ingredient| ingredient.name.folded() == folded)
            .cloned())
    }

    async fn insert(&self, ingredient: &Ingredient) -> Result<(), IngredientPersistenceError> {
        let mut ingredients = self.lock()?;
        let folded = ingredient.name.folded();
        if ingredients
            .values()
            .any(|existing| existing.name.folded() == folded)
        {
            return Err(IngredientPersistenceError::duplicate(
                ingredient.name.to_string(),
            ));
        }
        ingredients.insert(ingredient.id, ingredient.clone());
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Ingredient>, IngredientPersistenceError> {
        let mut all: Vec<Ingredient> = self.lock()?.values().cloned().collect();
        all.sort_by(|a, b| {
            a.name
                .folded()
                .cmp(&b.name.folded())
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(all)
    }
}
