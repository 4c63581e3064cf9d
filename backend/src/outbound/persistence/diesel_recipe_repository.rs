//! PostgreSQL-backed `RecipeRepository`.

use std::collections::HashMap;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::AsyncConnection as _;
use diesel_async::scoped_futures::ScopedFutureExt as _;
use diesel_async::{AsyncPgConnection, RunQueryDsl};
use uuid::Uuid;

use crate::domain::ports::{RecipePersistenceError, RecipeRepository};
use crate::domain::{IngredientId, Recipe, RecipeId, RecipeIngredient};

use super::error_mapping::{map_diesel_error as map_diesel, map_pool_error as map_pool};
use super::models::{NewRecipeRow, RecipeIngredientRow, RecipeRow};
use super::pool::{DbPool, PoolError};
use super::schema::{recipe_ingredients, recipes};

/// Diesel adapter for recipes and their ingredient lines.
#[derive(Clone)]
pub struct DieselRecipeRepository {
    pool: DbPool,
}

impl DieselRecipeRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> RecipePersistenceError {
    map_pool(error, RecipePersistenceError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> RecipePersistenceError {
    map_diesel(
        error,
        RecipePersistenceError::query,
        RecipePersistenceError::connection,
    )
}

/// Reassemble recipes from their rows, ordered like `ids`.
///
/// `lines` must already be sorted by position within each recipe.
fn assemble(
    ids: &[RecipeId],
    rows: Vec<RecipeRow>,
    lines: Vec<RecipeIngredientRow>,
) -> Result<Vec<Recipe>, RecipePersistenceError> {
    let mut grouped: HashMap<Uuid, Vec<RecipeIngredient>> = HashMap::new();
    for line in lines {
        grouped
            .entry(line.recipe_id)
            .or_default()
            .push(RecipeIngredient {
                ingredient: IngredientId::from_uuid(line.ingredient_id),
                quantity: line.quantity,
            });
    }

    let mut by_id: HashMap<Uuid, Recipe> = HashMap::with_capacity(rows.len());
    for row in rows {
        let time = u32::try_from(row.time_minutes).map_err(|_| {
            RecipePersistenceError::query(format!("invalid stored time {}", row.time_minutes))
        })?;
        let ingredients = grouped.remove(&row.id).unwrap_or_default();
        by_id.insert(
            row.id,
            Recipe {
                id: RecipeId::from_uuid(row.id),
                name: row.name,
                author: row.author,
                description: row.description,
                time,
                ingredients,
            },
        );
    }

    // Duplicate ids in the request yield the recipe once, at its first slot.
    Ok(ids
        .iter()
        .filter_map(|id| by_id.remove(id.as_uuid()))
        .collect())
}

fn line_rows(recipe: &Recipe) -> Result<Vec<RecipeIngredientRow>, RecipePersistenceError> {
    recipe
        .ingredients
        .iter()
        .enumerate()
        .map(|(index, line)| {
            let position = i32::try_from(index)
                .map_err(|_| RecipePersistenceError::query("too many ingredient lines"))?;
            Ok(RecipeIngredientRow {
                recipe_id: *recipe.id.as_uuid(),
                position,
                ingredient_id: *line.ingredient.as_uuid(),
                quantity: line.quantity,
            })
        })
        .collect()
}

type RecipeRows = (Vec<RecipeRow>, Vec<RecipeIngredientRow>);

impl DieselRecipeRepository {
    async fn load_rows(
        conn: &mut AsyncPgConnection,
        ids: Vec<Uuid>,
    ) -> Result<RecipeRows, RecipePersistenceError> {
        conn.transaction(|conn| {
            async move {
                let rows = recipes::table
                    .filter(recipes::id.eq_any(ids.clone()))
                    .select(RecipeRow::as_select())
                    .load(conn)
                    .await?;
                let lines = recipe_ingredients::table
                    .filter(recipe_ingredients::recipe_id.eq_any(ids))
                    .order_by((recipe_ingredients::recipe_id, recipe_ingredients::position))
                    .select(RecipeIngredientRow::as_select())
                    .load(conn)
                    .await?;
                Ok((rows, lines))
            }
            .scope_boxed()
        })
        .await
        .map_err(map_diesel_error)
    }
}

#[async_trait]
impl RecipeRepository for DieselRecipeRepository {
    async fn find_by_ids(&self, ids: &[RecipeId]) -> Result<Vec<Recipe>, RecipePersistenceError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let uuids: Vec<Uuid> = ids.iter().map(|id| *id.as_uuid()).collect();
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let (rows, lines) = Self::load_rows(&mut conn, uuids).await?;
        assemble(ids, rows, lines)
    }

    async fn find_by_id(&self, id: &RecipeId) -> Result<Option<Recipe>, RecipePersistenceError> {
        Ok(self
            .find_by_ids(std::slice::from_ref(id))
            .await?
            .into_iter()
            .next())
    }

    async fn insert(&self, recipe: &Recipe) -> Result<(), RecipePersistenceError> {
        let time_minutes = i32::try_from(recipe.time)
            .map_err(|_| RecipePersistenceError::query("preparation time out of range"))?;
        let row = NewRecipeRow {
            id: *recipe.id.as_uuid(),
            name: &recipe.name,
            author: &recipe.author,
            description: &recipe.description,
            time_minutes,
        };
        let lines = line_rows(recipe)?;

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        conn.transaction(|conn| {
            async move {
                diesel::insert_into(recipes::table)
                    .values(&row)
                    .execute(conn)
                    .await?;
                if !lines.is_empty() {
                    diesel::insert_into(recipe_ingredients::table)
                        .values(&lines)
                        .execute(conn)
                        .await?;
                }
                Ok::<_, diesel::result::Error>(())
            }
            .scope_boxed()
        })
        .await
        .map_err(map_diesel_error)
    }

    async fn delete(&self, id: &RecipeId) -> Result<(), RecipePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        // Ingredient lines, ownership, favourites and menu entries cascade.
        diesel::delete(recipes::table.filter(recipes::id.eq(id.as_uuid())))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }
}
