//! PostgreSQL-backed `IngredientRepository`.
//!
//! Name uniqueness is case-insensitive and enforced by a unique index on
//! `lower(name)`; a violation surfaces as
//! [`IngredientPersistenceError::Duplicate`].

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sql_types::Text;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{IngredientPersistenceError, IngredientRepository};
use crate::domain::{Ingredient, IngredientId, IngredientName};

use super::error_mapping::{
    is_unique_violation, map_diesel_error as map_diesel, map_pool_error as map_pool,
};
use super::models::IngredientRow;
use super::pool::{DbPool, PoolError};
use super::schema::ingredients;

diesel::define_sql_function! {
    fn lower(value: Text) -> Text;
}

/// Diesel adapter for the ingredient catalogue.
#[derive(Clone)]
pub struct DieselIngredientRepository {
    pool: DbPool,
}

impl DieselIngredientRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> IngredientPersistenceError {
    map_pool(error, IngredientPersistenceError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> IngredientPersistenceError {
    map_diesel(
        error,
        IngredientPersistenceError::query,
        IngredientPersistenceError::connection,
    )
}

fn row_to_ingredient(row: IngredientRow) -> Result<Ingredient, IngredientPersistenceError> {
    let name = IngredientName::new(&row.name).map_err(|err| {
        IngredientPersistenceError::query(format!("invalid stored ingredient: {err}"))
    })?;
    Ok(Ingredient {
        id: IngredientId::from_uuid(row.id),
        name,
    })
}

fn rows_to_ingredients(
    rows: Vec<IngredientRow>,
) -> Result<Vec<Ingredient>, IngredientPersistenceError> {
    rows.into_iter().map(row_to_ingredient).collect()
}

#[async_trait]
impl IngredientRepository for DieselIngredientRepository {
    async fn find_by_ids(
        &self,
        ids: &[IngredientId],
    ) -> Result<Vec<Ingredient>, IngredientPersistenceError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let uuids: Vec<_> = ids.iter().map(|id| *id.as_uuid()).collect();
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows = ingredients::table
            .filter(ingredients::id.eq_any(uuids))
            .select(IngredientRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        rows_to_ingredients(rows)
    }

    async fn find_by_name(
        &self,
        name: &IngredientName,
    ) -> Result<Option<Ingredient>, IngredientPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = ingredients::table
            .filter(lower(ingredients::name).eq(name.folded()))
            .select(IngredientRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        row.map(row_to_ingredient).transpose()
    }

    async fn insert(&self, ingredient: &Ingredient) -> Result<(), IngredientPersistenceError> {
        let row = IngredientRow {
            id: *ingredient.id.as_uuid(),
            name: ingredient.name.to_string(),
        };
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::insert_into(ingredients::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|error| {
                if is_unique_violation(&error) {
                    IngredientPersistenceError::duplicate(ingredient.name.to_string())
                } else {
                    map_diesel_error(error)
                }
            })
    }

    async fn list(&self) -> Result<Vec<Ingredient>, IngredientPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows = ingredients::table
            .order_by((lower(ingredients::name), ingredients::id))
            .select(IngredientRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        rows_to_ingredients(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use uuid::Uuid;

    #[rstest]
    fn converts_stored_row() {
        let id = Uuid::new_v4();
        let ingredient = row_to_ingredient(IngredientRow {
            id,
            name: "Saffron".to_owned(),
        })
        .expect("valid row");

        assert_eq!(ingredient.id, IngredientId::from_uuid(id));
        assert_eq!(ingredient.name.as_ref(), "Saffron");
    }

    #[rstest]
    fn rejects_blank_stored_name() {
        let err = row_to_ingredient(IngredientRow {
            id: Uuid::new_v4(),
            name: "   ".to_owned(),
        })
        .expect_err("blank name");

        assert!(matches!(err, IngredientPersistenceError::Query { .. }));
    }
}
