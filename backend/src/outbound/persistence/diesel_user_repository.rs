//! PostgreSQL-backed `UserRepository`.
//!
//! A user aggregate spans four tables. Reads run in one transaction so the
//! collections observe a single snapshot; `save` replaces the collections
//! wholesale inside one transaction. `apply` locks the user row with
//! `SELECT ... FOR UPDATE`, so concurrent changes to the same user queue up
//! behind each other instead of overwriting one another.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::upsert::excluded;
use diesel_async::AsyncConnection as _;
use diesel_async::scoped_futures::ScopedFutureExt as _;
use diesel_async::{AsyncPgConnection, RunQueryDsl};
use uuid::Uuid;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{MenuEntry, RecipeId, User, UserChange, UserId, Weekday, WeeklyMenu};

use super::error_mapping::{map_diesel_error as map_diesel, map_pool_error as map_pool};
use super::models::{MenuEntryRow, UserFavouriteRow, UserRecipeRow, UserRow, UserUpsert};
use super::pool::{DbPool, PoolError};
use super::schema::{menu_entries, user_favourites, user_recipes, users};

/// Diesel adapter for user aggregates.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> UserPersistenceError {
    map_pool(error, UserPersistenceError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> UserPersistenceError {
    map_diesel(
        error,
        UserPersistenceError::query,
        UserPersistenceError::connection,
    )
}

/// Failure inside a locked read-modify-write transaction.
#[derive(Debug)]
enum ChangeError {
    Diesel(diesel::result::Error),
    Stored(UserPersistenceError),
}

impl From<diesel::result::Error> for ChangeError {
    fn from(error: diesel::result::Error) -> Self {
        Self::Diesel(error)
    }
}

impl From<UserPersistenceError> for ChangeError {
    fn from(error: UserPersistenceError) -> Self {
        Self::Stored(error)
    }
}

impl From<ChangeError> for UserPersistenceError {
    fn from(error: ChangeError) -> Self {
        match error {
            ChangeError::Diesel(error) => map_diesel_error(error),
            ChangeError::Stored(error) => error,
        }
    }
}

type UserRows = (
    UserRow,
    Vec<UserRecipeRow>,
    Vec<UserFavouriteRow>,
    Vec<MenuEntryRow>,
);

fn position(index: usize) -> Result<i32, UserPersistenceError> {
    i32::try_from(index).map_err(|_| UserPersistenceError::query("user collection is too large"))
}

fn recipe_ids(rows: impl IntoIterator<Item = Uuid>) -> Vec<RecipeId> {
    rows.into_iter().map(RecipeId::from_uuid).collect()
}

fn row_to_user(rows: UserRows) -> Result<User, UserPersistenceError> {
    let (user, owned, favourites, menu) = rows;
    let entries = menu
        .into_iter()
        .map(|row| {
            Weekday::from_index(row.weekday)
                .map(|day| MenuEntry {
                    day,
                    recipe: RecipeId::from_uuid(row.recipe_id),
                })
                .ok_or_else(|| {
                    UserPersistenceError::query(format!("invalid stored weekday {}", row.weekday))
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let aggregate = User::try_new(
        UserId::from_uuid(user.id),
        &user.name,
        &user.surname,
        &user.email,
    )
    .map_err(|err| UserPersistenceError::query(format!("invalid stored user: {err}")))?;

    Ok(aggregate.with_collections(
        recipe_ids(owned.into_iter().map(|row| row.recipe_id)),
        recipe_ids(favourites.into_iter().map(|row| row.recipe_id)),
        WeeklyMenu::from_entries(entries),
    ))
}

struct CollectionRows {
    owned: Vec<UserRecipeRow>,
    favourites: Vec<UserFavouriteRow>,
    menu: Vec<MenuEntryRow>,
}

impl CollectionRows {
    fn from_user(user: &User) -> Result<Self, UserPersistenceError> {
        let user_id = *user.id().as_uuid();
        let owned = user
            .recipes()
            .iter()
            .enumerate()
            .map(|(index, recipe)| {
                Ok(UserRecipeRow {
                    user_id,
                    recipe_id: *recipe.as_uuid(),
                    position: position(index)?,
                })
            })
            .collect::<Result<_, UserPersistenceError>>()?;
        let favourites = user
            .favourites()
            .iter()
            .enumerate()
            .map(|(index, recipe)| {
                Ok(UserFavouriteRow {
                    user_id,
                    recipe_id: *recipe.as_uuid(),
                    position: position(index)?,
                })
            })
            .collect::<Result<_, UserPersistenceError>>()?;
        let menu = user
            .menu()
            .entries()
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                Ok(MenuEntryRow {
                    user_id,
                    weekday: entry.day.index(),
                    recipe_id: *entry.recipe.as_uuid(),
                    position: position(index)?,
                })
            })
            .collect::<Result<_, UserPersistenceError>>()?;
        Ok(Self {
            owned,
            favourites,
            menu,
        })
    }
}

async fn read_rows(
    conn: &mut AsyncPgConnection,
    id: Uuid,
) -> QueryResult<Option<UserRows>> {
    let Some(user) = users::table
        .filter(users::id.eq(id))
        .select(UserRow::as_select())
        .first(conn)
        .await
        .optional()?
    else {
        return Ok(None);
    };
    let owned = user_recipes::table
        .filter(user_recipes::user_id.eq(id))
        .order_by(user_recipes::position)
        .select(UserRecipeRow::as_select())
        .load(conn)
        .await?;
    let favourites = user_favourites::table
        .filter(user_favourites::user_id.eq(id))
        .order_by(user_favourites::position)
        .select(UserFavouriteRow::as_select())
        .load(conn)
        .await?;
    let menu = menu_entries::table
        .filter(menu_entries::user_id.eq(id))
        .order_by(menu_entries::position)
        .select(MenuEntryRow::as_select())
        .load(conn)
        .await?;
    Ok(Some((user, owned, favourites, menu)))
}

/// Replace the stored collections of `user_id` with `collections`.
async fn write_collections(
    conn: &mut AsyncPgConnection,
    user_id: Uuid,
    collections: &CollectionRows,
) -> QueryResult<()> {
    diesel::delete(user_recipes::table.filter(user_recipes::user_id.eq(user_id)))
        .execute(conn)
        .await?;
    if !collections.owned.is_empty() {
        diesel::insert_into(user_recipes::table)
            .values(&collections.owned)
            .execute(conn)
            .await?;
    }

    diesel::delete(user_favourites::table.filter(user_favourites::user_id.eq(user_id)))
        .execute(conn)
        .await?;
    if !collections.favourites.is_empty() {
        diesel::insert_into(user_favourites::table)
            .values(&collections.favourites)
            .execute(conn)
            .await?;
    }

    diesel::delete(menu_entries::table.filter(menu_entries::user_id.eq(user_id)))
        .execute(conn)
        .await?;
    if !collections.menu.is_empty() {
        diesel::insert_into(menu_entries::table)
            .values(&collections.menu)
            .execute(conn)
            .await?;
    }
    Ok(())
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        let user_id = *id.as_uuid();
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        conn.transaction(|conn| async move { read_rows(conn, user_id).await }.scope_boxed())
            .await
            .map_err(map_diesel_error)?
            .map(row_to_user)
            .transpose()
    }

    async fn save(&self, user: &User) -> Result<(), UserPersistenceError> {
        let user_id = *user.id().as_uuid();
        let upsert = UserUpsert {
            id: user_id,
            name: user.name().as_ref(),
            surname: user.surname().as_ref(),
            email: user.email().as_ref(),
        };
        let collections = CollectionRows::from_user(user)?;

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        conn.transaction(|conn| {
            async move {
                diesel::insert_into(users::table)
                    .values(&upsert)
                    .on_conflict(users::id)
                    .do_update()
                    .set((
                        users::name.eq(excluded(users::name)),
                        users::surname.eq(excluded(users::surname)),
                        users::email.eq(excluded(users::email)),
                        users::updated_at.eq(diesel::dsl::now),
                    ))
                    .execute(conn)
                    .await?;
                write_collections(conn, user_id, &collections).await
            }
            .scope_boxed()
        })
        .await
        .map_err(map_diesel_error)
    }

    async fn apply(
        &self,
        id: &UserId,
        change: UserChange,
    ) -> Result<Option<bool>, UserPersistenceError> {
        let user_id = *id.as_uuid();
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let outcome = conn
            .transaction::<_, ChangeError, _>(|conn| {
                async move {
                    let locked: Option<Uuid> = users::table
                        .filter(users::id.eq(user_id))
                        .select(users::id)
                        .for_update()
                        .first(conn)
                        .await
                        .optional()?;
                    if locked.is_none() {
                        return Ok(None);
                    }
                    let Some(rows) = read_rows(conn, user_id).await? else {
                        return Ok(None);
                    };
                    let mut user = row_to_user(rows)?;
                    let outcome = user.apply(change);
                    let collections = CollectionRows::from_user(&user)?;
                    write_collections(conn, user_id, &collections).await?;
                    Ok(Some(outcome))
                }
                .scope_boxed()
            })
            .await?;
        Ok(outcome)
    }
}
