//! PostgreSQL persistence adapters built on Diesel.
//!
//! Repositories translate between Diesel row structs (`models`) and domain
//! aggregates; they contain no business rules. Connections come from a
//! [`DbPool`] (`bb8` over `diesel-async`) created once at start-up, and the
//! schema is brought up to date with [`run_pending_migrations`].
//!
//! ```ignore
//! use cookbook::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/cookbook")).await?;
//! let users = DieselUserRepository::new(pool.clone());
//! ```

mod diesel_ingredient_repository;
mod diesel_recipe_repository;
mod diesel_user_repository;
mod error_mapping;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_ingredient_repository::DieselIngredientRepository;
pub use diesel_recipe_repository::DieselRecipeRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
