//! Builders for the HTTP state over the configured storage.

use std::sync::Arc;

use tracing::info;

use cookbook::inbound::http::state::HttpState;
use cookbook::outbound::memory::{
    InMemoryIngredientRepository, InMemoryRecipeRepository, InMemoryUserRepository,
};
use cookbook::outbound::persistence::{
    DieselIngredientRepository, DieselRecipeRepository, DieselUserRepository,
};

use super::ServerConfig;

/// Wire the services over PostgreSQL when a pool is configured, otherwise
/// over empty in-memory repositories.
pub(super) fn build_http_state(config: &ServerConfig) -> HttpState {
    match &config.db_pool {
        Some(pool) => {
            info!(visibility = %config.visibility, "using PostgreSQL repositories");
            HttpState::from_repositories(
                Arc::new(DieselUserRepository::new(pool.clone())),
                Arc::new(DieselRecipeRepository::new(pool.clone())),
                Arc::new(DieselIngredientRepository::new(pool.clone())),
                config.visibility,
            )
        }
        None => {
            info!(visibility = %config.visibility, "using in-memory repositories");
            HttpState::from_repositories(
                Arc::new(InMemoryUserRepository::new()),
                Arc::new(InMemoryRecipeRepository::new()),
                Arc::new(InMemoryIngredientRepository::new()),
                config.visibility,
            )
        }
    }
}
