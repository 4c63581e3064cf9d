//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use cookbook::domain::RecipeVisibility;
use cookbook::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) visibility: RecipeVisibility,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            visibility: RecipeVisibility::default(),
            db_pool: None,
        }
    }

    /// Restrict which recipes a user may search and plan.
    #[must_use]
    pub fn with_visibility(mut self, visibility: RecipeVisibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Attach a database connection pool for persistence adapters.
    ///
    /// Without one the server keeps users, recipes and ingredients in memory.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }
}
