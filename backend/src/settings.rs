//! Server settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `COOKBOOK_*` environment variables and the
//! configuration file, in decreasing order of precedence.

use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::{RecipeVisibility, RecipeVisibilityParseError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Invalid setting value.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("bind address {value} is invalid: {source}")]
    BindAddr {
        value: String,
        source: std::net::AddrParseError,
    },
    #[error(transparent)]
    Visibility(#[from] RecipeVisibilityParseError),
}

/// Settings controlling the HTTP server and its storage.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "COOKBOOK")]
pub struct ServerSettings {
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// PostgreSQL URL. Without one the server keeps everything in memory.
    pub database_url: Option<String>,
    /// Apply pending migrations at start-up. Unset means yes.
    pub migrate: Option<bool>,
    /// Recipes searchable by a user: `owned` or `owned_and_favourites`.
    pub visibility: Option<String>,
}

impl ServerSettings {
    /// Parsed bind address, defaulting to `0.0.0.0:8080`.
    ///
    /// # Errors
    /// [`SettingsError::BindAddr`] when the value is not a socket address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let value = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        value.parse().map_err(|source| SettingsError::BindAddr {
            value: value.to_owned(),
            source,
        })
    }

    /// Whether embedded migrations run before the server starts.
    #[must_use]
    pub fn migrate(&self) -> bool {
        self.migrate.unwrap_or(true)
    }

    /// Parsed visibility scope, defaulting to owned recipes only.
    ///
    /// # Errors
    /// [`SettingsError::Visibility`] for an unknown scope name.
    pub fn visibility(&self) -> Result<RecipeVisibility, SettingsError> {
        self.visibility
            .as_deref()
            .map_or(Ok(RecipeVisibility::default()), str::parse)
            .map_err(SettingsError::from)
    }
}
