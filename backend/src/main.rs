//! Backend entry-point: loads settings, prepares storage and serves the REST
//! API with its OpenAPI docs.

mod server;

use actix_web::web;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use cookbook::inbound::http::health::HealthState;
use cookbook::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use cookbook::settings::ServerSettings;
use ortho_config::OrthoConfig as _;

use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load().map_err(std::io::Error::other)?;
    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;
    let visibility = settings.visibility().map_err(std::io::Error::other)?;

    let mut config = ServerConfig::new(bind_addr).with_visibility(visibility);
    let pool = match settings.database_url.as_deref() {
        Some(database_url) => {
            if settings.migrate() {
                run_pending_migrations(database_url)
                    .await
                    .map_err(std::io::Error::other)?;
            }
            let pool = DbPool::new(PoolConfig::new(database_url))
                .await
                .map_err(std::io::Error::other)?;
            config = config.with_db_pool(pool.clone());
            Some(pool)
        }
        None => {
            warn!("no database configured; data will not outlive the process");
            None
        }
    };

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, &config)?;
    info!(%bind_addr, "listening");
    let outcome = server.await;

    drop(config);
    if let Some(pool) = pool {
        pool.close();
    }
    outcome
}
