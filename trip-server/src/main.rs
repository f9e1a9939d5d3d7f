use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use trip_server::auth::IdentityClient;
use trip_server::catalog::{CatalogClient, CatalogStore, FileCatalog};
use trip_server::config::{CatalogSourceConfig, ServerConfig};
use trip_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,trip_server=debug")),
        )
        .init();

    let config = ServerConfig::from_env()?;

    // Fetch the catalog once; a failed fetch still starts the server
    let catalog = match &config.catalog {
        CatalogSourceConfig::File(path) => CatalogStore::load(&FileCatalog::new(path)).await,
        source @ CatalogSourceConfig::Http { .. } => {
            let client = source.client_config().map(CatalogClient::new).transpose();
            match client {
                Ok(Some(client)) => CatalogStore::load(&client).await,
                Ok(None) => CatalogStore::unavailable("no catalog client configured"),
                Err(e) => {
                    error!(error = %e, "failed to create catalog client");
                    CatalogStore::unavailable(e.to_string())
                }
            }
        }
    };

    let identity = match config.identity.clone().map(IdentityClient::new).transpose() {
        Ok(Some(client)) => Some(client),
        Ok(None) => {
            warn!("IDENTITY_URL not set; admin routes are disabled");
            None
        }
        Err(e) => {
            error!(error = %e, "failed to create identity client; admin routes are disabled");
            None
        }
    };

    let app = create_router(AppState::new(catalog, identity), &config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(addr = %config.bind_addr, "trip discovery server listening");
    info!("  GET  /                   - Discovery page");
    info!("  GET  /health             - Health check");
    info!("  GET  /api/trips          - Search, filter and sort trips");
    info!("  GET  /api/trips/facets   - Filter panel options");
    info!("  GET  /api/trips/:id      - Single trip");
    info!("  GET  /api/admin/catalog  - Catalog status (admin)");

    axum::serve(listener, app).await?;
    Ok(())
}
