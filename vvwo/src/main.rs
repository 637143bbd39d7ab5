use tracing::info;
use tracing_subscriber::EnvFilter;

use vvwo::config::{AppConfig, ConfigError};
use vvwo::dispatch::Session;
use vvwo::nlu::{NluClient, NluError};
use vvwo::transit::{FixtureTransit, TransitError};
use vvwo::web::{AppState, create_router};

/// Errors that stop the server from starting.
#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to create NLU client: {0}")]
    Nlu(#[from] NluError),

    #[error("failed to load transit fixtures: {0}")]
    Transit(#[from] TransitError),

    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,vvwo=debug")),
        )
        .init();

    let config = AppConfig::from_env()?;

    let parser = NluClient::new(config.nlu.clone())?;
    info!(url = parser.query_url(), "using NLU service");

    let transit = FixtureTransit::load(&config.fixtures_path)?;
    info!(
        path = %config.fixtures_path.display(),
        stops = transit.stop_names().await.len(),
        "loaded transit fixtures"
    );

    let session = Session::new(parser, transit, config.dispatch.clone());
    let app = create_router(AppState::new(session));

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(addr = %config.bind_addr, "vvwo listening");
    info!("  GET    /health   - Health check");
    info!("  POST   /ask      - Parse and answer an utterance");
    info!("  GET    /results  - Current results");
    info!("  DELETE /session  - Reset the session");

    axum::serve(listener, app).await?;
    Ok(())
}
