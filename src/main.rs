mod model;
mod server;

use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::AppError,
    router,
    startup,
    state::{AppState, AuthConfig},
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let state = AppState::new(db, AuthConfig::from_config(&config));

    if state.auth.test_mode {
        tracing::warn!("AUTH_TEST_MODE is enabled: all requests run as a fixed admin identity");
    }

    let app = router::router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Resort management API listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
