use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use promptpix::{api, config, GenImgClient};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    config::Config::dotenv_load();
    let config = match config::Config::new() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            std::process::exit(2);
        }
    };
    config::Config::log_env_vars();

    let generator = GenImgClient::new(config.genimg_url.clone()).with_timeout(config.request_timeout);
    let state = Arc::new(api::routes::AppState::new(Arc::new(generator)));
    let app = api::routes::router(state);

    let socket_address = config.socket_addr();
    tracing::info!("listening on {}", socket_address);
    let server = axum::Server::bind(&socket_address)
        .serve(app.into_make_service())
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for shutdown signal: {}", e);
            }
            tracing::info!("shutting down");
        });
    if let Err(e) = server.await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
