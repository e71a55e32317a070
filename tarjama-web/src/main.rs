use clap::Parser;
use tarjama::build_translator;
use tarjama_web::{AppState, ServerConfig, create_router};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::parse();

    let translator = build_translator(&config.backend)
        .map_err(|e| format!("Failed to initialize translator: {}", e))?;
    let cors = config
        .cors_layer()
        .map_err(|e| format!("Invalid CORS origin: {}", e))?;
    let state = AppState::new(translator);

    info!("Starting tarjama web server");

    let app = create_router(state, cors);

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    info!("Server running at http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
