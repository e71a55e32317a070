use axum::http::{HeaderValue, Method, header};
use clap::Parser;
use std::net::SocketAddr;
use tarjama::BackendConfig;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// tarjama web server: translation and word-count API
#[derive(Parser, Debug, Clone)]
#[command(name = "tarjama-web", version, about)]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "TARJAMA_BIND", default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,

    /// Origins allowed to call the API from a browser (comma separated).
    /// Any origin is allowed when none are given.
    #[arg(long = "cors-origin", env = "TARJAMA_CORS_ORIGINS", value_delimiter = ',')]
    pub cors_origins: Vec<String>,

    #[command(flatten)]
    pub backend: BackendConfig,
}

impl ServerConfig {
    pub fn cors_layer(&self) -> Result<CorsLayer, header::InvalidHeaderValue> {
        let origins = self
            .cors_origins
            .iter()
            .map(|origin| origin.trim())
            .filter(|origin| !origin.is_empty())
            .map(HeaderValue::from_str)
            .collect::<Result<Vec<_>, _>>()?;

        if origins.is_empty() {
            return Ok(CorsLayer::permissive());
        }

        Ok(CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE]))
    }
}
