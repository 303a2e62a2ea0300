//! Advice proxy server binary.
//!
//! Holds the Gemini credential and exposes `POST /api/gemini` on localhost
//! so the terminal front end never sees the API key.

mod routes;

use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use jibun_core::advice::AdviceProvider;
use jibun_infrastructure::config::ServerConfig;
use jibun_infrastructure::secret::load_gemini_config;
use jibun_interaction::GeminiClient;

use crate::routes::{AppState, app};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = ServerConfig::load_default()?;

    // secret.json may pin its own model; the config file model is the default.
    let provider: Option<Arc<dyn AdviceProvider>> = match load_gemini_config()? {
        Some(secret) => {
            let model = secret.model_name.unwrap_or_else(|| config.model.clone());
            info!("Gemini credential loaded, using model {}", model);
            Some(Arc::new(GeminiClient::new(secret.api_key, model)))
        }
        None => {
            warn!("No Gemini API key configured; generation requests will be rejected");
            None
        }
    };

    let router = app(Arc::new(AppState { provider }));

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    info!("Listening on http://{}", config.listen_addr);
    axum::serve(listener, router).await?;
    Ok(())
}
