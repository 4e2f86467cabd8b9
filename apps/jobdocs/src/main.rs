mod config;
mod docstore;
mod errors;
mod formatting;
mod generation;
mod google;
mod llm_client;
mod routes;
mod sheet;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::generation::pipeline::DocumentPipeline;
use crate::google::docs::DocsClient;
use crate::google::sheets::SheetsClient;
use crate::google::GoogleClient;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first; a missing secret or folder id stops startup here
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting jobdocs v{}", env!("CARGO_PKG_VERSION"));

    // Initialize Google backends
    let google = GoogleClient::new(config.google_access_token.clone())?;
    let sheet = SheetsClient::new(
        google.clone(),
        config.spreadsheet_id.clone(),
        config.sheet_name.clone(),
    );
    let documents = DocsClient::new(google, config.docs_folder_id.clone());
    info!(
        "Google clients initialized (sheet: '{}', folder: {})",
        config.sheet_name, config.docs_folder_id
    );

    // Initialize LLM client
    let llm = LlmClient::new(&config)?;
    info!("LLM client initialized (deployment: {})", llm.model());

    let pipeline = DocumentPipeline::new(Arc::new(sheet), Arc::new(documents), Arc::new(llm))
        .with_jd_policy(config.jd_content_policy);
    info!("JD content policy: {:?}", config.jd_content_policy);
    let state = AppState { pipeline };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
