mod classifier;
mod config;
mod errors;
mod extraction;
mod routes;
mod screening;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::classifier::ModelArtifacts;
use crate::config::Config;
use crate::routes::build_router;
use crate::screening::vocabulary::SkillVocabulary;
use crate::screening::ScreeningContext;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Screener API v{}", env!("CARGO_PKG_VERSION"));

    let screening = load_screening_context(&config)?;

    let state = AppState {
        config: config.clone(),
        screening: Arc::new(screening),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Loads the skill vocabulary and classifier artifacts. Runs once; the result is
/// shared read-only by every request.
fn load_screening_context(config: &Config) -> Result<ScreeningContext> {
    let vocabulary = match &config.skills_path {
        Some(path) => SkillVocabulary::from_file(path)?,
        None => SkillVocabulary::builtin(),
    };
    info!("Skill vocabulary loaded ({} skills)", vocabulary.len());

    let classifier = ModelArtifacts::load(&config.model_path)
        .and_then(ModelArtifacts::into_classifier)
        .with_context(|| {
            format!(
                "Failed to load classifier artifacts from '{}'",
                config.model_path.display()
            )
        })?;

    Ok(ScreeningContext {
        vocabulary,
        classifier,
    })
}
