//! movements-server entry point.
//!
//! Loads settings, sets up tracing, builds the shared state and serves the
//! router. Handlers live in `routes.rs`.

use std::sync::Arc;

use anyhow::Context;
use movements_core::models::settings::Settings;
use movements_server::{routes, state};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{info, Level};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Silent if the file does not exist; production injects env vars directly.
    let _ = dotenvy::from_filename(".env.local");

    let settings = Settings::from_env().context("invalid configuration")?;
    init_tracing(&settings.log_filter);

    let shared = Arc::new(state::AppState::from_settings(&settings).context("failed to build service")?);
    info!(
        upstream = %settings.upstream_base_url,
        products_file = ?settings.products_file,
        "movements core ready"
    );

    let app = routes::build_router(shared).layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO)),
    );

    info!("movements-server listening on http://{}", settings.bind_addr);
    axum::serve(tokio::net::TcpListener::bind(settings.bind_addr).await?, app)
        .await
        .context("server crashed")?;

    Ok(())
}

fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .init();
}
