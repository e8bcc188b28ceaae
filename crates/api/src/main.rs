use std::env;

use anyhow::Result;
use wanderpeak_api::build_app;
use wanderpeak_observability::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing("wanderpeak_api");

    let bind = env::var("WANDERPEAK_BIND").unwrap_or_else(|_| "0.0.0.0:5000".to_string());

    let app = build_app();

    let listener = tokio::net::TcpListener::bind(&bind).await?;
    tracing::info!(bind = %bind, "wanderpeak chatbot api started");

    axum::serve(listener, app).await?;
    Ok(())
}
