// Main entry point for the travel listings server

use std::sync::Arc;

use anyhow::{Context, Result};
use mongodb::bson::doc;
use mongodb::Client;
use server_core::domains::listings::ListingStore;
use server_core::server::views::build_templates;
use server_core::server::{build_app, AppState};
use server_core::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Travel Listings server");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    // Connect to database
    tracing::info!("Connecting to database...");
    let client = Client::with_uri_str(&config.mongo_url)
        .await
        .context("Invalid MongoDB connection string")?;
    let database = client.database(&config.database_name);

    // The driver connects lazily; ping once so a dead database shows up in
    // the logs at startup. The server still comes up degraded if this fails.
    match database.run_command(doc! { "ping": 1 }).await {
        Ok(_) => tracing::info!("MongoDB connected successfully"),
        Err(error) => tracing::error!(%error, "MongoDB connection failed"),
    }

    // Load templates
    let templates = build_templates().context("Failed to load templates")?;
    tracing::info!("Templates loaded");

    // Build application
    let state = AppState {
        store: ListingStore::new(&client, &config.database_name),
        database,
        templates: Arc::new(templates),
    };
    let app = build_app(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Listings index: http://localhost:{}/listings", config.port);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
