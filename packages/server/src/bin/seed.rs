// One-shot database seeder: wipes the listings collection and installs the
// fixture dataset. Runs independently of the HTTP server; any failure aborts
// with a non-zero exit, no retries.

use anyhow::{Context, Result};
use mongodb::Client;
use server_core::domains::listings::fixtures::fixtures;
use server_core::domains::listings::ListingStore;
use server_core::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;

    tracing::info!(url = %config.mongo_url, database = %config.database_name, "Connecting to database");
    let client = Client::with_uri_str(&config.mongo_url)
        .await
        .context("Invalid MongoDB connection string")?;
    let store = ListingStore::new(&client, &config.database_name);

    store
        .delete_all()
        .await
        .context("Failed to clear the listings collection")?;
    tracing::info!("Cleared the listings collection");

    let inserted = store
        .bulk_create(fixtures())
        .await
        .context("Failed to insert fixture data")?;
    tracing::info!(inserted, "Seed data was inserted");

    Ok(())
}
