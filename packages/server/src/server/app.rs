//! Application setup and router wiring.

use std::sync::Arc;

use axum::extract::Extension;
use axum::middleware;
use axum::routing::get;
use axum::Router;
use mongodb::Database;
use tera::Tera;
use tower_http::trace::TraceLayer;

use crate::domains::listings::ListingStore;
use crate::server::middleware::method_override;
use crate::server::routes::{
    create_listing, delete_listing, edit_listing, health_handler, home_handler, index_listings,
    new_listing, show_listing, update_listing,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: ListingStore,
    pub database: Database,
    pub templates: Arc<Tera>,
}

/// Build the Axum application router.
///
/// The method-override layer must wrap the router so the rewritten verb is
/// what routing sees; `/listings/new` is registered alongside `/listings/:id`
/// and wins because it is the more specific match.
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/health", get(health_handler))
        .route("/listings", get(index_listings).post(create_listing))
        .route("/listings/new", get(new_listing))
        .route(
            "/listings/:id",
            get(show_listing).put(update_listing).delete(delete_listing),
        )
        .route("/listings/:id/edit", get(edit_listing))
        .layer(middleware::from_fn(method_override))
        .layer(TraceLayer::new_for_http())
        .layer(Extension(state))
}
