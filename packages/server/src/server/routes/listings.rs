//! The listings controller: seven endpoints, each a direct translation to a
//! store call. Responses are a rendered view, a 302 redirect, or a plain-text
//! status body from [`AppError`].

use axum::extract::{Extension, Form, Path};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use serde::Deserialize;
use tera::Context;

use crate::domains::listings::{ListingFields, ListingInput, StoreError};
use crate::server::app::AppState;
use crate::server::error::AppError;
use crate::server::views::{render, ListingView};

/// Form payload shared by the create and edit forms. Browsers submit every
/// value as text, so the price arrives as a string and is parsed here rather
/// than rejected by the extractor.
#[derive(Debug, Deserialize)]
pub struct ListingForm {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub price: String,
    pub location: String,
    pub country: String,
}

fn parse_price(raw: &str) -> Result<f64, AppError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| AppError::Store(StoreError::Validation("price")))
}

/// 302 Found, what a browser expects after a form post.
fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}

/// GET /listings/new - render the creation form (no store access).
pub async fn new_listing(
    Extension(state): Extension<AppState>,
) -> Result<Html<String>, AppError> {
    render(&state.templates, "listings/new.html", &Context::new())
}

/// GET /listings - every listing.
pub async fn index_listings(
    Extension(state): Extension<AppState>,
) -> Result<Html<String>, AppError> {
    let all_listings = state.store.list_all().await?;
    let views: Vec<ListingView> = all_listings.iter().map(ListingView::from).collect();

    let mut context = Context::new();
    context.insert("all_listings", &views);
    render(&state.templates, "listings/index.html", &context)
}

/// GET /listings/:id - one listing's detail page.
pub async fn show_listing(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let listing = state.store.get(&id).await?.ok_or(StoreError::NotFound)?;

    let mut context = Context::new();
    context.insert("listing", &ListingView::from(&listing));
    render(&state.templates, "listings/show.html", &context)
}

/// POST /listings - create from the submitted form, then back to the index.
pub async fn create_listing(
    Extension(state): Extension<AppState>,
    Form(form): Form<ListingForm>,
) -> Result<Response, AppError> {
    let input = ListingInput {
        title: form.title,
        description: form.description,
        image_url: form.image_url,
        price: parse_price(&form.price)?,
        location: form.location,
        country: form.country,
    };

    let listing = state.store.create(input).await?;
    tracing::info!(id = %listing.id, title = %listing.title, "new listing added");

    Ok(found("/listings"))
}

/// GET /listings/:id/edit - pre-filled edit form.
pub async fn edit_listing(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let listing = state.store.get(&id).await?.ok_or(StoreError::NotFound)?;

    let mut context = Context::new();
    context.insert("listing", &ListingView::from(&listing));
    render(&state.templates, "listings/edit.html", &context)
}

/// PUT /listings/:id (via method override) - replace the five mutable fields,
/// then back to the detail page.
pub async fn update_listing(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
    Form(form): Form<ListingForm>,
) -> Result<Response, AppError> {
    let fields = ListingFields {
        title: form.title,
        description: form.description,
        price: parse_price(&form.price)?,
        location: form.location,
        country: form.country,
    };

    let listing = state.store.update(&id, fields).await?;
    tracing::info!(id = %listing.id, "listing updated");

    Ok(found(&format!("/listings/{id}")))
}

/// DELETE /listings/:id (via method override) - hard delete, then back to the
/// index. Deleting an id that is already gone still redirects.
pub async fn delete_listing(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    state.store.delete(&id).await?;
    tracing::info!(%id, "listing deleted");

    Ok(found("/listings"))
}
