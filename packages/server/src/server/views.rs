//! Template engine setup and the presentation shape handed to templates.

use axum::response::Html;
use serde::Serialize;
use tera::{Context, Tera};

use crate::domains::listings::Listing;
use crate::server::error::AppError;

/// Load the template engine once at startup. Templates live under
/// `templates/` next to the package manifest.
pub fn build_templates() -> anyhow::Result<Tera> {
    let glob = concat!(env!("CARGO_MANIFEST_DIR"), "/templates/**/*.html");
    Ok(Tera::new(glob)?)
}

/// Render one template into a full HTML response.
pub fn render(templates: &Tera, name: &str, context: &Context) -> Result<Html<String>, AppError> {
    Ok(Html(templates.render(name, context)?))
}

/// What a template sees: the listing flattened, with the ObjectId as its hex
/// string and the nested image unwrapped.
#[derive(Debug, Serialize)]
pub struct ListingView {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub price: f64,
    pub location: String,
    pub country: String,
}

impl From<&Listing> for ListingView {
    fn from(listing: &Listing) -> Self {
        Self {
            id: listing.id.to_hex(),
            title: listing.title.clone(),
            description: listing.description.clone(),
            image_url: listing.image.url.clone(),
            price: listing.price,
            location: listing.location.clone(),
            country: listing.country.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::listings::ListingInput;

    #[test]
    fn templates_load_and_name_every_view() {
        let templates = build_templates().expect("templates should parse");
        let names: Vec<&str> = templates.get_template_names().collect();
        for expected in [
            "listings/index.html",
            "listings/show.html",
            "listings/new.html",
            "listings/edit.html",
        ] {
            assert!(names.contains(&expected), "missing template {expected}");
        }
    }

    #[test]
    fn view_flattens_the_image() {
        let listing = Listing::from_input(ListingInput {
            title: "Beach House".to_string(),
            description: "Ocean view".to_string(),
            image_url: Some("https://example.com/beach.jpg".to_string()),
            price: 150.0,
            location: "Malibu".to_string(),
            country: "USA".to_string(),
        });
        let view = ListingView::from(&listing);
        assert_eq!(view.id, listing.id.to_hex());
        assert_eq!(view.image_url, "https://example.com/beach.jpg");
    }
}
