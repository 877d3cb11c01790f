use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::domains::listings::store::StoreError;

/// Substituted when the create form leaves the image URL blank. The schema
/// requires `image.url`, but the creation form does not carry an image input.
pub const DEFAULT_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1507525428034-b723cf961d3e";

/// Listing - a travel accommodation entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Listing {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    pub description: String,
    pub image: ListingImage,
    pub price: f64,
    pub location: String,
    pub country: String,
}

/// Nested image document. Single field today; shaped as an object so alt text
/// or sizing variants can be added without a migration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListingImage {
    pub url: String,
}

/// Fields accepted when creating a listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingInput {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub price: f64,
    pub location: String,
    pub country: String,
}

/// The five mutable fields, replaced together on update. The image is kept
/// as-is; the edit form does not carry it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingFields {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub location: String,
    pub country: String,
}

impl Listing {
    /// Build a persisted-shape record from validated input, assigning a fresh id.
    pub fn from_input(input: ListingInput) -> Self {
        let image = input.image();
        Self {
            id: ObjectId::new(),
            title: input.title.trim().to_string(),
            description: input.description.trim().to_string(),
            image,
            price: input.price,
            location: input.location.trim().to_string(),
            country: input.country.trim().to_string(),
        }
    }
}

impl ListingInput {
    /// Check every required field before anything is persisted. The store runs
    /// this on create and bulk-create; validation never falls through to
    /// driver defaults.
    pub fn validate(&self) -> Result<(), StoreError> {
        require_text("title", &self.title)?;
        require_text("description", &self.description)?;
        require_price(self.price)?;
        require_text("location", &self.location)?;
        require_text("country", &self.country)?;
        Ok(())
    }

    /// Resolve the image, falling back to the placeholder when the form left
    /// the URL blank.
    pub fn image(&self) -> ListingImage {
        let url = self
            .image_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_IMAGE_URL);
        ListingImage {
            url: url.to_string(),
        }
    }
}

impl ListingFields {
    /// Same checks as create, minus the image (which an update never touches).
    pub fn validate(&self) -> Result<(), StoreError> {
        require_text("title", &self.title)?;
        require_text("description", &self.description)?;
        require_price(self.price)?;
        require_text("location", &self.location)?;
        require_text("country", &self.country)?;
        Ok(())
    }
}

fn require_text(field: &'static str, value: &str) -> Result<(), StoreError> {
    if value.trim().is_empty() {
        return Err(StoreError::Validation(field));
    }
    Ok(())
}

fn require_price(price: f64) -> Result<(), StoreError> {
    if !price.is_finite() || price < 0.0 {
        return Err(StoreError::Validation("price"));
    }
    Ok(())
}
