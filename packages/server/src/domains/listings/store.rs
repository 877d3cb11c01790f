use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::options::ReturnDocument;
use mongodb::{Client, Collection};
use thiserror::Error;

use super::models::listing::{Listing, ListingFields, ListingInput};

/// Collection the listings live in.
const COLLECTION: &str = "listings";

/// Store-layer errors for listing operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("missing or invalid required field: {0}")]
    Validation(&'static str),

    #[error("listing not found")]
    NotFound,

    #[error("invalid listing id")]
    InvalidId,

    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),
}

/// Persistence layer for listings. Wraps one MongoDB collection; handlers and
/// the seed binary go through this, never the driver directly.
#[derive(Clone)]
pub struct ListingStore {
    collection: Collection<Listing>,
}

impl ListingStore {
    /// Build the store from an already-constructed client handle. The handle
    /// is passed in explicitly at startup; there is no ambient global
    /// connection.
    pub fn new(client: &Client, database_name: &str) -> Self {
        Self {
            collection: client.database(database_name).collection(COLLECTION),
        }
    }

    /// Parse a path id into an ObjectId. Anything that is not a 24-hex-char
    /// string is rejected here so malformed ids never reach the database.
    pub fn parse_id(id: &str) -> Result<ObjectId, StoreError> {
        ObjectId::parse_str(id).map_err(|_| StoreError::InvalidId)
    }

    /// Validate and insert, returning the persisted record with its new id.
    pub async fn create(&self, input: ListingInput) -> Result<Listing, StoreError> {
        input.validate()?;
        let listing = Listing::from_input(input);
        self.collection.insert_one(&listing).await?;
        Ok(listing)
    }

    /// Fetch one listing; `None` when no record has that id.
    pub async fn get(&self, id: &str) -> Result<Option<Listing>, StoreError> {
        let oid = Self::parse_id(id)?;
        Ok(self.collection.find_one(doc! { "_id": oid }).await?)
    }

    /// Every listing, in store-default order.
    pub async fn list_all(&self) -> Result<Vec<Listing>, StoreError> {
        let cursor = self.collection.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    /// Replace the five mutable fields together and return the post-update
    /// record. Re-validates before touching the database; the image is left
    /// untouched.
    pub async fn update(&self, id: &str, fields: ListingFields) -> Result<Listing, StoreError> {
        let oid = Self::parse_id(id)?;
        fields.validate()?;

        let updated = self
            .collection
            .find_one_and_update(
                doc! { "_id": oid },
                doc! { "$set": {
                    "title": fields.title.trim(),
                    "description": fields.description.trim(),
                    "price": fields.price,
                    "location": fields.location.trim(),
                    "country": fields.country.trim(),
                } },
            )
            .return_document(ReturnDocument::After)
            .await?
            .ok_or(StoreError::NotFound)?;

        Ok(updated)
    }

    /// Hard delete. Idempotent; deleting an id that no longer exists is not an
    /// error.
    pub async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let oid = Self::parse_id(id)?;
        self.collection.delete_one(doc! { "_id": oid }).await?;
        Ok(())
    }

    /// Seed path: wipe the collection.
    pub async fn delete_all(&self) -> Result<(), StoreError> {
        self.collection.delete_many(doc! {}).await?;
        Ok(())
    }

    /// Seed path: insert a batch of listings, returning how many went in.
    /// Every input is validated before any insert, so one bad fixture leaves
    /// the collection untouched.
    pub async fn bulk_create(&self, inputs: Vec<ListingInput>) -> Result<usize, StoreError> {
        for input in &inputs {
            input.validate()?;
        }

        let listings: Vec<Listing> = inputs.into_iter().map(Listing::from_input).collect();
        if listings.is_empty() {
            return Ok(0);
        }

        self.collection.insert_many(&listings).await?;
        Ok(listings.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_id_parses() {
        let oid = ObjectId::new();
        assert_eq!(ListingStore::parse_id(&oid.to_hex()).unwrap(), oid);
    }

    #[test]
    fn short_id_is_rejected() {
        assert!(matches!(
            ListingStore::parse_id("abc123"),
            Err(StoreError::InvalidId)
        ));
    }

    #[test]
    fn non_hex_id_is_rejected() {
        // Right length, wrong alphabet.
        assert!(matches!(
            ListingStore::parse_id("zzzzzzzzzzzzzzzzzzzzzzzz"),
            Err(StoreError::InvalidId)
        ));
    }

    #[test]
    fn empty_id_is_rejected() {
        assert!(matches!(
            ListingStore::parse_id(""),
            Err(StoreError::InvalidId)
        ));
    }
}
