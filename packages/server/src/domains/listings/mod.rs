pub mod fixtures;
pub mod models;
pub mod store;

// Re-export models (domain models)
pub use models::listing::{Listing, ListingFields, ListingImage, ListingInput};

// Re-export the persistence layer
pub use store::{ListingStore, StoreError};
