// HTTP routes
pub mod health;
pub mod home;
pub mod listings;

pub use health::*;
pub use home::*;
pub use listings::*;
