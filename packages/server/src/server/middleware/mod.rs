// HTTP middleware
pub mod method_override;

pub use method_override::*;
