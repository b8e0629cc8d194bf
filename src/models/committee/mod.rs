pub mod members;
pub mod queries;
pub mod types;

pub use members::*;
pub use queries::*;
pub use types::*;
