pub mod calendar;
pub mod filter;
pub mod queries;
pub mod types;

pub use calendar::*;
pub use filter::*;
pub use queries::*;
pub use types::*;
