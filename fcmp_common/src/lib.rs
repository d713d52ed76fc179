pub mod config;
pub mod error;
pub mod listing;
pub mod types;

pub use config::*;
pub use error::*;
pub use listing::*;
pub use types::*;
