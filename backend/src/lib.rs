pub mod config;
pub mod error;
pub mod store;
pub use shared::{models::*, tally::Tally};
pub use config::StoreConfig;
pub use error::{StoreError, StoreResult};
pub use store::Store;
