//! File-backed inventory store for gilded.
//!
//! A store directory holds:
//! - `.gilded/config.yml`: Store configuration
//! - `inventory.yml`: Current stock
//! - `events.ndjson`: Append-only aging history

pub mod config;
pub mod error;
pub mod store;

pub use config::StoreConfig;
pub use error::{FsError, Result};
pub use store::{sku, Store};
