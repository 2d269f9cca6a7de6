//! gilded-core: Item model and end-of-day aging rules.
//!
//! This crate provides:
//! - `Item`: A stock item with its sell-in days and quality
//! - `Variant`: The aging rule selected from an item's name
//! - `Updater`: The aging engine that advances one item day by day
//! - `Inventory`: The whole shop, aged together at end of day
//! - `AgingEvent`: Records of what each aged day changed

pub mod error;
pub mod event;
pub mod inventory;
pub mod item;
pub mod updater;
pub mod variant;

pub use error::{CoreError, Result};
pub use event::{AgingEvent, EventType, ValueChange};
pub use inventory::Inventory;
pub use item::Item;
pub use updater::{
    clamp_quality, create_updater, day_rule, QualityStep, Updater, QUALITY_MAX, QUALITY_MIN,
};
pub use variant::Variant;
