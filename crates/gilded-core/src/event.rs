//! Aging event model for tracking what a day did to an item.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Type of change recorded while aging an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
    /// Days left to sell moved.
    SellInChanged,
    /// Quality moved by the daily rule.
    QualityChanged,
    /// Quality was forced to a fixed value (backstage passes after the concert).
    QualityReset,
    /// Sell-by date passed on this day.
    Expired,
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SellInChanged => write!(f, "SELL_IN_CHANGED"),
            Self::QualityChanged => write!(f, "QUALITY_CHANGED"),
            Self::QualityReset => write!(f, "QUALITY_RESET"),
            Self::Expired => write!(f, "EXPIRED"),
        }
    }
}

/// Before and after values of a changed field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ValueChange {
    pub from: i32,
    pub to: i32,
}

/// A single entry in an item's aging history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AgingEvent {
    /// Unique event identifier.
    pub id: String,

    /// Type of event.
    #[serde(rename = "type")]
    pub event_type: EventType,

    /// When the event was recorded (ISO 8601 UTC).
    pub timestamp: DateTime<Utc>,

    /// Name of the aged item.
    pub item: String,

    /// Day within the aging run, starting at 1.
    pub day: u32,

    /// What changed.
    pub payload: ValueChange,
}

impl AgingEvent {
    /// Create a new event with auto-generated ID and current timestamp.
    #[must_use]
    pub fn new(event_type: EventType, item: impl Into<String>, day: u32, from: i32, to: i32) -> Self {
        Self {
            id: format!("evt_{}", Uuid::new_v4().as_simple()),
            event_type,
            timestamp: Utc::now(),
            item: item.into(),
            day,
            payload: ValueChange { from, to },
        }
    }

    /// Create a SELL_IN_CHANGED event.
    #[must_use]
    pub fn sell_in_changed(item: impl Into<String>, day: u32, from: i32, to: i32) -> Self {
        Self::new(EventType::SellInChanged, item, day, from, to)
    }

    /// Create a QUALITY_CHANGED event.
    #[must_use]
    pub fn quality_changed(item: impl Into<String>, day: u32, from: i32, to: i32) -> Self {
        Self::new(EventType::QualityChanged, item, day, from, to)
    }

    /// Create a QUALITY_RESET event.
    #[must_use]
    pub fn quality_reset(item: impl Into<String>, day: u32, from: i32, to: i32) -> Self {
        Self::new(EventType::QualityReset, item, day, from, to)
    }

    /// Create an EXPIRED event. The payload carries the sell-in crossing.
    #[must_use]
    pub fn expired(item: impl Into<String>, day: u32, from: i32, to: i32) -> Self {
        Self::new(EventType::Expired, item, day, from, to)
    }
}
