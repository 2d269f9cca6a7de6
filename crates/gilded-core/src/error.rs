//! Error types for gilded-core.

use thiserror::Error;

/// Result type alias for gilded-core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors that can occur in gilded-core operations.
///
/// Aging itself never fails; these only surface when items are built from
/// untrusted input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Text could not be parsed as `name, sellIn, quality`.
    #[error("invalid item: {0}")]
    InvalidItem(String),

    /// Item parsed but breaks a model rule.
    #[error("validation error: {0}")]
    Validation(String),
}
