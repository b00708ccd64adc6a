//! Domain error model.

use thiserror::Error;

use crate::id::OrderId;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// lookup misses). IO concerns belong to the store and export layers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. mismatched line lengths, zero quantity).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// No order with the given id exists in the ledger.
    #[error("order {0} not found")]
    OrderNotFound(OrderId),

    /// An item is not priced in the current catalog.
    #[error("item not on the menu: {0}")]
    UnknownItem(String),

    /// Interactive input could not be read.
    #[error("input error: {0}")]
    Input(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found(id: OrderId) -> Self {
        Self::OrderNotFound(id)
    }

    pub fn unknown_item(item: impl Into<String>) -> Self {
        Self::UnknownItem(item.into())
    }

    pub fn input(msg: impl Into<String>) -> Self {
        Self::Input(msg.into())
    }
}
