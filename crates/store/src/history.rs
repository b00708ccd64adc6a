//! Order history load/save.
//!
//! The history file is a pretty-printed JSON array of order objects:
//! `order_id`, `customer_name`, `items`, `quantities`, `order_date`. The file
//! is replaced whole on save; only one process instance may use a given path.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use bakeshop_orders::OrderRecord;

/// Persistence failure. An absent history file is *not* an error.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read order history at {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("order history at {path} is malformed: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("order history at {path} is inconsistent: {reason}")]
    Corrupt { path: PathBuf, reason: String },

    #[error("failed to encode order history: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to write order history at {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StoreError {
    /// True for the corruption cases where offering a fresh start makes
    /// sense, as opposed to plain IO failures.
    pub fn is_corruption(&self) -> bool {
        matches!(self, StoreError::Malformed { .. } | StoreError::Corrupt { .. })
    }
}

/// Load the order history, in file order.
///
/// A missing file is just an empty history. A file that parses but breaks a
/// record invariant is reported as `Corrupt` rather than silently accepted.
pub fn load_history(path: &Path) -> Result<Vec<OrderRecord>, StoreError> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no order history yet, starting empty");
        return Ok(Vec::new());
    }

    let raw = fs::read_to_string(path).map_err(|source| StoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let orders: Vec<OrderRecord> =
        serde_json::from_str(&raw).map_err(|source| StoreError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;

    for order in &orders {
        order.validate().map_err(|err| StoreError::Corrupt {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })?;
    }

    tracing::info!(path = %path.display(), orders = orders.len(), "order history loaded");
    Ok(orders)
}

/// Serialize all records and overwrite the history file whole.
pub fn save_history(path: &Path, orders: &[OrderRecord]) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(orders)?;
    fs::write(path, json).map_err(|source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), orders = orders.len(), "order history saved");
    Ok(())
}
