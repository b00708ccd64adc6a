//! Export error model.

use thiserror::Error;

use bakeshop_core::DomainError;

/// Failure of a single export. A failed export never damages earlier
/// successful exports; each invocation writes its own file.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The ledger has nothing to export (reported, not fatal).
    #[error("no orders to export")]
    NoOrders,

    /// Pricing failed (e.g. a record references an item no longer priced).
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("bill rendering error: {0}")]
    Pdf(#[from] printpdf::Error),

    #[error("failed to write export file")]
    Io(#[from] std::io::Error),
}
