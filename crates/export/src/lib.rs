//! `bakeshop-export` — spreadsheet and bill exports.

pub mod bill;
pub mod error;
pub mod spreadsheet;

pub use bill::export_bill;
pub use error::ExportError;
pub use spreadsheet::export_spreadsheet;
