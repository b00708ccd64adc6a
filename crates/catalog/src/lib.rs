//! `bakeshop-catalog` — the fixed price menu.

pub mod catalog;

pub use catalog::{Catalog, MenuEntry};
