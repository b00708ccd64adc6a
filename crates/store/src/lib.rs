//! `bakeshop-store` — flat-file persistence for the order history.

pub mod history;

pub use history::{StoreError, load_history, save_history};
