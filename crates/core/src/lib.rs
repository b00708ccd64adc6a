//! `bakeshop-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO concerns).

pub mod clock;
pub mod error;
pub mod id;
pub mod money;

pub use error::{DomainError, DomainResult};
pub use id::OrderId;
pub use money::{Paise, format_rupees, rupees};
