//! `bakeshop-orders` — order records, the session ledger, and the item
//! picker abstraction.

pub mod ledger;
pub mod order;
pub mod picker;

pub use ledger::Ledger;
pub use order::{OrderRecord, PricedBreakdown, PricedLine};
pub use picker::{ItemChoice, ItemPicker, collect_lines};
