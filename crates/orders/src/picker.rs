//! Item picker abstraction.
//!
//! The "collect item/quantity pairs until a sentinel" interaction is
//! separated from the ledger's mutation logic behind a trait, so the core can
//! be exercised without simulating console input.

use bakeshop_catalog::Catalog;
use bakeshop_core::{DomainError, DomainResult};

/// What the picker produced when asked for the next item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemChoice {
    /// An item name to add (not yet validated against the catalog).
    Item(String),
    /// The termination sentinel; the console picker maps any casing of
    /// "done" to this.
    Done,
}

/// Source of item/quantity pairs for the add and modify flows.
pub trait ItemPicker {
    /// Next item name, or `Done` to finish.
    fn pick_item(&mut self) -> DomainResult<ItemChoice>;

    /// Quantity for an item the catalog has accepted.
    fn pick_quantity(&mut self, item: &str) -> DomainResult<u32>;

    /// Called when an item is not on the menu; the loop re-prompts.
    fn reject_unknown(&mut self, item: &str);
}

/// Run the picker loop, validating items against the catalog.
///
/// Items missing from the catalog are rejected and the picker is asked again;
/// the operation is never aborted for a bad item. Returns the parallel
/// item/quantity vectors (possibly empty, if the picker finishes at once).
pub fn collect_lines(
    picker: &mut dyn ItemPicker,
    catalog: &Catalog,
) -> DomainResult<(Vec<String>, Vec<u32>)> {
    let mut items = Vec::new();
    let mut quantities = Vec::new();

    loop {
        match picker.pick_item()? {
            ItemChoice::Done => break,
            ItemChoice::Item(name) => {
                if !catalog.contains(&name) {
                    picker.reject_unknown(&name);
                    continue;
                }
                let quantity = picker.pick_quantity(&name)?;
                if quantity == 0 {
                    return Err(DomainError::validation("quantity must be positive"));
                }
                items.push(name);
                quantities.push(quantity);
            }
        }
    }

    Ok((items, quantities))
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::VecDeque;

    use super::*;

    /// Picker fed from a fixed script, for tests.
    pub struct ScriptedPicker {
        picks: VecDeque<(String, u32)>,
        pub rejected: Vec<String>,
        pub consulted: bool,
    }

    impl ScriptedPicker {
        pub fn new(picks: &[(&str, u32)]) -> Self {
            Self {
                picks: picks
                    .iter()
                    .map(|&(item, quantity)| (item.to_string(), quantity))
                    .collect(),
                rejected: Vec::new(),
                consulted: false,
            }
        }
    }

    impl ItemPicker for ScriptedPicker {
        fn pick_item(&mut self) -> DomainResult<ItemChoice> {
            self.consulted = true;
            match self.picks.front() {
                Some((item, _)) => Ok(ItemChoice::Item(item.clone())),
                None => Ok(ItemChoice::Done),
            }
        }

        fn pick_quantity(&mut self, _item: &str) -> DomainResult<u32> {
            let (_, quantity) = self
                .picks
                .pop_front()
                .ok_or_else(|| DomainError::input("quantity requested with no pick pending"))?;
            Ok(quantity)
        }

        fn reject_unknown(&mut self, item: &str) {
            self.rejected.push(item.to_string());
            self.picks.pop_front();
        }
    }
}
