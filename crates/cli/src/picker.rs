//! Console implementation of the item picker.

use bakeshop_core::{DomainError, DomainResult};
use bakeshop_orders::{ItemChoice, ItemPicker};

use crate::console;

/// Picker backed by stdin prompts.
pub struct ConsolePicker;

impl ConsolePicker {
    fn read(&self, label: &str) -> DomainResult<String> {
        console::prompt(label).map_err(|e| DomainError::input(e.to_string()))
    }
}

impl ItemPicker for ConsolePicker {
    fn pick_item(&mut self) -> DomainResult<ItemChoice> {
        let item = self.read("Enter item from the menu (or 'done' to finish): ")?;
        if item.eq_ignore_ascii_case("done") {
            Ok(ItemChoice::Done)
        } else {
            Ok(ItemChoice::Item(item))
        }
    }

    fn pick_quantity(&mut self, item: &str) -> DomainResult<u32> {
        // Non-numeric or zero input re-prompts this one field only.
        loop {
            let raw = self.read(&format!("Enter quantity for {item}: "))?;
            match raw.parse::<u32>() {
                Ok(quantity) if quantity > 0 => return Ok(quantity),
                _ => println!("Quantity must be a positive whole number."),
            }
        }
    }

    fn reject_unknown(&mut self, _item: &str) {
        println!("Invalid item. Please choose from the menu.");
    }
}
