//! Item-to-price mapping, defined once at startup and read-only thereafter.

use serde::{Deserialize, Serialize};

use bakeshop_core::{Paise, rupees};

/// One priced menu item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    pub name: String,
    /// Unit price in paise.
    pub unit_price: Paise,
}

/// The fixed price menu.
///
/// Entries keep their definition order so the displayed menu is stable. The
/// collection is small; lookups are linear scans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<MenuEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<MenuEntry>) -> Self {
        Self { entries }
    }

    /// The standard six-item bakery menu.
    pub fn standard() -> Self {
        let items: [(&str, Paise); 6] = [
            ("Pizza", rupees(85)),
            ("Burger", rupees(50)),
            ("Cake", rupees(200)),
            ("Cookies", rupees(25)),
            ("Croissant", rupees(30)),
            ("Muffin", rupees(40)),
        ];
        Self::new(
            items
                .into_iter()
                .map(|(name, unit_price)| MenuEntry {
                    name: name.to_string(),
                    unit_price,
                })
                .collect(),
        )
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    /// Unit price of an item, if it is on the menu.
    pub fn price_of(&self, item: &str) -> Option<Paise> {
        self.entries
            .iter()
            .find(|entry| entry.name == item)
            .map(|entry| entry.unit_price)
    }

    pub fn contains(&self, item: &str) -> bool {
        self.price_of(item).is_some()
    }
}
