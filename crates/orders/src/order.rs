//! One customer transaction: items, quantities, timestamp, identity.

use serde::{Deserialize, Serialize};

use bakeshop_catalog::Catalog;
use bakeshop_core::{DomainError, DomainResult, OrderId, Paise};

/// A recorded order.
///
/// `items` and `quantities` are parallel sequences — same length, index `i`
/// of one describes index `i` of the other. That pairing and the positivity
/// of every quantity are enforced at construction and on every replacement.
/// Item names are *not* checked against the catalog here; only pricing does
/// that, so an order survives menu changes until someone asks for its price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    order_id: OrderId,
    customer_name: String,
    items: Vec<String>,
    quantities: Vec<u32>,
    /// `YYYY-MM-DD HH:MM:SS` in the bakery's timezone.
    order_date: String,
}

/// One priced order line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricedLine {
    pub item: String,
    pub quantity: u32,
    pub unit_price: Paise,
    pub line_total: Paise,
}

/// Full pricing of an order against a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricedBreakdown {
    pub lines: Vec<PricedLine>,
    pub total: Paise,
}

impl OrderRecord {
    pub fn new(
        order_id: OrderId,
        customer_name: impl Into<String>,
        items: Vec<String>,
        quantities: Vec<u32>,
        order_date: String,
    ) -> DomainResult<Self> {
        let record = Self {
            order_id,
            customer_name: customer_name.into(),
            items,
            quantities,
            order_date,
        };
        record.validate()?;
        Ok(record)
    }

    pub fn id(&self) -> OrderId {
        self.order_id
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn quantities(&self) -> &[u32] {
        &self.quantities
    }

    pub fn order_date(&self) -> &str {
        &self.order_date
    }

    /// The (item, quantity) pairs in order.
    pub fn lines(&self) -> impl Iterator<Item = (&str, u32)> {
        self.items
            .iter()
            .map(String::as_str)
            .zip(self.quantities.iter().copied())
    }

    /// Re-check the record invariants.
    ///
    /// Deserialization does not run `new`, so the store calls this after
    /// loading history.
    pub fn validate(&self) -> DomainResult<()> {
        if self.items.len() != self.quantities.len() {
            return Err(DomainError::validation(format!(
                "order {}: {} items but {} quantities",
                self.order_id,
                self.items.len(),
                self.quantities.len()
            )));
        }
        if self.quantities.iter().any(|&q| q == 0) {
            return Err(DomainError::validation(format!(
                "order {}: quantities must be positive",
                self.order_id
            )));
        }
        Ok(())
    }

    /// Price every line against the catalog and accumulate the grand total.
    ///
    /// Display, spreadsheet export and bill export all derive their figures
    /// from this one function so they cannot disagree.
    pub fn priced_breakdown(&self, catalog: &Catalog) -> DomainResult<PricedBreakdown> {
        let mut lines = Vec::with_capacity(self.items.len());
        let mut total: Paise = 0;

        for (item, quantity) in self.lines() {
            let unit_price = catalog
                .price_of(item)
                .ok_or_else(|| DomainError::unknown_item(item))?;
            let line_total = unit_price * Paise::from(quantity);
            total += line_total;
            lines.push(PricedLine {
                item: item.to_string(),
                quantity,
                unit_price,
                line_total,
            });
        }

        Ok(PricedBreakdown { lines, total })
    }

    /// Replace the order's lines, refreshing the timestamp.
    ///
    /// Id and customer are untouched.
    pub fn replace_lines(
        &mut self,
        items: Vec<String>,
        quantities: Vec<u32>,
        order_date: String,
    ) -> DomainResult<()> {
        let replacement = Self::new(
            self.order_id,
            self.customer_name.clone(),
            items,
            quantities,
            order_date,
        )?;
        *self = replacement;
        Ok(())
    }
}
