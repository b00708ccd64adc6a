//! The session ledger: every order record for the running session.

use bakeshop_catalog::Catalog;
use bakeshop_core::{DomainError, DomainResult, OrderId, clock};

use crate::order::OrderRecord;
use crate::picker::{ItemPicker, collect_lines};

/// Ordered collection of order records, owned by the running process.
///
/// The next order id is ledger state, derived from the stored orders at load
/// time, so ids survive restarts instead of being re-derived from a global
/// counter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Ledger {
    orders: Vec<OrderRecord>,
    next_id: u64,
}

impl Ledger {
    /// Empty ledger; the first order gets id 1.
    pub fn new() -> Self {
        Self {
            orders: Vec::new(),
            next_id: 1,
        }
    }

    /// Ledger rebuilt from persisted records, in file order.
    ///
    /// The id counter resumes at `max(existing ids) + 1`.
    pub fn from_orders(orders: Vec<OrderRecord>) -> Self {
        let next_id = orders
            .iter()
            .map(|order| order.id().value())
            .max()
            .unwrap_or(0)
            + 1;
        Self { orders, next_id }
    }

    pub fn orders(&self) -> &[OrderRecord] {
        &self.orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Collect lines from the picker, then append a new order.
    ///
    /// The id counter only advances when the order is actually recorded, so a
    /// failed pick leaves no gap.
    pub fn add_order(
        &mut self,
        customer_name: &str,
        picker: &mut dyn ItemPicker,
        catalog: &Catalog,
    ) -> DomainResult<OrderId> {
        let (items, quantities) = collect_lines(picker, catalog)?;
        let id = OrderId::new(self.next_id);
        let record = OrderRecord::new(id, customer_name, items, quantities, clock::now_stamp())?;
        self.orders.push(record);
        self.next_id += 1;
        Ok(id)
    }

    /// The record with the given id. Linear scan; the collection is small.
    pub fn get_order(&self, order_id: OrderId) -> DomainResult<&OrderRecord> {
        self.orders
            .iter()
            .find(|order| order.id() == order_id)
            .ok_or_else(|| DomainError::not_found(order_id))
    }

    /// Replace an order's lines via the picker loop, refreshing its
    /// timestamp. Id and customer are untouched.
    ///
    /// Existence is checked before the picker runs: a missing id never
    /// consumes any input and leaves the ledger unchanged.
    pub fn modify_order(
        &mut self,
        order_id: OrderId,
        picker: &mut dyn ItemPicker,
        catalog: &Catalog,
    ) -> DomainResult<()> {
        let Some(pos) = self.orders.iter().position(|order| order.id() == order_id) else {
            return Err(DomainError::not_found(order_id));
        };
        let (items, quantities) = collect_lines(picker, catalog)?;
        self.orders[pos].replace_lines(items, quantities, clock::now_stamp())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picker::testing::ScriptedPicker;

    fn seeded_ledger() -> Ledger {
        let catalog = Catalog::standard();
        let mut ledger = Ledger::new();
        let mut picker = ScriptedPicker::new(&[("Cake", 2), ("Muffin", 3)]);
        ledger.add_order("Asha", &mut picker, &catalog).unwrap();
        ledger
    }

    #[test]
    fn ids_start_at_one_and_strictly_increase() {
        let catalog = Catalog::standard();
        let mut ledger = Ledger::new();

        for expected in 1..=3u64 {
            let mut picker = ScriptedPicker::new(&[("Burger", 1)]);
            let id = ledger.add_order("Ravi", &mut picker, &catalog).unwrap();
            assert_eq!(id, OrderId::new(expected));
        }
        assert_eq!(ledger.len(), 3);
    }

    #[test]
    fn from_orders_resumes_the_id_sequence() {
        let catalog = Catalog::standard();
        let seeded = seeded_ledger();
        let mut ledger = Ledger::from_orders(seeded.orders().to_vec());

        let mut picker = ScriptedPicker::new(&[("Pizza", 1)]);
        let id = ledger.add_order("Ravi", &mut picker, &catalog).unwrap();
        assert_eq!(id, OrderId::new(2));
    }

    #[test]
    fn from_orders_on_an_empty_history_starts_at_one() {
        let ledger = Ledger::from_orders(Vec::new());
        assert!(ledger.is_empty());

        let catalog = Catalog::standard();
        let mut ledger = ledger;
        let mut picker = ScriptedPicker::new(&[("Cake", 1)]);
        let id = ledger.add_order("Asha", &mut picker, &catalog).unwrap();
        assert_eq!(id, OrderId::new(1));
    }

    #[test]
    fn get_order_reports_not_found() {
        let ledger = seeded_ledger();
        assert!(ledger.get_order(OrderId::new(1)).is_ok());

        let err = ledger.get_order(OrderId::new(99)).unwrap_err();
        assert_eq!(err, DomainError::not_found(OrderId::new(99)));
    }

    #[test]
    fn modify_replaces_lines_and_preserves_identity() {
        let catalog = Catalog::standard();
        let mut ledger = seeded_ledger();
        let before = ledger.get_order(OrderId::new(1)).unwrap().clone();

        let mut picker = ScriptedPicker::new(&[("Croissant", 4)]);
        ledger
            .modify_order(OrderId::new(1), &mut picker, &catalog)
            .unwrap();

        let after = ledger.get_order(OrderId::new(1)).unwrap();
        assert_eq!(after.id(), before.id());
        assert_eq!(after.customer_name(), before.customer_name());
        assert_eq!(after.items(), ["Croissant".to_string()]);
        assert_eq!(after.quantities(), [4]);
        // The timestamp format orders lexicographically.
        assert!(after.order_date() >= before.order_date());
    }

    #[test]
    fn modify_on_a_missing_id_never_consults_the_picker() {
        let catalog = Catalog::standard();
        let mut ledger = seeded_ledger();
        let before = ledger.clone();

        let mut picker = ScriptedPicker::new(&[("Croissant", 4)]);
        let err = ledger
            .modify_order(OrderId::new(99), &mut picker, &catalog)
            .unwrap_err();

        assert_eq!(err, DomainError::not_found(OrderId::new(99)));
        assert!(!picker.consulted);
        assert_eq!(ledger, before);
    }

    #[test]
    fn unknown_items_during_add_are_reprompted_not_fatal() {
        let catalog = Catalog::standard();
        let mut ledger = Ledger::new();

        let mut picker = ScriptedPicker::new(&[("Baguette", 1), ("Cake", 2)]);
        let id = ledger.add_order("Asha", &mut picker, &catalog).unwrap();

        let order = ledger.get_order(id).unwrap();
        assert_eq!(order.items(), ["Cake".to_string()]);
        assert_eq!(picker.rejected, ["Baguette".to_string()]);
    }
}
