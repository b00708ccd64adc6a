//! Order-history spreadsheet export.

use std::path::Path;

use rust_xlsxwriter::Workbook;

use bakeshop_orders::OrderRecord;

use crate::error::ExportError;

const HEADERS: [&str; 5] = [
    "Order ID",
    "Customer Name",
    "Items",
    "Quantities",
    "Order Date",
];

/// Write the whole history to a single-sheet xlsx workbook: one header row,
/// one row per order, items and quantities flattened to comma-joined strings.
///
/// Returns the number of exported orders; an empty history is `NoOrders`.
pub fn export_spreadsheet(orders: &[OrderRecord], path: &Path) -> Result<usize, ExportError> {
    if orders.is_empty() {
        return Err(ExportError::NoOrders);
    }

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header)?;
    }

    for (row, order) in orders.iter().enumerate() {
        let row = row as u32 + 1;
        let quantities = order
            .quantities()
            .iter()
            .map(|q| q.to_string())
            .collect::<Vec<_>>()
            .join(", ");

        worksheet.write_number(row, 0, order.id().value() as f64)?;
        worksheet.write_string(row, 1, order.customer_name())?;
        worksheet.write_string(row, 2, order.items().join(", "))?;
        worksheet.write_string(row, 3, quantities)?;
        worksheet.write_string(row, 4, order.order_date())?;
    }

    workbook.save(path)?;
    tracing::info!(path = %path.display(), orders = orders.len(), "order history exported");
    Ok(orders.len())
}

#[cfg(test)]
mod tests {
    use bakeshop_core::OrderId;

    use super::*;

    fn sample_order() -> OrderRecord {
        OrderRecord::new(
            OrderId::new(1),
            "Asha",
            vec!["Cake".to_string(), "Muffin".to_string()],
            vec![2, 3],
            "2026-08-26 10:00:00".to_string(),
        )
        .unwrap()
    }

    #[test]
    fn empty_history_is_reported_not_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("order_history.xlsx");

        let err = export_spreadsheet(&[], &path).unwrap_err();
        assert!(matches!(err, ExportError::NoOrders));
        assert!(!path.exists());
    }

    #[test]
    fn writes_one_row_per_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("order_history.xlsx");

        let exported = export_spreadsheet(&[sample_order()], &path).unwrap();
        assert_eq!(exported, 1);
        assert!(path.exists());
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }
}
