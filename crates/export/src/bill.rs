//! Per-order PDF bill.
//!
//! Fixed single-page layout: title, order metadata, one line per item and a
//! grand total, drawn at vertically decreasing offsets. Coordinates are kept
//! in points from the bottom-left corner, matching the historical layout.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use printpdf::{BuiltinFont, Mm, PdfDocument};

use bakeshop_catalog::Catalog;
use bakeshop_core::format_rupees;
use bakeshop_orders::OrderRecord;

use crate::error::ExportError;

const LEFT_MARGIN_PT: f32 = 72.0;
const TITLE_Y_PT: f32 = 800.0;
const LINE_STEP_PT: f32 = 20.0;
const FONT_SIZE: f32 = 12.0;

fn pt_to_mm(value: f32) -> Mm {
    Mm(value * 25.4 / 72.0)
}

/// Render the bill for a single order.
///
/// Pricing runs before the file is created: an item the catalog no longer
/// prices fails this one export cleanly and leaves nothing half-written.
pub fn export_bill(order: &OrderRecord, catalog: &Catalog, path: &Path) -> Result<(), ExportError> {
    let breakdown = order.priced_breakdown(catalog)?;

    let (doc, page, layer) = PdfDocument::new("Order Bill", Mm(210.0), Mm(297.0), "bill");
    let layer = doc.get_page(page).get_layer(layer);
    let font = doc.add_builtin_font(BuiltinFont::Helvetica)?;

    let x = pt_to_mm(LEFT_MARGIN_PT);
    let mut y = TITLE_Y_PT;
    let line = |text: String, y: f32| {
        layer.use_text(text, FONT_SIZE, x, pt_to_mm(y), &font);
    };

    line("Order Bill".to_string(), y);
    y -= LINE_STEP_PT;
    line(format!("Order ID: {}", order.id()), y);
    y -= LINE_STEP_PT;
    line(format!("Customer Name: {}", order.customer_name()), y);
    y -= LINE_STEP_PT;
    line(format!("Order Date: {}", order.order_date()), y);
    y -= LINE_STEP_PT;

    for priced in &breakdown.lines {
        line(
            format!(
                "{} - Quantity: {} - Price: {} Rs - Total: {} Rs",
                priced.item,
                priced.quantity,
                format_rupees(priced.unit_price),
                format_rupees(priced.line_total)
            ),
            y,
        );
        y -= LINE_STEP_PT;
    }

    line(
        format!("Total Price: {} Rs", format_rupees(breakdown.total)),
        y,
    );

    let file = File::create(path)?;
    doc.save(&mut BufWriter::new(file))?;
    tracing::info!(path = %path.display(), order_id = %order.id(), "bill exported");
    Ok(())
}

#[cfg(test)]
mod tests {
    use bakeshop_core::{DomainError, OrderId};

    use super::*;

    fn order(items: &[&str], quantities: &[u32]) -> OrderRecord {
        OrderRecord::new(
            OrderId::new(1),
            "Asha",
            items.iter().map(|s| s.to_string()).collect(),
            quantities.to_vec(),
            "2026-08-26 10:00:00".to_string(),
        )
        .unwrap()
    }

    #[test]
    fn renders_a_single_page_bill() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bill_order_1.pdf");

        export_bill(&order(&["Cake", "Muffin"], &[2, 3]), &Catalog::standard(), &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn long_orders_render_one_line_per_item_down_the_page() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bill_order_1.pdf");
        let order = order(
            &["Pizza", "Burger", "Cake", "Cookies", "Croissant", "Muffin"],
            &[1, 2, 3, 4, 5, 6],
        );

        export_bill(&order, &Catalog::standard(), &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        // Title, three metadata lines, six item lines and the total.
        assert!(bytes.len() > 500);
    }

    #[test]
    fn unpriced_items_fail_before_any_file_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bill_order_1.pdf");

        let err = export_bill(&order(&["Baguette"], &[1]), &Catalog::standard(), &path).unwrap_err();

        match err {
            ExportError::Domain(DomainError::UnknownItem(item)) => assert_eq!(item, "Baguette"),
            other => panic!("expected UnknownItem, got {other:?}"),
        }
        assert!(!path.exists());
    }
}
