//! Console prompts and order display.

use std::io::{self, Write};

use bakeshop_catalog::Catalog;
use bakeshop_core::{DomainResult, format_rupees};
use bakeshop_orders::OrderRecord;

/// Print a label and read one trimmed line from stdin.
pub fn prompt(label: &str) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Print the menu, one priced item per line.
pub fn print_menu(catalog: &Catalog) {
    println!("\nMenu:");
    for entry in catalog.entries() {
        println!("{} - Rs {}", entry.name, format_rupees(entry.unit_price));
    }
}

/// Print an order's metadata, priced lines and total.
pub fn print_order_details(order: &OrderRecord, catalog: &Catalog) -> DomainResult<()> {
    let breakdown = order.priced_breakdown(catalog)?;

    println!("\nOrder Details:");
    println!("Order ID: {}", order.id());
    println!("Customer Name: {}", order.customer_name());
    println!("Order Date: {}", order.order_date());
    println!("\nItems:");

    for line in &breakdown.lines {
        println!(
            "{} - Quantity: {} - Price: {} Rs - Total: {} Rs",
            line.item,
            line.quantity,
            format_rupees(line.unit_price),
            format_rupees(line.line_total)
        );
    }

    println!("\nTotal Price: Rs {}", format_rupees(breakdown.total));
    Ok(())
}
