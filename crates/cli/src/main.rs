//! Interactive order tracker for a small bakery.

mod console;
mod picker;
mod telemetry;

use std::path::{Path, PathBuf};

use anyhow::Context;

use bakeshop_catalog::Catalog;
use bakeshop_core::OrderId;
use bakeshop_export::{ExportError, export_bill, export_spreadsheet};
use bakeshop_orders::Ledger;
use bakeshop_store::{load_history, save_history};

use crate::picker::ConsolePicker;

const SPREADSHEET_FILE: &str = "order_history.xlsx";

fn main() -> anyhow::Result<()> {
    telemetry::init();

    let history_path = PathBuf::from(
        std::env::var("BAKESHOP_HISTORY").unwrap_or_else(|_| "order_history.json".to_string()),
    );
    let catalog = Catalog::standard();
    let mut ledger = open_ledger(&history_path)?;

    loop {
        println!("\nBakeshop Order Tracker");
        println!("1. Add Order");
        println!("2. Get Order Details");
        println!("3. Modify Order");
        println!("4. Export Order History to Spreadsheet");
        println!("5. Export Bill to PDF");
        println!("6. Exit");

        let choice = console::prompt("Enter your choice (1-6): ")?;
        match choice.as_str() {
            "1" => add_order(&mut ledger, &catalog)?,
            "2" => show_order(&ledger, &catalog)?,
            "3" => modify_order(&mut ledger, &catalog)?,
            "4" => export_history(&ledger),
            "5" => export_order_bill(&ledger, &catalog)?,
            "6" => {
                save_history(&history_path, ledger.orders())
                    .context("saving order history on exit")?;
                println!("Exiting. Order history saved. Goodbye!");
                return Ok(());
            }
            _ => println!("Invalid choice. Please enter a number between 1 and 6."),
        }
    }
}

/// Load the history, offering a fresh ledger when the file is corrupt.
fn open_ledger(path: &Path) -> anyhow::Result<Ledger> {
    match load_history(path) {
        Ok(orders) => Ok(Ledger::from_orders(orders)),
        Err(err) if err.is_corruption() => {
            println!("{err}");
            let answer = console::prompt("Start with an empty ledger instead? (y/n): ")?;
            if answer.eq_ignore_ascii_case("y") {
                tracing::warn!("corrupt order history ignored, starting empty");
                Ok(Ledger::new())
            } else {
                Err(err).context("loading order history")
            }
        }
        Err(err) => Err(err).context("loading order history"),
    }
}

/// Prompt for an order id; invalid input reports and aborts the one action.
fn read_order_id(label: &str) -> anyhow::Result<Option<OrderId>> {
    let raw = console::prompt(label)?;
    match raw.parse::<OrderId>() {
        Ok(id) => Ok(Some(id)),
        Err(err) => {
            println!("{err}");
            Ok(None)
        }
    }
}

fn add_order(ledger: &mut Ledger, catalog: &Catalog) -> anyhow::Result<()> {
    let customer_name = console::prompt("Enter Customer Name: ")?;
    console::print_menu(catalog);

    match ledger.add_order(&customer_name, &mut ConsolePicker, catalog) {
        Ok(id) => {
            println!("\nOrder added successfully!");
            println!("Order ID: {id}");
        }
        Err(err) => println!("{err}"),
    }
    Ok(())
}

fn show_order(ledger: &Ledger, catalog: &Catalog) -> anyhow::Result<()> {
    let Some(id) = read_order_id("Enter Order ID to retrieve details: ")? else {
        return Ok(());
    };
    match ledger
        .get_order(id)
        .and_then(|order| console::print_order_details(order, catalog))
    {
        Ok(()) => {}
        Err(err) => println!("{err}"),
    }
    Ok(())
}

fn modify_order(ledger: &mut Ledger, catalog: &Catalog) -> anyhow::Result<()> {
    let Some(id) = read_order_id("Enter Order ID to modify: ")? else {
        return Ok(());
    };

    // Show what is being replaced before running the picker.
    match ledger
        .get_order(id)
        .and_then(|order| console::print_order_details(order, catalog))
    {
        Ok(()) => {}
        Err(err) => {
            println!("{err}");
            return Ok(());
        }
    }

    console::print_menu(catalog);
    match ledger.modify_order(id, &mut ConsolePicker, catalog) {
        Ok(()) => println!("\nOrder modified successfully!"),
        Err(err) => println!("{err}"),
    }
    Ok(())
}

fn export_history(ledger: &Ledger) {
    match export_spreadsheet(ledger.orders(), Path::new(SPREADSHEET_FILE)) {
        Ok(count) => println!("Exported {count} order(s) to {SPREADSHEET_FILE}."),
        Err(ExportError::NoOrders) => println!("No orders to export."),
        Err(err) => println!("Spreadsheet export failed: {err}"),
    }
}

fn export_order_bill(ledger: &Ledger, catalog: &Catalog) -> anyhow::Result<()> {
    let Some(id) = read_order_id("Enter Order ID to export bill to PDF: ")? else {
        return Ok(());
    };

    let order = match ledger.get_order(id) {
        Ok(order) => order,
        Err(err) => {
            println!("{err}");
            return Ok(());
        }
    };

    let path = PathBuf::from(format!("bill_order_{id}.pdf"));
    match export_bill(order, catalog, &path) {
        Ok(()) => println!("Bill exported to {}.", path.display()),
        Err(err) => println!("Bill export failed: {err}"),
    }
    Ok(())
}
