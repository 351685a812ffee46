//! Interactive store terminal.
//!
//! Thin wrapper over the inventory collection: each menu command prompts for
//! its raw inputs, calls exactly one collection operation, and renders
//! whatever comes back. Validation failures are printed and the loop
//! continues.

use anyhow::Result;
use clap::Parser;
use console::style;
use dialoguer::Input;
use shelftrack_inventory::{report, StoreManager};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Shelftrack - RFID merchandise tracking terminal
#[derive(Parser)]
#[command(name = "shelftrack")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("starting shelftrack terminal");
    let mut store = StoreManager::new();

    loop {
        print_menu();
        let choice: String = Input::new()
            .with_prompt("Please select an option")
            .interact_text()?;

        let outcome = match choice.trim().to_ascii_uppercase().as_str() {
            "C" => cmd_clean_store(&mut store),
            "I" => cmd_insert(&mut store),
            "L" => cmd_list_by_location(&store),
            "M" => cmd_move(&mut store),
            "O" => cmd_check_out(&mut store),
            "R" => cmd_list_by_rfid(&store),
            "P" => {
                println!("{}", report::render_table(store.items()));
                Ok(())
            }
            "U" => cmd_remove_purchased(&mut store),
            "Q" => {
                println!("Program terminating normally...");
                return Ok(());
            }
            _ => {
                println!("Invalid Choice.");
                Ok(())
            }
        };

        if let Err(err) = outcome {
            eprintln!("{} {}", style("✗").red(), style(err).red());
        }
    }
}

fn print_menu() {
    println!();
    println!("C - Clean store");
    println!("I - Insert an item into the list");
    println!("L - List by location");
    println!("M - Move an item in the store");
    println!("O - Checkout");
    println!("R - Print by RFID tag number");
    println!("P - Print all items in store");
    println!("U - Update inventory system");
    println!("Q - Exit the program.");
}

fn prompt(message: &str) -> Result<String> {
    let value: String = Input::new()
        .with_prompt(message)
        .allow_empty(true)
        .interact_text()?;
    Ok(value.trim().to_owned())
}

fn prompt_price(message: &str) -> Result<f64> {
    let value: f64 = Input::new().with_prompt(message).interact_text()?;
    Ok(value)
}

fn cmd_insert(store: &mut StoreManager) -> Result<()> {
    let name = prompt("Enter the name")?;
    let rfid = prompt("Enter the RFID")?.to_ascii_uppercase();
    let original_location = prompt("Enter the original location")?.to_ascii_lowercase();
    let price = prompt_price("Enter the price")?;
    store.insert(&name, &rfid, price, &original_location)?;
    Ok(())
}

fn cmd_list_by_location(store: &StoreManager) -> Result<()> {
    let location = prompt("Enter the location")?.to_ascii_lowercase();
    let items = store.items_by_location(&location)?;
    println!("{}", report::render_table(items));
    Ok(())
}

fn cmd_list_by_rfid(store: &StoreManager) -> Result<()> {
    let rfid = prompt("Enter the RFID")?.to_ascii_uppercase();
    let items = store.items_by_rfid(&rfid)?;
    println!("{}", report::render_table(items));
    Ok(())
}

fn cmd_move(store: &mut StoreManager) -> Result<()> {
    let rfid = prompt("Enter the RFID")?.to_ascii_uppercase();
    let source = prompt("Enter the current location")?.to_ascii_lowercase();
    let dest = prompt("Enter the new location")?.to_ascii_lowercase();
    let found = store.move_item(&rfid, &source, &dest)?;
    if !found {
        println!("No item with that RFID was found at {source}.");
    }
    Ok(())
}

fn cmd_check_out(store: &mut StoreManager) -> Result<()> {
    let cart_number = prompt("Enter the cart number")?.to_ascii_lowercase();
    let receipt = store.check_out(&cart_number)?;
    println!("{}", report::render_table(&receipt.lines));
    println!(
        "The total cost for all merchandise in cart {} was ${:.2}",
        receipt.cart.digits(),
        receipt.total
    );
    Ok(())
}

fn cmd_clean_store(store: &mut StoreManager) -> Result<()> {
    let moved = store.clean_store();
    println!("The following item(s) have been moved back to their original locations: ");
    println!("{}", report::render_relocations(&moved));
    Ok(())
}

fn cmd_remove_purchased(store: &mut StoreManager) -> Result<()> {
    let removed = store.remove_all_purchased();
    println!("The following item(s) have been removed from the system: ");
    println!("{}", report::render_table(&removed));
    Ok(())
}
