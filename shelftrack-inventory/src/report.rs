//! Fixed-width table rendering.
//!
//! The collection returns data; this boundary turns it into the stable text
//! table downstream display logic expects. Rendering stays out of the
//! collection so the operations are testable without capturing output.

use crate::item::ItemInfo;
use crate::store::Relocation;

/// The listing header. Every table starts with it, even an empty one.
pub fn table_header() -> String {
    format!(
        "{:<16}{:<16}{}\n{:<18}{:<14}{:<16}{:<16}{}\n{:<16}{:<16}{:<16}{:<16}{}",
        "",
        "Original",
        "Current",
        "Item Name",
        "RFID",
        "Location",
        "Location",
        "Price",
        "---------",
        "---------",
        "---------",
        "---------",
        "------",
    )
}

/// One clean-store row: the vacated location in the third column, the
/// restored home shelf in the fourth.
pub fn relocation_row(relocation: &Relocation) -> String {
    let item = &relocation.item;
    format!(
        "{:<16}{:<17}{:<16}{:<15}{:.2}",
        item.name(),
        item.rfid(),
        relocation.previous,
        item.original_location(),
        item.price()
    )
}

/// Header plus one row per item.
pub fn render_table<'a, I>(items: I) -> String
where
    I: IntoIterator<Item = &'a ItemInfo>,
{
    let mut out = table_header();
    for item in items {
        out.push('\n');
        out.push_str(&item.to_string());
    }
    out
}

/// Header plus one row per relocation.
pub fn render_relocations(moved: &[Relocation]) -> String {
    let mut out = table_header();
    for relocation in moved {
        out.push('\n');
        out.push_str(&relocation_row(relocation));
    }
    out
}
