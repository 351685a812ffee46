use std::cmp::Ordering;

use serde::Serialize;
use shelftrack_core::{CartNumber, Location, Rfid, ValidationError, ValidationResult};

use crate::item::ItemInfo;

/// The store's single item collection, kept sorted ascending by RFID.
///
/// Order is the only index, so every lookup is a linear scan. Items enter
/// through [`StoreManager::insert`] and leave through
/// [`StoreManager::remove_all_purchased`] (or positional removal); the
/// movement operations only rewrite an item's current location.
pub struct StoreManager {
    items: Vec<ItemInfo>,
}

/// Result of a cart checkout: the line snapshots and the amount due.
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutReceipt {
    pub cart: CartNumber,
    pub lines: Vec<ItemInfo>,
    pub total: f64,
}

/// A wrong-shelf item sent home by [`StoreManager::clean_store`].
#[derive(Debug, Clone, Serialize)]
pub struct Relocation {
    /// The record after the reset, back on its home shelf.
    pub item: ItemInfo,
    /// Where it was picked up from.
    pub previous: Location,
}

impl StoreManager {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All records, ascending by RFID.
    pub fn items(&self) -> &[ItemInfo] {
        &self.items
    }

    /// Insert a new item at its home shelf, keeping RFID order.
    ///
    /// Ties break toward the new record: it lands immediately before the
    /// first existing record with an equal-or-greater tag.
    pub fn insert(
        &mut self,
        name: &str,
        rfid: &str,
        price: f64,
        original_location: &str,
    ) -> ValidationResult<()> {
        let item = ItemInfo::new(name, price, rfid, original_location)?;
        let at = self
            .items
            .iter()
            .position(|existing| item.cmp_by_rfid(existing) != Ordering::Greater)
            .unwrap_or(self.items.len());
        tracing::debug!(rfid = %item.rfid(), shelf = %item.original_location(), "item inserted");
        self.items.insert(at, item);
        Ok(())
    }

    /// Move the first item tagged `rfid` that sits at `source` over to
    /// `dest`. Returns whether such an item existed; a miss is not an error.
    pub fn move_item(&mut self, rfid: &str, source: &str, dest: &str) -> ValidationResult<bool> {
        let rfid = Rfid::parse(rfid)?;
        let source = Location::parse_source(source)?;
        let dest = Location::parse(dest).map_err(|_| {
            ValidationError::new("New location must be a shelf position, a cart number, or out.")
        })?;
        for item in &mut self.items {
            if *item.rfid() == rfid && *item.current_location() == source {
                // Second guard: the source grammar already rejects "out",
                // so this cannot fire. Kept as-is.
                if item.current_location().is_out() {
                    return Err(ValidationError::new("Source location cannot be out."));
                }
                tracing::debug!(rfid = %rfid, from = %source, to = %dest, "item moved");
                item.set_current_location(dest);
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Check out every item sitting in `cart_number`.
    ///
    /// Receipt lines are snapshotted before the items transition to "out",
    /// so they still show the cart they came from. An emptied cart yields
    /// an empty receipt with a zero total.
    pub fn check_out(&mut self, cart_number: &str) -> ValidationResult<CheckoutReceipt> {
        let cart = CartNumber::parse(cart_number)?;
        let in_cart = Location::Cart(cart.clone());
        let mut lines = Vec::new();
        let mut total = 0.0;
        for item in &mut self.items {
            if *item.current_location() == in_cart {
                total += item.price();
                lines.push(item.clone());
                item.set_current_location(Location::Out);
            }
        }
        tracing::info!(cart = %cart, items = lines.len(), total, "cart checked out");
        Ok(CheckoutReceipt { cart, lines, total })
    }

    /// Records currently at `location`, ascending by RFID. Read-only.
    pub fn items_by_location(&self, location: &str) -> ValidationResult<Vec<&ItemInfo>> {
        let location = Location::parse(location)?;
        Ok(self
            .items
            .iter()
            .filter(|item| *item.current_location() == location)
            .collect())
    }

    /// Records tagged `rfid`; duplicates come out adjacent. Read-only.
    pub fn items_by_rfid(&self, rfid: &str) -> ValidationResult<Vec<&ItemInfo>> {
        let rfid = Rfid::parse(rfid)?;
        Ok(self
            .items
            .iter()
            .filter(|item| *item.rfid() == rfid)
            .collect())
    }

    /// Send every wrong-shelf item back to its home shelf.
    ///
    /// Only items currently on a shelf other than their own move. Items in
    /// carts stay with the cart, and sold items stay out.
    pub fn clean_store(&mut self) -> Vec<Relocation> {
        let mut moved = Vec::new();
        for item in &mut self.items {
            let misplaced = match item.current_location() {
                Location::Shelf(shelf) => shelf != item.original_location(),
                _ => false,
            };
            if misplaced {
                let previous = item.current_location().clone();
                let home = Location::Shelf(item.original_location().clone());
                item.set_current_location(home);
                moved.push(Relocation {
                    item: item.clone(),
                    previous,
                });
            }
        }
        tracing::info!(moved = moved.len(), "store cleaned");
        moved
    }

    /// Delete every item marked "out", returning the removed records in
    /// ascending RFID order. Permanent.
    pub fn remove_all_purchased(&mut self) -> Vec<ItemInfo> {
        let mut removed = Vec::new();
        self.items.retain(|item| {
            if item.current_location().is_out() {
                removed.push(item.clone());
                false
            } else {
                true
            }
        });
        tracing::info!(removed = removed.len(), "purchased items removed");
        removed
    }

    /// Remove the record at `index`.
    pub fn remove(&mut self, index: usize) -> ItemInfo {
        self.items.remove(index)
    }
}

impl Default for StoreManager {
    fn default() -> Self {
        Self::new()
    }
}
