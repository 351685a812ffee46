use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};
use shelftrack_core::{Location, Rfid, ShelfLocation, ValidationError, ValidationResult};

/// One tagged merchandise item.
///
/// Fields mutate in place, but only through checks that keep every field
/// inside its grammar; a rejected write leaves the prior value untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemInfo {
    name: String,
    rfid: Rfid,
    original_location: ShelfLocation,
    current_location: Location,
    price: f64,
}

impl ItemInfo {
    /// Build a record, checking name, rfid, location, then price and
    /// failing on the first violation. The item starts on its home shelf.
    pub fn new(
        name: &str,
        price: f64,
        rfid: &str,
        original_location: &str,
    ) -> ValidationResult<Self> {
        let name = validate_name(name)?;
        let rfid = Rfid::parse(rfid)?;
        let original_location = ShelfLocation::parse(original_location)?;
        let price = validate_price(price)?;
        Ok(Self {
            name,
            rfid,
            current_location: Location::Shelf(original_location.clone()),
            original_location,
            price,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rfid(&self) -> &Rfid {
        &self.rfid
    }

    pub fn original_location(&self) -> &ShelfLocation {
        &self.original_location
    }

    pub fn current_location(&self) -> &Location {
        &self.current_location
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn set_name(&mut self, name: &str) -> ValidationResult<()> {
        self.name = validate_name(name)?;
        Ok(())
    }

    pub fn set_rfid(&mut self, rfid: Rfid) {
        self.rfid = rfid;
    }

    /// No collection operation rewrites the home shelf; the setter exists
    /// for completeness and only accepts an already-valid shelf.
    pub fn set_original_location(&mut self, location: ShelfLocation) {
        self.original_location = location;
    }

    pub fn set_current_location(&mut self, location: Location) {
        self.current_location = location;
    }

    pub fn set_price(&mut self, price: f64) -> ValidationResult<()> {
        self.price = validate_price(price)?;
        Ok(())
    }

    /// Order two records by tag, ascending.
    pub fn cmp_by_rfid(&self, other: &ItemInfo) -> Ordering {
        self.rfid.cmp(&other.rfid)
    }
}

fn validate_name(name: &str) -> ValidationResult<String> {
    if name.is_empty() || name.chars().count() > 20 {
        return Err(ValidationError::new(
            "Name cannot be empty or greater than 20 characters.",
        ));
    }
    Ok(name.to_owned())
}

fn validate_price(price: f64) -> ValidationResult<f64> {
    if !price.is_finite() || price < 0.0 {
        return Err(ValidationError::new("Price must be positive."));
    }
    Ok(price)
}

/// The fixed-width listing row: name 16, rfid 17, original location 16,
/// current location 15, price with two decimals.
impl fmt::Display for ItemInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<16}{:<17}{:<16}{:<15}{:.2}",
            self.name, self.rfid, self.original_location, self.current_location, self.price
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_starts_on_home_shelf() {
        let item = ItemInfo::new("lamp", 24.99, "abc123def", "s11111").unwrap();
        assert_eq!(item.rfid().as_str(), "ABC123DEF");
        assert_eq!(item.original_location().as_str(), "s11111");
        assert_eq!(item.current_location().as_str(), "s11111");
    }

    #[test]
    fn test_name_boundaries() {
        let twenty = "x".repeat(20);
        let twenty_one = "x".repeat(21);
        assert!(ItemInfo::new(&twenty, 1.0, "123456789", "s00001").is_ok());
        assert!(ItemInfo::new(&twenty_one, 1.0, "123456789", "s00001").is_err());
        assert!(ItemInfo::new("", 1.0, "123456789", "s00001").is_err());
    }

    #[test]
    fn test_validation_order_reports_first_violation() {
        // Both the name and the rfid are bad; the name check runs first.
        let err = ItemInfo::new("", 1.0, "nope", "s00001").unwrap_err();
        assert!(err.message().starts_with("Name"));
    }

    #[test]
    fn test_negative_price_rejected() {
        assert!(ItemInfo::new("lamp", -0.01, "123456789", "s00001").is_err());
        assert!(ItemInfo::new("lamp", f64::NAN, "123456789", "s00001").is_err());
        assert!(ItemInfo::new("lamp", 0.0, "123456789", "s00001").is_ok());
    }

    #[test]
    fn test_set_name_keeps_prior_value_on_failure() {
        let mut item = ItemInfo::new("lamp", 1.0, "123456789", "s00001").unwrap();
        assert!(item.set_name(&"x".repeat(21)).is_err());
        assert_eq!(item.name(), "lamp");
    }

    #[test]
    fn test_display_row_layout() {
        let item = ItemInfo::new("mirror", 7.5, "A1B2C3D4E", "s12345").unwrap();
        assert_eq!(
            item.to_string(),
            "mirror          A1B2C3D4E        s12345          s12345         7.50"
        );
    }

    #[test]
    fn test_cmp_by_rfid() {
        let low = ItemInfo::new("a", 1.0, "000000001", "s00001").unwrap();
        let high = ItemInfo::new("b", 1.0, "F00000001", "s00001").unwrap();
        assert_eq!(low.cmp_by_rfid(&high), Ordering::Less);
        assert_eq!(low.cmp_by_rfid(&low), Ordering::Equal);
    }
}
