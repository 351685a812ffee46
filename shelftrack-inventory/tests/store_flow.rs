//! End-to-end flows over the store collection: ordering under churn, the
//! shelf/cart/out lifecycle, and the purge pass.

use std::cmp::Ordering;

use shelftrack_inventory::{report, StoreManager};

fn assert_sorted(store: &StoreManager) {
    assert!(store
        .items()
        .windows(2)
        .all(|pair| pair[0].cmp_by_rfid(&pair[1]) != Ordering::Greater));
}

#[test]
fn collection_stays_sorted_through_mixed_mutations() {
    let mut store = StoreManager::new();
    let tags = [
        "9F8E7D6C5", "000000000", "ABCDEF123", "123ABC456", "FFFFFFFFF", "000000001",
    ];
    for (n, tag) in tags.into_iter().enumerate() {
        store.insert(&format!("item{n}"), tag, n as f64, "s00001").unwrap();
        assert_sorted(&store);
    }

    store.move_item("ABCDEF123", "s00001", "c002").unwrap();
    store.check_out("c002").unwrap();
    store.remove_all_purchased();
    assert_sorted(&store);
    assert_eq!(store.len(), tags.len() - 1);
}

#[test]
fn equal_tags_insert_before_existing() {
    let mut store = StoreManager::new();
    store.insert("older", "AAAAAAAAA", 1.0, "s00001").unwrap();
    store.insert("newer", "AAAAAAAAA", 2.0, "s00002").unwrap();
    store.insert("newest", "AAAAAAAAA", 3.0, "s00003").unwrap();

    let names: Vec<&str> = store.items().iter().map(|i| i.name()).collect();
    assert_eq!(names, ["newest", "newer", "older"]);
}

#[test]
fn checkout_then_purge_round_trip() {
    let mut store = StoreManager::new();
    store.insert("teapot", "0A0A0A0A0", 10.0, "s10101").unwrap();
    store.insert("kettle", "0B0B0B0B0", 5.5, "s10102").unwrap();

    assert!(store.move_item("0A0A0A0A0", "s10101", "c001").unwrap());
    assert!(store.move_item("0B0B0B0B0", "s10102", "c001").unwrap());

    let receipt = store.check_out("c001").unwrap();
    assert_eq!(receipt.total, 15.5);
    assert_eq!(receipt.cart.as_str(), "c001");
    assert!(store
        .items()
        .iter()
        .all(|item| item.current_location().is_out()));

    // Re-checking the emptied cart charges nothing.
    let empty = store.check_out("c001").unwrap();
    assert_eq!(empty.total, 0.0);

    // Each sold item leaves exactly once.
    let removed = store.remove_all_purchased();
    assert_eq!(removed.len(), 2);
    assert!(store.is_empty());
    assert!(store.remove_all_purchased().is_empty());
}

#[test]
fn clean_store_spares_carts_and_sold_items() {
    let mut store = StoreManager::new();
    store.insert("wrong shelf", "111111111", 1.0, "s00001").unwrap();
    store.insert("in cart", "222222222", 1.0, "s00002").unwrap();
    store.insert("sold", "333333333", 1.0, "s00003").unwrap();
    store.insert("home", "444444444", 1.0, "s00004").unwrap();

    store.move_item("111111111", "s00001", "s99999").unwrap();
    store.move_item("222222222", "s00002", "c005").unwrap();
    store.move_item("333333333", "s00003", "out").unwrap();

    let moved = store.clean_store();
    assert_eq!(moved.len(), 1);
    assert_eq!(moved[0].item.rfid().as_str(), "111111111");
    assert_eq!(moved[0].previous.as_str(), "s99999");

    let locations: Vec<&str> = store
        .items()
        .iter()
        .map(|item| item.current_location().as_str())
        .collect();
    assert_eq!(locations, ["s00001", "c005", "out", "s00004"]);

    // A second pass finds nothing left to fix.
    assert!(store.clean_store().is_empty());
}

#[test]
fn move_miss_leaves_no_trace() {
    let mut store = StoreManager::new();
    store.insert("lamp", "123456789", 9.99, "s00001").unwrap();
    let before = report::render_table(store.items());

    // Well-formed but matching nothing: wrong tag, then wrong source.
    assert!(!store.move_item("987654321", "s00001", "c001").unwrap());
    assert!(!store.move_item("123456789", "c001", "s00002").unwrap());

    assert_eq!(report::render_table(store.items()), before);
}

#[test]
fn purge_removes_boundary_elements_cleanly() {
    let mut store = StoreManager::new();
    store.insert("first", "000000000", 1.0, "s00001").unwrap();
    store.insert("second", "777777777", 1.0, "s00002").unwrap();
    store.insert("third", "FFFFFFFFF", 1.0, "s00003").unwrap();

    // Sell the head, keep the middle, sell the tail.
    store.move_item("000000000", "s00001", "c001").unwrap();
    store.move_item("FFFFFFFFF", "s00003", "c001").unwrap();
    store.check_out("c001").unwrap();

    let removed = store.remove_all_purchased();
    let gone: Vec<&str> = removed.iter().map(|item| item.rfid().as_str()).collect();
    assert_eq!(gone, ["000000000", "FFFFFFFFF"]);

    // Full forward traversal of what remains.
    assert_eq!(store.len(), 1);
    assert_eq!(store.items()[0].rfid().as_str(), "777777777");
    assert_sorted(&store);
}

#[test]
fn validation_failures_reject_eagerly() {
    let mut store = StoreManager::new();
    store.insert("lamp", "123456789", 1.0, "s00001").unwrap();

    for result in [
        store.insert(&"x".repeat(21), "123456780", 1.0, "s00001"),
        store.insert("lamp", "12345678", 1.0, "s00001"),
        store.insert("lamp", "1234567890", 1.0, "s00001"),
        store.insert("lamp", "12345678G", 1.0, "s00001"),
        store.insert("lamp", "123456780", -5.0, "s00001"),
        store.insert("lamp", "123456780", 1.0, "c001"),
    ] {
        assert!(result.is_err());
    }
    assert_eq!(store.len(), 1);

    assert!(store.move_item("123456789", "out", "s00001").is_err());
    assert!(store.move_item("123456789", "s00001", "elsewhere").is_err());
    assert!(store.items_by_location("aisle 9").is_err());
    assert!(store.items_by_rfid("zzz").is_err());
    assert_eq!(store.items()[0].current_location().as_str(), "s00001");
}
