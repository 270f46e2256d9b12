//! End-to-end cart scenarios, driven through the public API and the JSON
//! command surface.

use cart_core::{Cart, CartCommand, CartError, Money, ValidationError, EMPTY_CART_MESSAGE};
use rust_decimal_macros::dec;
use tracing_subscriber::EnvFilter;

/// Route cart diagnostics to the test output (`RUST_LOG=cart_core=debug`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

#[test]
fn laptop_and_mouse_with_save10() {
    init_tracing();
    let mut cart = Cart::new();

    cart.add_item("Laptop", dec!(999.99), 1).unwrap();
    cart.add_item("Mouse", dec!(29.99), 2).unwrap();
    assert_eq!(cart.subtotal(), Money::from_cents(105997));

    cart.apply_discount("SAVE10").unwrap();
    assert_eq!(cart.applied_discount_amount(), dec!(105.997));
    assert_eq!(cart.discount(), Money::from_cents(10600));
    // (1059.97 - 105.997) * 10% = 95.3973
    assert_eq!(cart.tax(), Money::from_cents(9540));
    // round(953.973) + 95.40
    assert_eq!(cart.total(), Money::from_cents(104937));
}

#[test]
fn three_pennies_make_three_cents() {
    let mut cart = Cart::new();
    cart.add_item("Item", dec!(0.01), 3).unwrap();
    assert_eq!(cart.subtotal(), Money::from_cents(3));
    assert_eq!(cart.tax(), Money::zero());
    assert_eq!(cart.total(), Money::from_cents(3));
}

#[test]
fn repeated_add_merges_into_one_entry() {
    let mut cart = Cart::new();
    cart.add_item("X", dec!(50), 1).unwrap();
    cart.add_item("X", dec!(50), 1).unwrap();

    let items = cart.cart_items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].quantity, 2);
    assert_eq!(items[0].item_total, Money::from_cents(10000));
}

#[test]
fn discount_code_is_case_and_whitespace_insensitive() {
    let variants = ["SAVE10", "save10", "  Save10  ", "\tsAvE10\n"];
    let discounts: Vec<Money> = variants
        .iter()
        .map(|code| {
            let mut cart = Cart::new();
            cart.add_item("Chair", dec!(123.45), 1).unwrap();
            cart.apply_discount(code).unwrap();
            cart.discount()
        })
        .collect();

    assert!(discounts.iter().all(|d| *d == Money::from_cents(1235)));
}

#[test]
fn failed_operations_leave_cart_unchanged() {
    init_tracing();
    let mut cart = Cart::new();
    cart.add_item("Lamp", dec!(40), 2).unwrap();
    cart.apply_discount("SAVE20").unwrap();
    let before = cart.snapshot();

    assert!(cart.add_item("", dec!(1), 1).is_err());
    assert!(cart.add_item("Bulb", dec!(-1), 1).is_err());
    assert!(cart.add_item("Bulb", dec!(1), 0).is_err());
    assert!(cart.remove_item("Bulb").is_err());
    assert!(cart.update_quantity("Bulb", 3).is_err());
    assert!(cart.update_quantity("Lamp", 0).is_err());
    assert_eq!(
        cart.apply_discount("HALFOFF"),
        Err(CartError::InvalidDiscountCode("HALFOFF".to_string()))
    );

    assert_eq!(cart.snapshot(), before);
}

#[test]
fn clear_resets_everything() {
    let mut cart = Cart::new();
    cart.add_item("Lamp", dec!(40), 2).unwrap();
    cart.apply_discount("SAVE20").unwrap();

    cart.clear();
    assert_eq!(cart.item_count(), 0);
    assert_eq!(cart.discount(), Money::zero());
    assert_eq!(cart.total(), Money::zero());
    assert_eq!(cart.summary(), EMPTY_CART_MESSAGE);

    // A new item after clearing is not discounted
    cart.add_item("Lamp", dec!(40), 1).unwrap();
    assert_eq!(cart.total(), Money::from_cents(4400));
}

#[test]
fn item_count_is_distinct_products() {
    let mut cart = Cart::new();
    cart.add_item("A", dec!(1), 5).unwrap();
    cart.add_item("B", dec!(2), 7).unwrap();
    cart.add_item("A", dec!(1), 1).unwrap();

    assert_eq!(cart.item_count(), 2);
    assert_eq!(cart.total_quantity(), 13);
}

#[test]
fn json_session_round() {
    init_tracing();
    let mut cart = Cart::new();
    let script = [
        r#"{"op":"add_item","product":"Laptop","price":"999.99"}"#,
        r#"{"op":"add_item","product":"Mouse","price":"29.99","quantity":2}"#,
        r#"{"op":"apply_discount","code":" save10 "}"#,
    ];
    for line in script {
        cart.execute(CartCommand::from_json(line).unwrap()).unwrap();
    }

    let snapshot = cart.snapshot();
    assert_eq!(snapshot.item_count, 2);
    assert_eq!(snapshot.subtotal.cents(), 105997);
    assert_eq!(snapshot.discount.cents(), 10600);
    assert_eq!(snapshot.tax.cents(), 9540);
    assert_eq!(snapshot.total.cents(), 104937);
    assert_eq!(snapshot.discount_code.as_deref(), Some("SAVE10"));

    let err = CartCommand::from_json(
        r#"{"op":"update_quantity","product":"Mouse","quantity":2.5}"#,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        CartError::Validation(ValidationError::InvalidFormat { .. })
    ));
    assert_eq!(cart.get_item("Mouse").unwrap().quantity, 2);
}
