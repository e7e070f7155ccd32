use super::*;

/// Build a line with its total already recomputed
fn line(quantity: i32, unit_price: f64) -> OrderLine {
    let mut line = OrderLine {
        item_id: "i1".to_string(),
        item_name: "Item".to_string(),
        category: None,
        quantity,
        unit_price,
        total_price: 0.0,
    };
    recalc_line(&mut line);
    line
}

#[test]
fn test_to_decimal_precision() {
    // Classic floating point problem: 0.1 + 0.2 != 0.3
    let a = 0.1_f64;
    let b = 0.2_f64;
    let sum_f64 = a + b;

    // f64 fails
    assert_ne!(sum_f64, 0.3);

    // Decimal succeeds
    let sum_dec = to_decimal(a) + to_decimal(b);
    assert_eq!(to_f64(sum_dec), 0.3);
}

#[test]
fn test_to_decimal_nan_becomes_zero() {
    assert_eq!(to_decimal(f64::NAN), Decimal::ZERO);
    assert_eq!(to_decimal(f64::INFINITY), Decimal::ZERO);
    assert_eq!(to_decimal(f64::NEG_INFINITY), Decimal::ZERO);
}

// ========================================================================
// recalc_line
// ========================================================================

#[test]
fn test_recalc_line_basic() {
    let line = line(3, 10.99);
    assert_eq!(line.total_price, 32.97);
}

#[test]
fn test_recalc_line_overwrites_stale_total() {
    let mut stale = OrderLine {
        total_price: 999.0,
        ..line(2, 100.0)
    };
    recalc_line(&mut stale);
    assert_eq!(stale.total_price, 200.0);
}

#[test]
fn test_recalc_line_zero_quantity() {
    assert_eq!(line(0, 10.0).total_price, 0.0);
}

#[test]
fn test_recalc_line_negative_quantity() {
    // The calculator is tolerant; the draft boundary rejects this upstream
    assert_eq!(line(-5, 10.0).total_price, -50.0);
}

#[test]
fn test_recalc_line_nan_price_degrades_to_zero() {
    assert_eq!(line(4, f64::NAN).total_price, 0.0);
    assert_eq!(line(4, f64::INFINITY).total_price, 0.0);
}

#[test]
fn test_recalc_line_idempotent() {
    let mut item = line(7, 33.33);
    let first = item.total_price;
    recalc_line(&mut item);
    recalc_line(&mut item);
    assert_eq!(item.total_price, first);
}

#[test]
fn test_recalc_line_large_values() {
    let line = line(10000, 999_999.99);
    assert_eq!(line.total_price, 9_999_999_900.0);
}

// ========================================================================
// compute_subtotal
// ========================================================================

#[test]
fn test_subtotal_empty_is_zero() {
    assert_eq!(compute_subtotal(&[]), 0.0);
}

#[test]
fn test_subtotal_sums_line_totals() {
    let items = vec![line(1, 50.0), line(3, 20.0)];
    assert_eq!(compute_subtotal(&items), 110.0);
}

#[test]
fn test_subtotal_uses_stored_totals() {
    // compute_subtotal trusts total_price as it stands; keeping lines
    // consistent is recalc_line's job
    let stale = OrderLine {
        total_price: 42.0,
        ..line(1, 100.0)
    };
    assert_eq!(compute_subtotal(&[stale]), 42.0);
}

#[test]
fn test_subtotal_accumulation_precision() {
    // 100 lines at 0.01 each sum to exactly 1.00
    let items: Vec<OrderLine> = (0..100).map(|_| line(1, 0.01)).collect();
    assert_eq!(compute_subtotal(&items), 1.0);
}

// ========================================================================
// compute_totals
// ========================================================================

#[test]
fn test_totals_discount_and_tax() {
    let totals = compute_totals(&[line(2, 100.0)], 10.0, 5.0);
    assert_eq!(totals.subtotal, 200.0);
    assert_eq!(totals.discount_amount, 20.0);
    assert_eq!(totals.after_discount, 180.0);
    assert_eq!(totals.tax_amount, 9.0);
    assert_eq!(totals.grand_total, 189.0);
}

#[test]
fn test_totals_no_discount_no_tax() {
    let items = vec![line(1, 50.0), line(3, 20.0)];
    let totals = compute_totals(&items, 0.0, 0.0);
    assert_eq!(totals.subtotal, 110.0);
    assert_eq!(totals.grand_total, 110.0);
}

#[test]
fn test_totals_empty_order() {
    let totals = compute_totals(&[], 10.0, 8.0);
    assert_eq!(totals.subtotal, 0.0);
    assert_eq!(totals.discount_amount, 0.0);
    assert_eq!(totals.grand_total, 0.0);
}

#[test]
fn test_totals_discount_over_100_clamps_to_zero() {
    let totals = compute_totals(&[line(1, 100.0)], 150.0, 0.0);
    assert_eq!(totals.after_discount, -50.0);
    assert_eq!(totals.grand_total, 0.0, "grand total never goes negative");
}

#[test]
fn test_totals_intermediates_keep_full_precision() {
    let totals = compute_totals(&[line(5, 33.33)], 10.0, 8.0);
    assert_eq!(totals.subtotal, 166.65);
    assert_eq!(totals.discount_amount, 16.665);
    assert_eq!(totals.after_discount, 149.985);
    assert_eq!(totals.tax_amount, 11.9988);
    // 149.985 + 11.9988 = 161.9838 -> 162
    assert_eq!(totals.grand_total, 162.0);
}

#[test]
fn test_grand_total_rounds_half_away_from_zero() {
    let up = compute_totals(&[line(1, 100.5)], 0.0, 0.0);
    assert_eq!(up.grand_total, 101.0);

    let down = compute_totals(&[line(1, 100.4)], 0.0, 0.0);
    assert_eq!(down.grand_total, 100.0);
}

#[test]
fn test_tax_applies_to_discounted_amount_not_raw_subtotal() {
    // subtotal 200, discount 10%, tax 5%
    let totals = compute_totals(&[line(2, 100.0)], 10.0, 5.0);

    // Wrong composition: tax on the raw subtotal, then discount
    let wrong = 200.0 - 20.0 + 200.0 * 0.05;
    assert_eq!(wrong, 190.0);
    assert_ne!(totals.grand_total, wrong);
    assert_eq!(totals.grand_total, 189.0);
}

#[test]
fn test_grand_total_monotonic_in_tax() {
    let items = vec![line(3, 47.5)];
    let mut previous = f64::MIN;
    for tax in [0.0, 1.0, 2.5, 5.0, 7.5, 10.0, 18.0, 28.0] {
        let grand = compute_totals(&items, 12.0, tax).grand_total;
        assert!(grand >= previous, "tax {tax}: {grand} < {previous}");
        previous = grand;
    }
}

#[test]
fn test_grand_total_monotonic_in_discount() {
    let items = vec![line(3, 47.5)];
    let mut previous = f64::MAX;
    for discount in [0.0, 5.0, 10.0, 25.0, 50.0, 75.0, 100.0, 120.0] {
        let grand = compute_totals(&items, discount, 18.0).grand_total;
        assert!(grand <= previous, "discount {discount}: {grand} > {previous}");
        previous = grand;
    }
}

#[test]
fn test_totals_idempotent() {
    let items = vec![line(2, 33.33), line(1, 0.01)];
    let first = compute_totals(&items, 7.5, 12.0);
    let second = compute_totals(&items, 7.5, 12.0);
    assert_eq!(first, second);
}

#[test]
fn test_totals_non_finite_percentages_degrade_to_zero() {
    let totals = compute_totals(&[line(1, 100.0)], f64::NAN, f64::INFINITY);
    assert_eq!(totals.discount_amount, 0.0);
    assert_eq!(totals.tax_amount, 0.0);
    assert_eq!(totals.grand_total, 100.0);
}

// ========================================================================
// money_eq
// ========================================================================

#[test]
fn test_money_eq() {
    assert!(money_eq(100.0, 100.0));
    assert!(money_eq(100.004, 100.006));
    assert!(!money_eq(100.0, 100.02));
}

#[test]
fn test_money_eq_detects_server_drift() {
    // Client computed 189, server persisted 189.5: outside tolerance
    assert!(!money_eq(189.0, 189.5));
}
