//! Comparison helpers.

use bigfloat_fn::{Float, RoundingMode};

/// Asserts that `n` differs from the decimal `expected` by at most one unit in the last place of `n`.
pub fn assert_ulp_eq(n: &Float, expected: &str, op_name: &str, arg: &str) {
    let p = n.precision();
    let e = Float::parse(expected, p + 64, RoundingMode::ToEven).unwrap();

    let d = n.sub(&e, 2 * p + 64, RoundingMode::ToEven).unwrap();

    assert!(
        d.is_zero() || d.exponent() as i64 <= n.exponent() as i64 - p as i64,
        "{}({}) at precision {}: {} != {}",
        op_name,
        arg,
        p,
        n,
        e
    );
}

/// Precisions to test with.
pub const PRECISIONS: [usize; 5] = [24, 53, 64, 256, 1000];
