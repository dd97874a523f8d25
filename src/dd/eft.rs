//! Error-free transformations: each primitive returns a rounded result
//! together with the exact rounding error, so that `result + err`
//! reconstructs the infinite-precision value.
//!
//! The expressions are written exactly as published (Dekker, Knuth) to
//! expose the rounding of each intermediate; do not "simplify" them.

/// Computes `fl(a + b)` and `err(a + b)`. Assumes `|a| >= |b|`.
#[inline(always)]
pub fn quick_two_sum(a: f64, b: f64) -> (f64, f64) {
    let s = a + b;
    let err = b - (s - a);
    (s, err)
}

/// Computes `fl(a - b)` and `err(a - b)`. Assumes `|a| >= |b|`.
#[inline(always)]
pub fn quick_two_diff(a: f64, b: f64) -> (f64, f64) {
    let s = a - b;
    let err = (a - s) - b;
    (s, err)
}

/// Computes `fl(a + b)` and `err(a + b)` with no ordering requirement.
#[inline(always)]
pub fn two_sum(a: f64, b: f64) -> (f64, f64) {
    let s = a + b;
    let bb = s - a;
    let err = (a - (s - bb)) + (b - bb);
    (s, err)
}

/// Computes `fl(a - b)` and `err(a - b)` with no ordering requirement.
#[inline(always)]
pub fn two_diff(a: f64, b: f64) -> (f64, f64) {
    let s = a - b;
    let bb = s - a;
    let err = (a - (s - bb)) - (b + bb);
    (s, err)
}

/// Computes `fl(a * b)` and `err(a * b)`.
#[cfg(not(feature = "split"))]
#[inline(always)]
pub fn two_prod(a: f64, b: f64) -> (f64, f64) {
    let p = a * b;
    let err = a.mul_add(b, -p);
    (p, err)
}

/// Computes `fl(a * a)` and `err(a * a)`. Faster than `two_prod(a, a)`.
#[cfg(not(feature = "split"))]
#[inline(always)]
pub fn two_sqr(a: f64) -> (f64, f64) {
    let p = a * a;
    let err = a.mul_add(a, -p);
    (p, err)
}

#[cfg(feature = "split")]
const SPLITTER: f64 = 134217729.0; // 2^27 + 1
#[cfg(feature = "split")]
const SPLIT_THRESH: f64 = 6.69692879491417e+299; // 2^996

/// Dekker split of `a` into 26-bit high and low halves, rescaling
/// operands near the overflow threshold so `SPLITTER * a` cannot
/// overflow.
#[cfg(feature = "split")]
#[inline(always)]
fn split(a: f64) -> (f64, f64) {
    if a > SPLIT_THRESH || a < -SPLIT_THRESH {
        let a = a * 3.7252902984619140625e-09; // 2^-28
        let temp = SPLITTER * a;
        let hi = temp - (temp - a);
        let lo = a - hi;
        (hi * 268435456.0, lo * 268435456.0) // 2^28
    } else {
        let temp = SPLITTER * a;
        let hi = temp - (temp - a);
        (hi, a - hi)
    }
}

/// Computes `fl(a * b)` and `err(a * b)`.
#[cfg(feature = "split")]
#[inline(always)]
pub fn two_prod(a: f64, b: f64) -> (f64, f64) {
    let p = a * b;
    let (a_hi, a_lo) = split(a);
    let (b_hi, b_lo) = split(b);
    let err = a_hi * b_hi - p + a_hi * b_lo + a_lo * b_hi + a_lo * b_lo;
    (p, err)
}

/// Computes `fl(a * a)` and `err(a * a)`. Faster than `two_prod(a, a)`.
#[cfg(feature = "split")]
#[inline(always)]
pub fn two_sqr(a: f64) -> (f64, f64) {
    let q = a * a;
    let (hi, lo) = split(a);
    let err = hi * hi - q + 2.0 * hi * lo + lo * lo;
    (q, err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_sum_keeps_sub_ulp_addend() {
        // 1e-20 is far below ulp(1.0); the error limb must carry it whole.
        let (s, e) = two_sum(1.0, 1e-20);
        assert_eq!(s, 1.0);
        assert_eq!(e, 1e-20);
    }

    #[test]
    fn two_sum_is_exact_for_representable_sums() {
        let cases = [(1.5, 2.25), (1024.0, -0.5), (3.0, 4.0), (-7.5, 7.5)];
        for &(a, b) in &cases {
            let (s, e) = two_sum(a, b);
            assert_eq!(s, a + b);
            assert_eq!(e, 0.0, "exact sum {a} + {b} must have no error term");
        }
    }

    #[test]
    fn two_diff_recovers_cancelled_bits() {
        let a = 1.0 + 2f64.powi(-30);
        let b = 1.0;
        let (s, e) = two_diff(a, b);
        assert_eq!(s, 2f64.powi(-30));
        assert_eq!(e, 0.0);
    }

    #[test]
    fn quick_two_sum_matches_two_sum_when_ordered() {
        let cases = [(1.0, 1e-20), (1e100, 1.0), (2.0, -1.0), (-3.0, 0.25)];
        for &(a, b) in &cases {
            assert_eq!(quick_two_sum(a, b), two_sum(a, b));
        }
    }

    #[test]
    fn two_prod_error_is_the_dropped_product_tail() {
        // (1 + 2^-30)^2 = 1 + 2^-29 + 2^-60; the 2^-60 tail exceeds 53 bits.
        let a = 1.0 + 2f64.powi(-30);
        let (p, e) = two_prod(a, a);
        assert_eq!(p, 1.0 + 2f64.powi(-29));
        assert_eq!(e, 2f64.powi(-60));
    }

    #[test]
    fn two_sqr_agrees_with_two_prod() {
        for &a in &[1.0 + 2f64.powi(-30), 3.14159, -2.718e10, 1e-200] {
            assert_eq!(two_sqr(a), two_prod(a, a));
        }
    }

    #[cfg(feature = "split")]
    #[test]
    fn split_products_survive_huge_operands() {
        let a = 1e300;
        let (p, e) = two_prod(a, 0.5);
        assert_eq!(p, 5e299);
        assert_eq!(e, 0.0);
    }
}
