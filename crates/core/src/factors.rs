//! Factor arithmetic for the question numbers.
//!
//! Everything here is a pure function of its inputs; the model layer is
//! responsible for validating number ranges before calling in.

/// All factors of `n` in ascending order.
///
/// For any `n >= 1` the result starts with `1` and ends with `n`.
/// `factors_of(0)` returns an empty list; callers validate their inputs
/// before reaching this module.
///
/// # Examples
///
/// ```
/// # use hcf_core::factors::factors_of;
/// assert_eq!(factors_of(12), vec![1, 2, 3, 4, 6, 12]);
/// ```
#[must_use]
pub fn factors_of(n: u32) -> Vec<u32> {
    (1..=n).filter(|i| n % i == 0).collect()
}

/// Factors shared by `a` and `b`, ascending.
///
/// Non-empty for positive inputs, since 1 divides everything.
///
/// # Examples
///
/// ```
/// # use hcf_core::factors::common_factors;
/// assert_eq!(common_factors(12, 18), vec![1, 2, 3, 6]);
/// ```
#[must_use]
pub fn common_factors(a: u32, b: u32) -> Vec<u32> {
    let second = factors_of(b);
    factors_of(a)
        .into_iter()
        .filter(|factor| second.contains(factor))
        .collect()
}

/// The largest factor shared by `a` and `b`.
///
/// `None` only when the common set is empty, which requires a zero input;
/// for positive numbers the result always exists.
#[must_use]
pub fn highest_common_factor(a: u32, b: u32) -> Option<u32> {
    common_factors(a, b).last().copied()
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
