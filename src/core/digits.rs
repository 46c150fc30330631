//! Decimal digit helpers.
//!
//! Positions count from the right: position 1 is the ones digit,
//! position 2 the tens digit, and so on.

use smallvec::SmallVec;

/// The digit of `n` at a 1-indexed position from the right.
///
/// Positions beyond the length of `n` yield 0.
///
/// ```
/// use rust_hog::core::digit;
///
/// assert_eq!(digit(12782975, 5), 8);
/// assert_eq!(digit(56, 3), 0);
/// ```
#[must_use]
pub fn digit(n: u32, position: u32) -> u32 {
    assert!(position > 0, "Digit positions start at 1");
    // 10^10 overflows u32; every u32 is shorter than that anyway.
    match 10u32.checked_pow(position - 1) {
        Some(place) => (n / place) % 10,
        None => 0,
    }
}

/// The digits of `n` at each requested position, in the order requested.
#[must_use]
pub fn digits_at(n: u32, positions: &[u32]) -> SmallVec<[u32; 4]> {
    positions.iter().map(|&p| digit(n, p)).collect()
}

/// The ones digit of `n`.
#[must_use]
pub fn ones(n: u32) -> u32 {
    n % 10
}

/// The tens digit of `n`.
#[must_use]
pub fn tens(n: u32) -> u32 {
    (n / 10) % 10
}

/// Are the last two digits of `a` the reverse of the last two digits of `b`?
///
/// Numbers below 10 have an implicit leading zero, so 3 and 30 pair up.
#[must_use]
pub fn is_reversed_pair(a: u32, b: u32) -> bool {
    ones(a) == tens(b) && tens(a) == ones(b)
}
