//! Primality helpers for the Hogtimus Prime rule.
//!
//! Turn scores never exceed 60, so plain trial division is plenty.

/// Is `n` a prime number? 0 and 1 are not.
#[must_use]
pub fn is_prime(n: u32) -> bool {
    if n < 2 {
        return false;
    }
    (2..n).all(|d| n % d != 0)
}

/// The smallest prime strictly greater than the prime `n`.
///
/// Panics if `n` is not prime, or if no larger prime fits in a `u32`.
///
/// ```
/// use rust_hog::core::next_prime;
///
/// assert_eq!(next_prime(13), 17);
/// ```
#[must_use]
pub fn next_prime(n: u32) -> u32 {
    assert!(is_prime(n), "n must be a prime number");
    (n + 1..=u32::MAX)
        .find(|&candidate| is_prime(candidate))
        .expect("a larger prime exists")
}
