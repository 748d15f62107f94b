//! Polynomial rolling hash used to place keys into buckets.
//!
//! `h = (h * 31 + c) mod n` over the UTF-16 code units of the key, left to
//! right, starting at 0. Arithmetic is 32-bit signed with wraparound so that
//! bucket assignments are stable across platforms and match the historical
//! table layout for every key.

/// Multiplier applied to the accumulator before each code unit is added.
pub const MULTIPLIER: i32 = 31;

/// Map `key` to a bucket index in `[0, buckets)`.
///
/// `buckets` must be in `1..=i32::MAX`; `ChainedHashSet` checks this at
/// construction so the hot path never has to.
#[inline]
pub fn bucket_index(key: &str, buckets: i32) -> usize {
    debug_assert!(buckets > 0, "bucket count must be positive");
    let mut h: i32 = 0;
    for unit in key.encode_utf16() {
        h = h
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(i32::from(unit))
            .rem_euclid(buckets);
    }
    h as usize
}
