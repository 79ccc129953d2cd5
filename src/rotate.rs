//! Band rotation shared by the encoder and decoder

use crate::consts::{BAND_HIGH, BAND_LOW, BAND_SIZE};

/// Whether a character code lies in the rotation band
#[inline]
pub fn in_band(value: u32) -> bool {
    (BAND_LOW..=BAND_HIGH).contains(&value)
}

/// Reduce a rotation amount to `0..BAND_SIZE`
#[inline]
pub(crate) fn normalize(amount: i64) -> i64 {
    amount.rem_euclid(BAND_SIZE)
}

/// Rotation amount that undoes `amount`
///
/// Normalizes before negating so `i64::MIN` cannot overflow.
#[inline]
pub(crate) fn inverse(amount: i64) -> i64 {
    -normalize(amount)
}

/// Rotate a single character code
///
/// Computes `((value + amount - 32) mod 94) + 32`. The result is always in
/// the band, even for out-of-band input.
#[inline]
pub fn rotate_code(value: u32, amount: i64) -> u32 {
    let offset = (i64::from(value) - i64::from(BAND_LOW)).rem_euclid(BAND_SIZE);
    let rotated = (offset + normalize(amount)) % BAND_SIZE;
    rotated as u32 + BAND_LOW
}

/// Rotate every code in `values` by `amount`
///
/// # Example
/// ```
/// use rotcipher::rotate;
///
/// assert_eq!(rotate(&[104, 105], 1), vec![105, 106]);
/// assert_eq!(rotate(&[125], 1), vec![32]);
/// ```
pub fn rotate(values: &[u32], amount: i64) -> Vec<u32> {
    values.iter().map(|&v| rotate_code(v, amount)).collect()
}

/// Convert a rotated code back into a `char`
///
/// Rotated codes are always in the band, so they are plain ASCII.
#[inline]
pub(crate) fn code_to_char(code: u32) -> char {
    debug_assert!(in_band(code));
    char::from(code as u8)
}
