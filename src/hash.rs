//! Positional-exponential text hash
//!
//! A message `c_0 c_1 ... c_n` hashes to `sum((i + base) ^ code(c_i)) mod size`.
//! Codes go up to 125, so the terms are far wider than any machine integer.
//! Each term is reduced with modular exponentiation instead, which gives the
//! exact same residue as the arbitrary-precision sum.

use tracing::trace;

use crate::error::{CipherError, Result};

/// `base ^ exp mod modulus` by square-and-multiply
///
/// `base` must already be reduced below `modulus`, so every product fits in
/// a `u128`.
fn mod_pow(mut base: u128, mut exp: u32, modulus: u128) -> u128 {
    let mut result = 1 % modulus;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result * base % modulus;
        }
        base = base * base % modulus;
        exp >>= 1;
    }
    result
}

/// Streaming text hasher
///
/// Characters keep their position across `update` calls, so hashing a
/// message in pieces gives the same value as hashing it at once.
///
/// # Example
/// ```
/// use rotcipher::TextHasher;
///
/// let mut hasher = TextHasher::new(11, 100).unwrap();
/// hasher.update("AB");
/// hasher.update("C");
/// assert_eq!(hasher.finalize(), 52);
/// ```
#[derive(Debug, Clone)]
pub struct TextHasher {
    base: i64,
    modulus: u64,
    position: u64,
    sum: u128,
}

impl TextHasher {
    /// Create a hasher for the given base and hash size
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidModulus`] if `hash_size` is zero.
    pub fn new(base: i64, hash_size: u64) -> Result<Self> {
        if hash_size == 0 {
            return Err(CipherError::InvalidModulus);
        }

        Ok(Self {
            base,
            modulus: hash_size,
            position: 0,
            sum: 0,
        })
    }

    /// Feed more text into the hash
    pub fn update(&mut self, text: &str) {
        let modulus = u128::from(self.modulus);

        for ch in text.chars() {
            let term_base = (i128::from(self.position) + i128::from(self.base))
                .rem_euclid(modulus as i128) as u128;
            let term = mod_pow(term_base, u32::from(ch), modulus);
            self.sum = (self.sum + term) % modulus;
            self.position += 1;
        }
    }

    /// Number of characters hashed so far
    pub fn len(&self) -> u64 {
        self.position
    }

    /// Whether no characters have been hashed yet
    pub fn is_empty(&self) -> bool {
        self.position == 0
    }

    /// Return the hash of everything fed so far
    pub fn finalize(self) -> u64 {
        trace!(
            base = self.base,
            modulus = self.modulus,
            chars = self.position,
            "finalized text hash"
        );
        // sum < modulus <= u64::MAX
        self.sum as u64
    }
}

/// Hash a message with the given base and hash size
///
/// # Errors
/// Returns [`CipherError::InvalidModulus`] if `hash_size` is zero.
///
/// # Example
/// ```
/// use rotcipher::hash_text;
///
/// assert_eq!(hash_text("A", 11, 100).unwrap(), 51);
/// assert_eq!(hash_text("", 11, 100).unwrap(), 0);
/// ```
pub fn hash_text(message: &str, base: i64, hash_size: u64) -> Result<u64> {
    let mut hasher = TextHasher::new(base, hash_size)?;
    hasher.update(message);
    Ok(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mod_pow() {
        assert_eq!(mod_pow(11, 65, 100), 51);
        assert_eq!(mod_pow(2, 10, 1000), 24);
        assert_eq!(mod_pow(0, 0, 7), 1);
        assert_eq!(mod_pow(5, 3, 1), 0);
    }

    #[test]
    fn test_mod_pow_large_modulus() {
        let modulus = u128::from(u64::MAX);
        // (m - 1)^2 = 1 mod m
        assert_eq!(mod_pow(modulus - 1, 2, modulus), 1);
    }

    #[test]
    fn test_hash_vectors() {
        assert_eq!(hash_text("A", 11, 100).unwrap(), 51);
        assert_eq!(hash_text("AB", 11, 100).unwrap(), 35);
        assert_eq!(hash_text("ABC", 11, 100).unwrap(), 52);
    }

    #[test]
    fn test_hash_empty() {
        assert_eq!(hash_text("", 31, 1_000_000_000).unwrap(), 0);
        assert_eq!(hash_text("", 0, 1).unwrap(), 0);
    }

    #[test]
    fn test_hash_zero_modulus() {
        assert!(matches!(
            hash_text("abc", 31, 0),
            Err(CipherError::InvalidModulus)
        ));
    }

    #[test]
    fn test_hash_small_exact() {
        // "!" is 33, small enough to compute exactly
        let exact = 2u128.pow(33) + 3u128.pow(33);
        assert_eq!(
            hash_text("!!", 2, 1_000_003).unwrap() as u128,
            exact % 1_000_003
        );
    }

    #[test]
    fn test_hash_negative_base() {
        // (0 - 3)^65 = -(3^65), residue is non-negative
        let positive = mod_pow(3, 65, 100);
        let expected = (100 - positive) % 100;
        assert_eq!(hash_text("A", -3, 100).unwrap() as u128, expected);
    }

    #[test]
    fn test_hasher_streaming_matches_one_shot() {
        let mut hasher = TextHasher::new(31, 1_000_000_000).unwrap();
        hasher.update("Hello, ");
        hasher.update("");
        hasher.update("world!");
        assert_eq!(hasher.len(), 13);
        assert_eq!(
            hasher.finalize(),
            hash_text("Hello, world!", 31, 1_000_000_000).unwrap()
        );
    }

    #[test]
    fn test_hash_position_matters() {
        assert_ne!(
            hash_text("AB", 11, 1_000_000_000).unwrap(),
            hash_text("BA", 11, 1_000_000_000).unwrap()
        );
    }
}
