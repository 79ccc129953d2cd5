//! Decryption: strip escape markers, then rotate back

use tracing::debug;

use crate::consts::{DEFAULT_ROTATION, ESCAPE_CHAR, ESCAPE_THRESHOLD};
use crate::error::{CipherError, Result};
use crate::rotate::{code_to_char, in_band, inverse, rotate_code};

/// Decrypt a single ciphertext code
#[inline]
fn decode_code(code: u32, amount: i64) -> char {
    code_to_char(rotate_code(code, inverse(amount)))
}

/// Decoder with configurable options
#[derive(Debug, Clone)]
pub struct Decoder {
    rotation: i64,
    strict: bool,
}

impl Default for Decoder {
    fn default() -> Self {
        Self {
            rotation: DEFAULT_ROTATION,
            strict: false,
        }
    }
}

impl Decoder {
    /// Create a new decoder with default settings
    ///
    /// Default settings:
    /// - Rotation: 23
    /// - Lenient mode (markers are dropped wherever they appear)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the rotation amount. Must match the amount used to encrypt.
    pub fn rotation(mut self, amount: i64) -> Self {
        self.rotation = amount;
        self
    }

    /// Enable strict validation of escape markers
    ///
    /// When enabled, the ciphertext must look exactly like encoder output:
    /// only band characters and markers, a marker after every value below
    /// 48, and no marker anywhere else.
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Decrypt a message
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidData`] in strict mode when the
    /// ciphertext could not have been produced by the encoder.
    ///
    /// # Example
    /// ```
    /// use rotcipher::Decoder;
    ///
    /// let plain = Decoder::new()
    ///     .rotation(-1)
    ///     .strict()
    ///     .decrypt("sdws ~gdqd")
    ///     .unwrap();
    /// assert_eq!(plain, "text!here");
    /// ```
    pub fn decrypt(&self, message: &str) -> Result<String> {
        if !self.strict {
            return Ok(decrypt(message, self.rotation));
        }

        let mut output = String::with_capacity(message.len());
        let mut awaiting_marker = false;
        let mut markers = 0;

        for (position, ch) in message.chars().enumerate() {
            let code = u32::from(ch);

            if ch == ESCAPE_CHAR {
                if !awaiting_marker {
                    return Err(CipherError::InvalidData(format!(
                        "Unexpected escape marker at position {}",
                        position
                    )));
                }
                awaiting_marker = false;
                markers += 1;
                continue;
            }

            if awaiting_marker {
                return Err(CipherError::InvalidData(format!(
                    "Missing escape marker at position {}",
                    position
                )));
            }

            if !in_band(code) {
                return Err(CipherError::InvalidData(format!(
                    "Invalid character {:?} at position {}",
                    ch, position
                )));
            }

            awaiting_marker = code < ESCAPE_THRESHOLD;
            output.push(decode_code(code, self.rotation));
        }

        if awaiting_marker {
            return Err(CipherError::InvalidData(
                "Message ended with a missing escape marker".to_string(),
            ));
        }

        debug!(rotation = self.rotation, markers, "decrypted message");
        Ok(output)
    }
}

/// Decrypt a message with the given rotation amount
///
/// Every `~` is dropped before rotating back; nothing is validated.
///
/// # Example
/// ```
/// use rotcipher::decrypt;
///
/// assert_eq!(decrypt("ifmmp", 1), "hello");
/// assert_eq!(decrypt("sdws ~gdqd", -1), "text!here");
/// ```
pub fn decrypt(message: &str, amount: i64) -> String {
    message
        .chars()
        .filter(|&ch| ch != ESCAPE_CHAR)
        .map(|ch| decode_code(u32::from(ch), amount))
        .collect()
}
