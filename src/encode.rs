//! Encryption: rotate every character, then tag low results with an escape marker

use std::io::Write;

use tracing::{debug, trace};

use crate::consts::{DEFAULT_ROTATION, ESCAPE_CHAR, ESCAPE_THRESHOLD};
use crate::error::{CipherError, Result};
use crate::rotate::{code_to_char, in_band, rotate_code};

#[inline]
fn needs_escape(rotated: u32) -> bool {
    rotated < ESCAPE_THRESHOLD
}

/// Append one encrypted character, returning whether a marker followed it
#[inline]
fn push_encrypted(output: &mut String, code: u32, amount: i64) -> bool {
    let rotated = rotate_code(code, amount);
    output.push(code_to_char(rotated));
    if needs_escape(rotated) {
        output.push(ESCAPE_CHAR);
        true
    } else {
        false
    }
}

/// Encoder with configurable options
#[derive(Debug, Clone)]
pub struct Encoder {
    rotation: i64,
    strict: bool,
}

impl Default for Encoder {
    fn default() -> Self {
        Self {
            rotation: DEFAULT_ROTATION,
            strict: false,
        }
    }
}

impl Encoder {
    /// Create a new encoder with default settings
    ///
    /// Default settings:
    /// - Rotation: 23
    /// - Lenient mode (out-of-band characters are rotated anyway)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the rotation amount. Any sign and magnitude is accepted.
    pub fn rotation(mut self, amount: i64) -> Self {
        self.rotation = amount;
        self
    }

    /// Reject characters outside the printable band
    ///
    /// Out-of-band characters do not survive a round trip.
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Encrypt a message into a new string
    ///
    /// # Errors
    /// Returns [`CipherError::OutOfBand`] in strict mode when the message
    /// contains a character outside `[32, 125]`.
    pub fn encrypt(&self, message: &str) -> Result<String> {
        let mut output = String::with_capacity(message.len() * 2);
        self.encrypt_into(message, &mut output)?;
        Ok(output)
    }

    /// Encrypt a message and write the ciphertext to a writer
    ///
    /// # Returns
    /// Number of characters written, escape markers included
    ///
    /// # Errors
    /// Returns [`CipherError::OutOfBand`] in strict mode, or an I/O error
    /// from the writer.
    pub fn encrypt_to<W: Write>(&self, message: &str, mut writer: W) -> Result<usize> {
        let mut output = String::with_capacity(message.len() * 2);
        let written = self.encrypt_into(message, &mut output)?;
        writer.write_all(output.as_bytes())?;
        Ok(written)
    }

    fn encrypt_into(&self, message: &str, output: &mut String) -> Result<usize> {
        let mut written = 0;
        let mut escapes = 0;

        for (position, ch) in message.chars().enumerate() {
            let code = u32::from(ch);
            if !in_band(code) {
                if self.strict {
                    debug!(?ch, position, "rejecting out-of-band character");
                    return Err(CipherError::OutOfBand { ch, position });
                }
                trace!(?ch, position, "rotating out-of-band character");
            }

            written += 1;
            if push_encrypted(output, code, self.rotation) {
                written += 1;
                escapes += 1;
            }
        }

        debug!(
            rotation = self.rotation,
            chars = written,
            escapes,
            "encrypted message"
        );
        Ok(written)
    }
}

/// Encrypt a message with the given rotation amount
///
/// Never fails: out-of-band characters are rotated into the band like any
/// other code, which means they will not decrypt back to themselves.
///
/// # Example
/// ```
/// use rotcipher::encrypt;
///
/// assert_eq!(encrypt("hello", 1), "ifmmp");
/// assert_eq!(encrypt("text!here", -1), "sdws ~gdqd");
/// ```
pub fn encrypt(message: &str, amount: i64) -> String {
    message
        .chars()
        .fold(String::with_capacity(message.len() * 2), |mut output, ch| {
            push_encrypted(&mut output, u32::from(ch), amount);
            output
        })
}
