//! Error types for cipher and hash operations

use std::io;

use thiserror::Error;

/// Main error type for rotcipher operations
#[derive(Debug, Error)]
pub enum CipherError {
    /// I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// Hash modulus was zero
    #[error("Invalid modulus: hash size must be non-zero")]
    InvalidModulus,
    /// Plaintext character outside the printable band (strict mode only)
    #[error("Character {ch:?} at position {position} is outside the printable band")]
    OutOfBand { ch: char, position: usize },
    /// Malformed ciphertext (strict mode only)
    #[error("Invalid data: {0}")]
    InvalidData(String),
    /// Expected hash does not match the hash of the decrypted text
    #[error("Hash mismatch: expected {expected}, got {actual}")]
    HashMismatch { expected: u64, actual: u64 },
    /// Unrecognized console action
    #[error("Invalid action: {0:?}")]
    InvalidAction(String),
    /// Expected hash could not be parsed
    #[error("Invalid hash: {0:?}")]
    InvalidHash(String),
}

/// A specialized `Result` type for rotcipher operations
pub type Result<T> = std::result::Result<T, CipherError>;
