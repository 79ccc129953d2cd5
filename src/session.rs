//! Console session: ask for an action, run it, report the result

use std::fmt;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use tracing::{debug, info};

use crate::consts::{DEFAULT_HASH_BASE, DEFAULT_HASH_SIZE, DEFAULT_ROTATION};
use crate::decode::Decoder;
use crate::encode::Encoder;
use crate::error::{CipherError, Result};
use crate::hash::TextHasher;

const ACTION_PROMPT: &str = "Enter your desired action. (encrypt/decrypt).";
const PLAINTEXT_PROMPT: &str = "Enter your plaintext message.";
const CIPHERTEXT_PROMPT: &str = "Enter your encrypted message.";
const HASH_PROMPT: &str = "Enter the expected hash.";

/// What the user asked the session to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Encrypt,
    Decrypt,
}

impl FromStr for Action {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "encrypt" => Ok(Action::Encrypt),
            "decrypt" => Ok(Action::Decrypt),
            other => Err(CipherError::InvalidAction(other.to_string())),
        }
    }
}

/// Parse a user-supplied expected hash
pub fn parse_hash(text: &str) -> Result<u64> {
    let trimmed = text.trim();
    trimmed
        .parse()
        .map_err(|_| CipherError::InvalidHash(trimmed.to_string()))
}

/// Operating parameters of a session
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub rotation: i64,
    pub hash_base: i64,
    pub hash_size: u64,
    /// Use strict encoder/decoder validation
    pub strict: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            rotation: DEFAULT_ROTATION,
            hash_base: DEFAULT_HASH_BASE,
            hash_size: DEFAULT_HASH_SIZE,
            strict: false,
        }
    }
}

/// Result of one session run
///
/// Only I/O failures, a zero hash size and strict-mode rejections are
/// errors; everything the user can get wrong is an outcome with a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Encrypted { message: String, hash: u64 },
    Decrypted { message: String },
    Mismatch { expected: u64, actual: u64 },
    InvalidAction(String),
    InvalidHash(String),
}

impl Outcome {
    /// Whether the requested action completed
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Encrypted { .. } | Outcome::Decrypted { .. })
    }

    /// Turn the non-success outcomes into errors
    pub fn check(self) -> Result<Self> {
        match self {
            Outcome::Mismatch { expected, actual } => {
                Err(CipherError::HashMismatch { expected, actual })
            }
            Outcome::InvalidAction(action) => Err(CipherError::InvalidAction(action)),
            Outcome::InvalidHash(hash) => Err(CipherError::InvalidHash(hash)),
            outcome => Ok(outcome),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Encrypted { message, hash } => write!(
                f,
                "Your encrypted message is {}, and your hashed value is {}.",
                message, hash
            ),
            Outcome::Decrypted { message } => write!(f, "Your decrypted message is {}.", message),
            Outcome::Mismatch { .. } => write!(f, "error: hashes don't match"),
            Outcome::InvalidAction(_) => write!(f, "Please enter a valid action."),
            Outcome::InvalidHash(_) => write!(f, "Please enter a valid hash."),
        }
    }
}

/// Encrypt/decrypt session bound to one configuration
#[derive(Debug, Clone, Default)]
pub struct Session {
    config: SessionConfig,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    fn encoder(&self) -> Encoder {
        let encoder = Encoder::new().rotation(self.config.rotation);
        if self.config.strict {
            encoder.strict()
        } else {
            encoder
        }
    }

    fn decoder(&self) -> Decoder {
        let decoder = Decoder::new().rotation(self.config.rotation);
        if self.config.strict {
            decoder.strict()
        } else {
            decoder
        }
    }

    fn hash(&self, text: &str) -> Result<u64> {
        let mut hasher = TextHasher::new(self.config.hash_base, self.config.hash_size)?;
        hasher.update(text);
        Ok(hasher.finalize())
    }

    /// Encrypt a plaintext and hash it
    ///
    /// # Errors
    /// Returns an error for a zero hash size, or for out-of-band characters
    /// in strict mode.
    pub fn encrypt(&self, plaintext: &str) -> Result<Outcome> {
        let message = self.encoder().encrypt(plaintext)?;
        let hash = self.hash(plaintext)?;
        debug!(hash, "encrypted plaintext");
        Ok(Outcome::Encrypted { message, hash })
    }

    /// Decrypt a ciphertext and check it against the expected hash
    ///
    /// The hash is recomputed over the decrypted text, which is what
    /// [`Session::encrypt`] hashes.
    ///
    /// # Errors
    /// Returns an error for a zero hash size, or for malformed ciphertext in
    /// strict mode.
    pub fn decrypt(&self, ciphertext: &str, expected_hash: &str) -> Result<Outcome> {
        let expected = match parse_hash(expected_hash) {
            Ok(expected) => expected,
            Err(CipherError::InvalidHash(text)) => return Ok(Outcome::InvalidHash(text)),
            Err(e) => return Err(e),
        };

        let message = self.decoder().decrypt(ciphertext)?;
        let actual = self.hash(&message)?;

        if actual == expected {
            debug!(hash = actual, "hash verified");
            Ok(Outcome::Decrypted { message })
        } else {
            info!(expected, actual, "hash mismatch");
            Ok(Outcome::Mismatch { expected, actual })
        }
    }

    /// Run one interactive exchange
    ///
    /// Prompts are written to `output` and answers read line by line from
    /// `input`. The outcome message is written as the last line.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, mut output: W) -> Result<Outcome> {
        let answer = prompt(&mut input, &mut output, ACTION_PROMPT)?;

        let outcome = match answer.parse::<Action>() {
            Ok(Action::Encrypt) => {
                debug!("session action: encrypt");
                let plaintext = prompt(&mut input, &mut output, PLAINTEXT_PROMPT)?;
                self.encrypt(&plaintext)?
            }
            Ok(Action::Decrypt) => {
                debug!("session action: decrypt");
                let ciphertext = prompt(&mut input, &mut output, CIPHERTEXT_PROMPT)?;
                let expected = prompt(&mut input, &mut output, HASH_PROMPT)?;
                self.decrypt(&ciphertext, &expected)?
            }
            Err(CipherError::InvalidAction(action)) => Outcome::InvalidAction(action),
            Err(e) => return Err(e),
        };

        writeln!(output, "{}", outcome)?;
        output.flush()?;
        Ok(outcome)
    }
}

/// Write a prompt and read one answer line, without its line ending
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, text: &str) -> Result<String> {
    write!(output, "{} ", text)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(CipherError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!("input closed before answering {:?}", text),
        )));
    }

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_action() {
        assert_eq!("encrypt".parse::<Action>().unwrap(), Action::Encrypt);
        assert_eq!(" decrypt\n".parse::<Action>().unwrap(), Action::Decrypt);
        assert!(matches!(
            "Encrypt".parse::<Action>(),
            Err(CipherError::InvalidAction(_))
        ));
    }

    #[test]
    fn test_parse_hash() {
        assert_eq!(parse_hash(" 42 ").unwrap(), 42);
        assert!(matches!(parse_hash("abc"), Err(CipherError::InvalidHash(_))));
        assert!(matches!(parse_hash("-1"), Err(CipherError::InvalidHash(_))));
    }

    #[test]
    fn test_prompt_strips_line_endings() {
        let mut input = &b"hello there \r\nnext\n"[..];
        let mut output = Vec::new();

        assert_eq!(prompt(&mut input, &mut output, "Q?").unwrap(), "hello there ");
        assert_eq!(prompt(&mut input, &mut output, "Q?").unwrap(), "next");
        assert_eq!(output, b"Q? Q? ");
    }

    #[test]
    fn test_prompt_eof() {
        let mut input = &b""[..];
        let mut output = Vec::new();

        match prompt(&mut input, &mut output, "Q?").unwrap_err() {
            CipherError::Io(err) => assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof),
            other => panic!("Expected Io, got {:?}", other),
        }
    }

    #[test]
    fn test_encrypt_then_decrypt() {
        let session = Session::default();

        let (message, hash) = match session.encrypt("Meet me at noon!").unwrap() {
            Outcome::Encrypted { message, hash } => (message, hash),
            other => panic!("Expected Encrypted, got {:?}", other),
        };

        let outcome = session.decrypt(&message, &hash.to_string()).unwrap();
        assert_eq!(
            outcome,
            Outcome::Decrypted {
                message: "Meet me at noon!".to_string()
            }
        );
    }

    #[test]
    fn test_decrypt_mismatch() {
        let session = Session::default();
        let outcome = session.decrypt("abc", "0").unwrap();

        assert!(matches!(outcome, Outcome::Mismatch { expected: 0, .. }));
        assert!(!outcome.is_success());
        assert_eq!(outcome.to_string(), "error: hashes don't match");
    }

    #[test]
    fn test_outcome_check() {
        let mismatch = Outcome::Mismatch {
            expected: 1,
            actual: 2,
        };
        assert!(matches!(
            mismatch.check(),
            Err(CipherError::HashMismatch {
                expected: 1,
                actual: 2
            })
        ));

        let decrypted = Outcome::Decrypted {
            message: "ok".to_string(),
        };
        assert_eq!(decrypted.clone().check().unwrap(), decrypted);
    }

    #[test]
    fn test_zero_hash_size_is_an_error() {
        let session = Session::new(SessionConfig {
            hash_size: 0,
            ..SessionConfig::default()
        });

        assert!(matches!(
            session.encrypt("abc"),
            Err(CipherError::InvalidModulus)
        ));
    }
}
