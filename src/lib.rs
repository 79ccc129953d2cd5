//! Reversible rotation cipher over the printable band `[32, 125]`.
//!
//! Every character code is rotated modulo 94 inside the band. Rotated values
//! below `'0'` (48) are followed by a `~` marker, which the decoder strips
//! before rotating back. A separate positional-exponential hash lets a
//! receiver check that a message decrypted to what the sender hashed.
//!
//! ```
//! use rotcipher::{decrypt, encrypt, hash_text};
//!
//! let cipher = encrypt("text!here", -1);
//! assert_eq!(cipher, "sdws ~gdqd");
//! assert_eq!(decrypt(&cipher, -1), "text!here");
//! assert_eq!(hash_text("ABC", 11, 100).unwrap(), 52);
//! ```
//!
//! Characters outside the band are a precondition violation. The free
//! functions still map them deterministically (without a round trip
//! guarantee); [`Encoder::strict`] and [`Decoder::strict`] reject them.

mod consts;
mod decode;
mod encode;
mod error;
mod hash;
mod rotate;
pub mod session;

pub use consts::{
    BAND_HIGH, BAND_LOW, BAND_SIZE, DEFAULT_HASH_BASE, DEFAULT_HASH_SIZE, DEFAULT_ROTATION,
    ESCAPE_CHAR,
};
pub use decode::{Decoder, decrypt};
pub use encode::{Encoder, encrypt};
pub use error::{CipherError, Result};
pub use hash::{TextHasher, hash_text};
pub use rotate::{in_band, rotate, rotate_code};
pub use session::{Action, Outcome, Session, SessionConfig};
