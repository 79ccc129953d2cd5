//! Common constants for the rotation cipher and text hash

/// Lowest character code of the rotation band (space)
pub const BAND_LOW: u32 = 32;

/// Highest character code of the rotation band (`}`)
pub const BAND_HIGH: u32 = 125;

/// Number of codes in the band
pub const BAND_SIZE: i64 = 94;

/// Marker emitted after every rotated value below [`ESCAPE_THRESHOLD`]
pub const ESCAPE_CHAR: char = '~';

/// Rotated values strictly below this code get an escape marker
pub(crate) const ESCAPE_THRESHOLD: u32 = 48;

/// Rotation amount used by the console session
pub const DEFAULT_ROTATION: i64 = 23;

/// Hash base used by the console session
pub const DEFAULT_HASH_BASE: i64 = 31;

/// Hash modulus used by the console session
pub const DEFAULT_HASH_SIZE: u64 = 1_000_000_000;
