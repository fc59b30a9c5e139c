//! # base8x
//!
//! Binary to printable-ASCII encoding over any alphabet of 85 to 95
//! characters.
//!
//! This crate generalizes ASCII85: every 4 bytes of input become 5
//! characters drawn from a caller-supplied alphabet, so the alphabet can
//! leave out whatever characters are unsafe in the destination (quotes
//! inside a string literal, for instance).
//!
//! ## Format
//!
//! Input is split into 4-byte chunks, each read as a big-endian `u32` and
//! written as 5 base-N digits, most significant first. Since `85^5 > 2^32`,
//! 5 digits always suffice.
//!
//! A trailing chunk of `k` bytes is padded with zero bytes and only its
//! first `k + 1` characters are kept:
//!
//! | bytes | characters |
//! |-------|------------|
//! | 1     | 2          |
//! | 2     | 3          |
//! | 3     | 4          |
//! | 4     | 5          |
//!
//! There are no separators and no padding characters. A text whose length
//! is `1 mod 5` is never produced and never accepted.
//!
//! ## Alphabets
//!
//! Three presets are built in (see [`Preset`]):
//! - **z85**: ZeroMQ's Z85
//! - **ascii85**: Adobe's `!` through `u`, without the `z` shorthand
//! - **wp92**: 92 characters with no quotes or backslash
//!
//! ```
//! use base8x::{Codec, Preset};
//!
//! let codec = Codec::from(Preset::Wp92);
//! let text = codec.encode(b"secret key material");
//! assert!(!text.contains('\''));
//! assert_eq!(codec.decode(&text).unwrap(), b"secret key material");
//! ```

pub mod alphabet;
pub mod codec;
mod decoder;
mod encoder;
pub mod error;

pub use alphabet::{
    Alphabet, Preset, UnknownPreset,
    ASCII85_ALPHABET, WP92_ALPHABET, Z85_ALPHABET,
    MAX_RADIX, MIN_RADIX,
};
pub use codec::Codec;
pub use error::{AlphabetError, Error, Result};
