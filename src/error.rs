//! Error types

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Reason an alphabet was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlphabetError {
    /// Alphabet does not hold between 85 and 95 characters
    #[error("alphabet has {len} characters, expected between 85 and 95")]
    Length { len: usize },

    /// Character outside the printable ASCII range 0x20..=0x7e
    #[error("unprintable character {ch:?} at position {index}")]
    Unprintable { ch: char, index: usize },

    /// Character already seen earlier in the alphabet
    #[error("duplicate character {ch:?} at position {index}")]
    Duplicate { ch: char, index: usize },
}

/// Errors reported by alphabet construction, encoding and decoding
#[derive(Debug, Error)]
pub enum Error {
    /// Rejected at construction time, never by encode/decode
    #[error("invalid alphabet: {0}")]
    InvalidAlphabet(#[from] AlphabetError),

    /// Decode input contains a character that is not in the alphabet.
    /// `index` is a byte offset into the input.
    #[error("invalid character {ch:?} at offset {index}")]
    InvalidCharacter { ch: char, index: usize },

    /// Decode input length is congruent to 1 modulo 5
    #[error("invalid encoded length {len}: a trailing group of one character cannot be decoded")]
    InvalidLength { len: usize },

    /// A group decodes to a value with no 4-byte preimage
    #[error("group {group:?} at offset {index} decodes to {value:#x}, which exceeds 32 bits")]
    ValueOverflow { group: String, value: u64, index: usize },

    /// I/O failure in one of the reader/writer/file helpers
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
