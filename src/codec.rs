//! Codec construction and size arithmetic

use crate::alphabet::{Alphabet, Preset};
use crate::error::Result;

/// Bytes in a full chunk
pub const BYTES_PER_CHUNK: usize = 4;
/// Characters in a full digit group
pub const CHARS_PER_GROUP: usize = 5;

/// Converts bytes to text over a fixed alphabet and back.
///
/// A codec is immutable once built and can be shared freely between
/// threads. Encoding is total; decoding validates its input and either
/// returns every byte or an error.
///
/// ```
/// use base8x::Codec;
///
/// let codec = Codec::z85();
/// let text = codec.encode([0x86, 0x4f, 0xd2, 0x6f, 0xb5, 0x59, 0xf7, 0x5b]);
/// assert_eq!(text, "HelloWorld");
/// assert_eq!(codec.decode(&text).unwrap(), [0x86, 0x4f, 0xd2, 0x6f, 0xb5, 0x59, 0xf7, 0x5b]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Codec {
    pub(crate) alphabet: Alphabet,
}

impl Codec {
    /// Create a codec from a custom alphabet string
    pub fn new(alphabet: &str) -> Result<Self> {
        Ok(Self::with_alphabet(Alphabet::new(alphabet)?))
    }

    /// Create a codec from an already validated alphabet
    pub fn with_alphabet(alphabet: Alphabet) -> Self {
        tracing::debug!(radix = alphabet.radix(), "codec constructed");
        Self { alphabet }
    }

    pub fn z85() -> Self {
        Self::from(Preset::Z85)
    }

    pub fn ascii85() -> Self {
        Self::from(Preset::Ascii85)
    }

    pub fn wp92() -> Self {
        Self::from(Preset::Wp92)
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn radix(&self) -> usize {
        self.alphabet.radix()
    }

    /// Length of the text produced by encoding `len` bytes
    pub fn encoded_len(len: usize) -> usize {
        let tail = len % BYTES_PER_CHUNK;
        (len / BYTES_PER_CHUNK) * CHARS_PER_GROUP + if tail == 0 { 0 } else { tail + 1 }
    }

    /// Number of bytes decoded from `len` characters, or `None` when no
    /// encoding has that length
    pub fn decoded_len(len: usize) -> Option<usize> {
        match len % CHARS_PER_GROUP {
            1 => None,
            tail => Some((len / CHARS_PER_GROUP) * BYTES_PER_CHUNK + tail.saturating_sub(1)),
        }
    }
}

impl From<Preset> for Codec {
    fn from(preset: Preset) -> Self {
        Self::with_alphabet(preset.alphabet())
    }
}

impl From<Alphabet> for Codec {
    fn from(alphabet: Alphabet) -> Self {
        Self::with_alphabet(alphabet)
    }
}

impl Default for Codec {
    fn default() -> Self {
        Self::z85()
    }
}
