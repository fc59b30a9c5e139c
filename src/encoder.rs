//! Byte to text encoding

use crate::codec::{Codec, BYTES_PER_CHUNK, CHARS_PER_GROUP};
use crate::error::Result;
use std::io::Write;
use std::path::Path;

impl Codec {
    /// Encode `data` to a string.
    ///
    /// Each 4-byte chunk becomes 5 characters. A trailing chunk of
    /// `k` bytes is zero-padded, encoded, and cut to `k + 1` characters.
    pub fn encode(&self, data: impl AsRef<[u8]>) -> String {
        let data = data.as_ref();
        let mut output = String::with_capacity(Self::encoded_len(data.len()));
        self.encode_into(data, &mut output);
        output
    }

    /// Encode `data`, appending to `output`
    pub fn encode_into(&self, data: impl AsRef<[u8]>, output: &mut String) {
        let data = data.as_ref();
        output.reserve(Self::encoded_len(data.len()));

        for chunk in data.chunks(BYTES_PER_CHUNK) {
            self.encode_chunk(chunk, output);
        }
    }

    /// Encode a single chunk of 1 to 4 bytes
    fn encode_chunk(&self, chunk: &[u8], output: &mut String) {
        let mut padded = [0u8; BYTES_PER_CHUNK];
        padded[..chunk.len()].copy_from_slice(chunk);

        let radix = self.radix() as u32;
        let mut value = u32::from_be_bytes(padded);
        let mut digits = [0u8; CHARS_PER_GROUP];
        for digit in digits.iter_mut().rev() {
            *digit = (value % radix) as u8;
            value /= radix;
        }

        // The dropped digits only carry the zero padding
        digits[..chunk.len() + 1]
            .iter()
            .for_each(|&d| output.push(self.alphabet.char_at(d)));
    }

    /// Encode `data` directly to a writer
    pub fn encode_to_writer<W: Write>(&self, data: impl AsRef<[u8]>, mut writer: W) -> Result<()> {
        let encoded = self.encode(data);
        writer.write_all(encoded.as_bytes())?;
        Ok(())
    }

    /// Encode `data` to a file
    pub fn encode_to_file(&self, data: impl AsRef<[u8]>, path: &Path) -> Result<()> {
        let encoded = self.encode(data);
        std::fs::write(path, encoded)?;
        Ok(())
    }
}
