//! Text to byte decoding

use crate::codec::{Codec, CHARS_PER_GROUP};
use crate::error::{Error, Result};
use std::io::Read;
use std::path::Path;

impl Codec {
    /// Decode `text` back into bytes.
    ///
    /// All characters are checked against the alphabet first, then the
    /// length, then each group's value. Nothing is returned on failure.
    pub fn decode(&self, text: &str) -> Result<Vec<u8>> {
        self.decode_groups(text).map_err(|err| {
            tracing::debug!(%err, len = text.len(), "rejected encoded input");
            err
        })
    }

    fn decode_groups(&self, text: &str) -> Result<Vec<u8>> {
        let digits = text
            .char_indices()
            .map(|(index, ch)| {
                self.alphabet
                    .digit(ch)
                    .ok_or(Error::InvalidCharacter { ch, index })
            })
            .collect::<Result<Vec<u8>>>()?;

        // Every character is ASCII past this point, so byte offsets and
        // digit positions coincide.
        let decoded_len = Self::decoded_len(digits.len())
            .ok_or(Error::InvalidLength { len: digits.len() })?;

        let mut output = Vec::with_capacity(decoded_len);
        for (i, group) in digits.chunks(CHARS_PER_GROUP).enumerate() {
            let index = i * CHARS_PER_GROUP;
            let value = self.group_value(group);
            let value = u32::try_from(value).map_err(|_| Error::ValueOverflow {
                group: text[index..index + group.len()].to_string(),
                value,
                index,
            })?;

            // A group of m characters carries m - 1 bytes
            output.extend_from_slice(&value.to_be_bytes()[..group.len() - 1]);
        }

        debug_assert_eq!(output.len(), decoded_len);
        Ok(output)
    }

    /// Base-N value of a group, padding a short group with the highest
    /// digit.
    ///
    /// Padding with the highest digit rounds the value up past every
    /// truncated digit the encoder dropped. The result stays below the
    /// next multiple of 256^(4 - k), so the kept high bytes are exact.
    fn group_value(&self, group: &[u8]) -> u64 {
        let radix = self.radix() as u64;
        let pad = radix - 1;

        (0..CHARS_PER_GROUP).fold(0u64, |acc, i| {
            let digit = group.get(i).map_or(pad, |&d| u64::from(d));
            acc * radix + digit
        })
    }

    /// Read all of `reader` and decode it
    pub fn decode_from_reader<R: Read>(&self, mut reader: R) -> Result<Vec<u8>> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        self.decode(&text)
    }

    /// Read and decode a file
    pub fn decode_file(&self, path: &Path) -> Result<Vec<u8>> {
        let text = std::fs::read_to_string(path)?;
        self.decode(&text)
    }
}
