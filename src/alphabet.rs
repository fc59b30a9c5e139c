//! Alphabet data structures

use crate::error::{AlphabetError, Result};
use std::fmt;
use std::str::FromStr;

// Radix bounds: 85^5 > 2^32 keeps every 32-bit value within 5 digits,
// and 95 is the number of printable ASCII characters.
pub const MIN_RADIX: usize = 85;
pub const MAX_RADIX: usize = 95;

const PRINTABLE_FIRST: u8 = 0x20;
const PRINTABLE_LAST: u8 = 0x7e;

/// Reverse table entry for characters outside the alphabet
const ABSENT: u8 = u8::MAX;

/// ZeroMQ Z85 alphabet
pub const Z85_ALPHABET: &str = "0123456789abcdefghijklmnopqrstuvwxyz\
                                ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                                .-:+=^!/*?&<>()[]{}@%$#";

/// Adobe/btoa ASCII85 alphabet, code points 33 through 117
pub const ASCII85_ALPHABET: &str = "!\"#$%&'()*+,-./0123456789:;<=>?@\
                                    ABCDEFGHIJKLMNOPQRSTUVWXYZ[\\]^_`\
                                    abcdefghijklmnopqrstu";

/// 92-character alphabet free of `'`, `"` and `\`, for single- or
/// double-quoted string literals
pub const WP92_ALPHABET: &str = "0123456789abcdefghijklmnopqrstuvwxyz\
                                 ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                                 `,~| _;.-:+=^!/*?&<>()[]{}@%$#";

/// An ordered set of 85 to 95 distinct printable ASCII characters.
///
/// The position of a character is its digit value. Lookups in both
/// directions are direct array indexing.
#[derive(Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: String,
    lookup: [u8; 128],
}

impl Alphabet {
    /// Validate `symbols` and build the alphabet.
    ///
    /// Characters are checked left to right for printability and
    /// uniqueness before the overall length is checked.
    pub fn new(symbols: &str) -> Result<Self> {
        Self::validate(symbols)?;
        Ok(Self::build(symbols))
    }

    fn validate(symbols: &str) -> Result<(), AlphabetError> {
        let mut seen = [false; 128];
        let mut count = 0;

        for (index, ch) in symbols.chars().enumerate() {
            if !is_printable(ch) {
                return Err(AlphabetError::Unprintable { ch, index });
            }
            let slot = &mut seen[ch as usize];
            if *slot {
                return Err(AlphabetError::Duplicate { ch, index });
            }
            *slot = true;
            count += 1;
        }

        if !(MIN_RADIX..=MAX_RADIX).contains(&count) {
            return Err(AlphabetError::Length { len: count });
        }
        Ok(())
    }

    /// Build the reverse table for an already validated alphabet
    fn build(symbols: &str) -> Self {
        let mut lookup = [ABSENT; 128];
        for (digit, &byte) in symbols.as_bytes().iter().enumerate() {
            lookup[byte as usize] = digit as u8;
        }
        Self {
            symbols: symbols.to_string(),
            lookup,
        }
    }

    /// Number of characters, which is also the numeral base
    pub fn radix(&self) -> usize {
        self.symbols.len()
    }

    pub fn as_str(&self) -> &str {
        &self.symbols
    }

    /// Digit value of `ch`, if it belongs to the alphabet
    pub fn digit(&self, ch: char) -> Option<u8> {
        if !ch.is_ascii() {
            return None;
        }
        match self.lookup[ch as usize] {
            ABSENT => None,
            digit => Some(digit),
        }
    }

    /// Character for `digit`.
    ///
    /// # Panics
    ///
    /// Panics if `digit` is not less than [`radix`](Self::radix).
    pub fn char_at(&self, digit: u8) -> char {
        self.symbols.as_bytes()[digit as usize] as char
    }

    /// Character for digit value zero
    pub fn zero(&self) -> char {
        self.char_at(0)
    }

    /// Character for the highest digit value
    pub fn max(&self) -> char {
        self.char_at((self.radix() - 1) as u8)
    }

    pub fn contains(&self, ch: char) -> bool {
        self.digit(ch).is_some()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbols)
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Alphabet")
            .field("radix", &self.radix())
            .field("symbols", &self.symbols)
            .finish()
    }
}

impl FromStr for Alphabet {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

fn is_printable(ch: char) -> bool {
    ch.is_ascii() && (PRINTABLE_FIRST..=PRINTABLE_LAST).contains(&(ch as u8))
}

/// Built-in alphabets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    /// ZeroMQ Z85 (radix 85)
    Z85,
    /// Adobe ASCII85 without the `z` shorthand (radix 85)
    Ascii85,
    /// Quote-safe alphabet for config-file secrets (radix 92)
    Wp92,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::Z85, Preset::Ascii85, Preset::Wp92];

    pub fn name(self) -> &'static str {
        match self {
            Preset::Z85 => "z85",
            Preset::Ascii85 => "ascii85",
            Preset::Wp92 => "wp92",
        }
    }

    pub fn symbols(self) -> &'static str {
        match self {
            Preset::Z85 => Z85_ALPHABET,
            Preset::Ascii85 => ASCII85_ALPHABET,
            Preset::Wp92 => WP92_ALPHABET,
        }
    }

    pub fn alphabet(self) -> Alphabet {
        Alphabet::build(self.symbols())
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown preset name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown alphabet preset '{0}' (expected z85, ascii85 or wp92)")]
pub struct UnknownPreset(pub String);

impl FromStr for Preset {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "z85" => Ok(Preset::Z85),
            "ascii85" | "adobe85" => Ok(Preset::Ascii85),
            "wp92" => Ok(Preset::Wp92),
            _ => Err(UnknownPreset(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn printable_run(start: u8, len: usize) -> String {
        (start..).take(len).map(char::from).collect()
    }

    #[test]
    fn test_presets_are_valid() {
        for preset in Preset::ALL {
            let alphabet = Alphabet::new(preset.symbols()).unwrap();
            assert_eq!(alphabet, preset.alphabet());
        }
        assert_eq!(Preset::Z85.alphabet().radix(), 85);
        assert_eq!(Preset::Ascii85.alphabet().radix(), 85);
        assert_eq!(Preset::Wp92.alphabet().radix(), 92);
    }

    #[test]
    fn test_length_bounds() {
        assert!(Alphabet::new(&printable_run(0x20, 85)).is_ok());
        assert!(Alphabet::new(&printable_run(0x20, 95)).is_ok());

        let err = Alphabet::new(&printable_run(0x20, 84)).unwrap_err();
        assert!(matches!(
            err,
            crate::Error::InvalidAlphabet(AlphabetError::Length { len: 84 })
        ));

        // 96 printable characters cannot exist, so the 96th is a duplicate
        let mut long = printable_run(0x20, 95);
        long.push('!');
        let err = Alphabet::new(&long).unwrap_err();
        assert!(matches!(
            err,
            crate::Error::InvalidAlphabet(AlphabetError::Duplicate { ch: '!', index: 95 })
        ));
    }

    #[test]
    fn test_rejects_duplicate() {
        let mut symbols = printable_run(0x21, 85);
        symbols.replace_range(10..11, "!");
        let err = Alphabet::new(&symbols).unwrap_err();
        assert!(matches!(
            err,
            crate::Error::InvalidAlphabet(AlphabetError::Duplicate { ch: '!', index: 10 })
        ));
    }

    #[test]
    fn test_rejects_unprintable() {
        let mut symbols = printable_run(0x21, 85);
        symbols.push('\n');
        assert!(matches!(
            Alphabet::new(&symbols).unwrap_err(),
            crate::Error::InvalidAlphabet(AlphabetError::Unprintable { ch: '\n', index: 85 })
        ));

        let mut symbols = printable_run(0x21, 85);
        symbols.insert(0, 'é');
        assert!(matches!(
            Alphabet::new(&symbols).unwrap_err(),
            crate::Error::InvalidAlphabet(AlphabetError::Unprintable { ch: 'é', index: 0 })
        ));

        let mut symbols = printable_run(0x21, 85);
        symbols.push('\x7f');
        assert!(Alphabet::new(&symbols).is_err());
    }

    #[test]
    fn test_lookup_both_ways() {
        let alphabet = Preset::Z85.alphabet();
        assert_eq!(alphabet.zero(), '0');
        assert_eq!(alphabet.max(), '#');
        assert_eq!(alphabet.digit('a'), Some(10));
        assert_eq!(alphabet.char_at(10), 'a');
        assert_eq!(alphabet.digit('~'), None);
        assert_eq!(alphabet.digit('世'), None);
        assert!(!alphabet.contains(' '));

        for digit in 0..alphabet.radix() as u8 {
            assert_eq!(alphabet.digit(alphabet.char_at(digit)), Some(digit));
        }
    }

    #[test]
    fn test_wp92_is_quote_safe() {
        let alphabet = Preset::Wp92.alphabet();
        for ch in ['\'', '"', '\\'] {
            assert!(!alphabet.contains(ch));
        }
        assert!(alphabet.contains(' '));
    }

    #[test]
    fn test_preset_from_str() {
        assert_eq!("z85".parse::<Preset>(), Ok(Preset::Z85));
        assert_eq!("Adobe85".parse::<Preset>(), Ok(Preset::Ascii85));
        assert_eq!("WP92".parse::<Preset>(), Ok(Preset::Wp92));
        assert_eq!(
            "base64".parse::<Preset>(),
            Err(UnknownPreset("base64".to_string()))
        );
        for preset in Preset::ALL {
            assert_eq!(preset.to_string().parse::<Preset>(), Ok(preset));
        }
    }

    #[test]
    fn test_display_round_trip() {
        let alphabet = Preset::Ascii85.alphabet();
        assert_eq!(alphabet.to_string(), ASCII85_ALPHABET);
        assert_eq!(alphabet.to_string().parse::<Alphabet>().unwrap(), alphabet);
    }
}
