//! base8x CLI
//!
//! Encode and decode data with base-85 to base-95 alphabets.

use anyhow::{Context, Result};
use base8x::{Alphabet, Codec, Preset};
use clap::{Parser, Subcommand};
use rand::RngCore;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

const DEFAULT_KEY_BITS: usize = 320;

#[derive(Parser, Debug)]
#[command(name = "base8x")]
#[command(version)]
#[command(about = "Base-85 to base-95 binary/ASCII codec")]
struct Cli {
    /// Preset alphabet: z85, ascii85 or wp92
    #[arg(short, long, global = true, env = "BASE8X_ALPHABET", default_value = "z85")]
    alphabet: Preset,

    /// Custom alphabet of 85 to 95 distinct printable characters
    /// (overrides --alphabet)
    #[arg(long, global = true)]
    custom_alphabet: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encode binary data to text
    Encode {
        /// Input file (default: stdin)
        #[arg(short = 'i', long)]
        input: Option<PathBuf>,

        /// Output file (default: stdout)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,

        /// Wrap encoded lines after COLS characters (0 disables wrapping)
        #[arg(short = 'w', long, value_name = "COLS", default_value_t = 0)]
        wrap: usize,
    },

    /// Decode text back to binary data
    Decode {
        /// Input file (default: stdin)
        #[arg(short = 'i', long)]
        input: Option<PathBuf>,

        /// Output file (default: stdout)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },

    /// Print random keys encoded with the alphabet
    Random {
        /// Bits of randomness per key, rounded up to whole bytes
        #[arg(short, long, default_value_t = DEFAULT_KEY_BITS)]
        bits: usize,

        /// Number of keys to print
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
    },

    /// List the preset alphabets
    Alphabets,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let codec = build_codec(cli.alphabet, cli.custom_alphabet.as_deref())?;

    match cli.command {
        Commands::Encode { input, output, wrap } => {
            encode(&codec, input, output, wrap)?;
        }
        Commands::Decode { input, output } => {
            decode(&codec, input, output)?;
        }
        Commands::Random { bits, count } => {
            random(&codec, bits, count)?;
        }
        Commands::Alphabets => {
            list_alphabets();
        }
    }

    Ok(())
}

fn setup_logging(verbose: bool) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;
    use tracing_subscriber::EnvFilter;

    let directives = if verbose { "base8x=debug" } else { "warn" };
    let main_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(io::stderr);

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives)))
        .with(main_layer)
        .init()
}

fn build_codec(preset: Preset, custom: Option<&str>) -> Result<Codec> {
    match custom {
        Some(symbols) => {
            let alphabet = Alphabet::new(symbols).context("Invalid custom alphabet")?;
            Ok(Codec::with_alphabet(alphabet))
        }
        None => {
            tracing::debug!(%preset, "using preset alphabet");
            Ok(Codec::from(preset))
        }
    }
}

fn read_input(input: Option<&PathBuf>) -> Result<Vec<u8>> {
    match input {
        Some(path) => fs::read(path).with_context(|| format!("Failed to read: {}", path.display())),
        None => {
            let mut buffer = Vec::new();
            io::stdin()
                .read_to_end(&mut buffer)
                .context("Failed to read stdin")?;
            Ok(buffer)
        }
    }
}

fn write_output(output: Option<&PathBuf>, data: &[u8]) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, data).with_context(|| format!("Failed to write: {}", path.display()))
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(data).context("Failed to write stdout")?;
            stdout.flush()?;
            Ok(())
        }
    }
}

fn encode(codec: &Codec, input: Option<PathBuf>, output: Option<PathBuf>, wrap: usize) -> Result<()> {
    let data = read_input(input.as_ref())?;
    let encoded = codec.encode(&data);
    tracing::debug!(bytes = data.len(), chars = encoded.len(), "encoded input");

    write_output(output.as_ref(), wrap_lines(&encoded, wrap).as_bytes())
}

fn decode(codec: &Codec, input: Option<PathBuf>, output: Option<PathBuf>) -> Result<()> {
    let raw = read_input(input.as_ref())?;
    let text = String::from_utf8(raw).context("Encoded input is not valid UTF-8")?;
    let text = strip_line_breaks(&text);

    let decoded = codec.decode(&text).context("Failed to decode input")?;
    tracing::debug!(chars = text.len(), bytes = decoded.len(), "decoded input");

    write_output(output.as_ref(), &decoded)
}

fn random(codec: &Codec, bits: usize, count: usize) -> Result<()> {
    anyhow::ensure!(bits > 0, "Key size must be at least one bit");
    let mut key = vec![0u8; bits.div_ceil(8)];
    let mut rng = rand::thread_rng();

    let mut stdout = io::stdout().lock();
    for _ in 0..count {
        rng.fill_bytes(&mut key);
        writeln!(stdout, "{}", codec.encode(&key))?;
    }
    Ok(())
}

fn list_alphabets() {
    for preset in Preset::ALL {
        let alphabet = preset.alphabet();
        println!("{:<8} {:>3}  {}", preset.name(), alphabet.radix(), alphabet);
    }
}

/// Break `encoded` into lines of `cols` characters, ending with a newline
fn wrap_lines(encoded: &str, cols: usize) -> String {
    if cols == 0 || encoded.is_empty() {
        return format!("{}\n", encoded);
    }

    // Encoded text is pure ASCII, so byte chunks are character chunks
    let mut wrapped = String::with_capacity(encoded.len() + encoded.len() / cols + 1);
    for line in encoded.as_bytes().chunks(cols) {
        wrapped.extend(line.iter().map(|&b| b as char));
        wrapped.push('\n');
    }
    wrapped
}

/// Remove the line breaks that `wrap_lines` and editors insert
fn strip_line_breaks(text: &str) -> String {
    text.chars().filter(|&c| c != '\n' && c != '\r').collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_lines() {
        assert_eq!(wrap_lines("HelloWorld", 0), "HelloWorld\n");
        assert_eq!(wrap_lines("HelloWorld", 4), "Hell\noWor\nld\n");
        assert_eq!(wrap_lines("HelloWorld", 5), "Hello\nWorld\n");
        assert_eq!(wrap_lines("", 5), "\n");
    }

    #[test]
    fn test_wrapped_output_decodes() {
        let codec = Codec::z85();
        let text = strip_line_breaks(&wrap_lines("HelloWorld", 3).replace('\n', "\r\n"));
        assert_eq!(text, "HelloWorld");
        assert_eq!(codec.decode(&text).unwrap().len(), 8);
    }

    #[test]
    fn test_build_codec_custom_overrides_preset() {
        let symbols: String = (0x21u8..=0x7e).map(char::from).collect();
        let codec = build_codec(Preset::Z85, Some(&symbols)).unwrap();
        assert_eq!(codec.radix(), 94);

        assert!(build_codec(Preset::Z85, Some("abc")).is_err());
        assert_eq!(build_codec(Preset::Wp92, None).unwrap(), Codec::wp92());
    }

    #[test]
    fn test_cli_parses() {
        let cli = Cli::try_parse_from(["base8x", "-a", "wp92", "random", "--bits", "256"]).unwrap();
        assert_eq!(cli.alphabet, Preset::Wp92);
        assert!(matches!(cli.command, Commands::Random { bits: 256, count: 1 }));

        assert!(Cli::try_parse_from(["base8x", "-a", "base64", "alphabets"]).is_err());
    }
}
