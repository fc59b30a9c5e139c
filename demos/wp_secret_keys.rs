//! Generate the secret keys block of a WordPress `wp-config.php`
//!
//! Usage: `cargo run --example wp_secret_keys [BITS]` (default 320 bits per key)

use base8x::Codec;
use rand::RngCore;

const WP_VARS: [&str; 8] = [
    "AUTH_KEY",
    "SECURE_AUTH_KEY",
    "LOGGED_IN_KEY",
    "NONCE_KEY",
    "AUTH_SALT",
    "SECURE_AUTH_SALT",
    "LOGGED_IN_SALT",
    "NONCE_SALT",
];

fn main() -> anyhow::Result<()> {
    let bits: usize = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => 320,
    };
    anyhow::ensure!(bits > 0, "Key size must be at least one bit");

    // wp92 has no quote or backslash, so keys drop straight into
    // single-quoted PHP strings.
    let codec = Codec::wp92();
    let mut rng = rand::thread_rng();
    let mut key = vec![0u8; bits.div_ceil(8)];

    // Two quotes, a comma and a space
    let width = WP_VARS.iter().map(|name| name.len()).max().unwrap_or(0) + 4;

    for name in WP_VARS {
        rng.fill_bytes(&mut key);
        let secret = codec.encode(&key);
        debug_assert_eq!(codec.decode(&secret)?, key);

        let quoted = format!("'{}',", name);
        println!("define({:<width$}'{}');", quoted, secret, width = width);
    }

    Ok(())
}
