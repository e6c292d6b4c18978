//! Command-line driver for `polyaes`.

#![forbid(unsafe_code)]

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use polyaes_core::{Aes128, ByteOrder, Key};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// SP 800-38A ECB-AES128 key shared by all four vectors.
const VECTOR_KEY: &str = "2b7e151628aed2a6abf7158809cf4f3c";

/// SP 800-38A ECB-AES128 plaintext/ciphertext pairs.
const VECTORS: [(&str, &str); 4] = [
    (
        "6bc1bee22e409f96e93d7e117393172a",
        "3ad77bb40d7a3660a89ecaf32466ef97",
    ),
    (
        "ae2d8a571e03ac9c9eb76fac45af8e51",
        "f5d3d58503b9699de785895a96fdbaaf",
    ),
    (
        "30c81c46a35ce411e5fbc1191a0a52ef",
        "43b1cd7f598ece23881b00e3ed030688",
    ),
    (
        "f69f2445df4f9b17ad2b417be66c3710",
        "7b0c785e27e8ad3f8223207104725dd4",
    ),
];

/// AES-128 single-block encryption driver.
#[derive(Parser)]
#[command(
    name = "polyaes",
    version,
    author,
    about = "AES-128 single-block encryption built on a GF(2) polynomial engine"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a single 16-byte block.
    Encrypt {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Plaintext block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
        /// Pack bytes into words least-significant first.
        #[arg(long, default_value_t = false)]
        little_endian: bool,
    },
    /// Run the SP 800-38A ECB-AES128 known-answer vectors.
    Vectors,
    /// Encrypt a random block under a random key.
    Demo {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Encrypt {
            key_hex,
            block_hex,
            little_endian,
        } => cmd_encrypt(&key_hex, &block_hex, little_endian),
        Commands::Vectors => cmd_vectors(),
        Commands::Demo { seed } => cmd_demo(seed),
    }
}

fn cmd_encrypt(key_hex: &str, block_hex: &str, little_endian: bool) -> Result<()> {
    let key = parse_key_hex(key_hex)?;
    let block = parse_block_hex(block_hex)?;
    let order = if little_endian {
        ByteOrder::Little
    } else {
        ByteOrder::Big
    };
    let cipher = Aes128::with_byte_order(&key, order).context("construct cipher")?;
    let ciphertext = cipher.encrypt(&block).context("encrypt block")?;
    println!("{}", hex::encode(ciphertext));
    Ok(())
}

fn cmd_vectors() -> Result<()> {
    let key = parse_key_hex(VECTOR_KEY)?;
    let cipher = Aes128::new(&key).context("construct cipher")?;

    let mut failures = 0;
    for (plain_hex, expected_hex) in VECTORS {
        let block = parse_block_hex(plain_hex)?;
        let ciphertext = cipher.encrypt(&block).context("encrypt vector")?;
        let ciphertext_hex = hex::encode(ciphertext);
        println!("KEY        : {VECTOR_KEY}");
        println!("PLAIN TEXT : {plain_hex}");
        println!("CIPHER TEXT: {ciphertext_hex}");
        println!();
        if ciphertext_hex != expected_hex {
            failures += 1;
        }
    }
    if failures > 0 {
        bail!("{failures} vector(s) did not match the expected ciphertext");
    }
    Ok(())
}

fn cmd_demo(seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let mut key_bytes = [0u8; 16];
    rng.fill_bytes(&mut key_bytes);
    let mut block = [0u8; 16];
    rng.fill_bytes(&mut block);

    let cipher = Aes128::new(&Key::from(key_bytes)).context("construct cipher")?;
    let ciphertext = cipher.encrypt(&block).context("encrypt block")?;
    println!("KEY        : {}", hex::encode(key_bytes));
    println!("PLAIN TEXT : {}", hex::encode(block));
    println!("CIPHER TEXT: {}", hex::encode(ciphertext));
    Ok(())
}

fn parse_key_hex(key_hex: &str) -> Result<Key> {
    let bytes = hex::decode(key_hex).context("key must be valid hex")?;
    if bytes.len() != 16 {
        bail!("key must be 32 hex characters (16 bytes)");
    }
    Ok(Key::new(bytes))
}

fn parse_block_hex(block_hex: &str) -> Result<[u8; 16]> {
    let bytes = hex::decode(block_hex).context("block must be valid hex")?;
    match bytes.as_slice().try_into() {
        Ok(block) => Ok(block),
        Err(_) => bail!("block must be 32 hex characters (16 bytes)"),
    }
}

fn seeded_rng(seed: Option<u64>) -> ChaCha20Rng {
    match seed {
        Some(seed) => ChaCha20Rng::seed_from_u64(seed),
        None => ChaCha20Rng::from_entropy(),
    }
}
