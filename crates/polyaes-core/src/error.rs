//! Error types surfaced by the cipher.

use thiserror::Error;

/// Precondition failures reported by [`crate::Aes128`].
///
/// Both variants signal caller mistakes detected before any state is
/// touched; there are no partial-failure states.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum CipherError {
    /// The supplied key is not exactly 128 bits long.
    #[error("AES-128 expects a 128-bit key, got {bits} bits")]
    InvalidKeyLength {
        /// Bit length of the rejected key.
        bits: usize,
    },
    /// The block handed to `encrypt` is not exactly 16 bytes long.
    #[error("AES-128 encrypts 16-byte blocks, got {len} bytes")]
    InvalidBlockSize {
        /// Byte length of the rejected block.
        len: usize,
    },
}
