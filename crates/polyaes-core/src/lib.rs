//! AES-128 single-block encryption built on explicit GF(2) polynomial
//! arithmetic.
//!
//! The cipher follows FIPS-197: an eleven-entry key schedule and ten rounds
//! of SubBytes, ShiftRows, MixColumns, and AddRoundKey over a word-packed
//! 4x4-byte state. The MixColumns diffusion step performs its byte
//! multiplications through the `gf2poly` engine rather than a precomputed
//! table, trading speed for arithmetic that mirrors the field definition.
//!
//! The implementation aims for clarity and testability rather than
//! constant-time guarantees; it should not be treated as side-channel
//! hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod cipher;
mod error;
mod key;
mod round;
mod sbox;
mod schedule;
mod state;

pub use crate::cipher::{Aes128, BLOCK_BYTES};
pub use crate::error::CipherError;
pub use crate::key::Key;
pub use crate::schedule::{KeySchedule, ROUNDS};
pub use crate::state::{Block, ByteOrder};
