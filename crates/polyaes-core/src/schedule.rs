//! AES-128 key schedule.

use crate::error::CipherError;
use crate::key::Key;
use crate::sbox::sub_word;
use crate::state::{pack_words, ByteOrder};

/// Number of transformation rounds for a 128-bit key.
pub const ROUNDS: usize = 10;

/// Words per schedule: eleven round keys of four words each.
const SCHEDULE_WORDS: usize = (ROUNDS + 1) * 4;

/// Round constants XORed into the first word of each expansion batch.
const RCON: [u32; ROUNDS] = [
    0x0100_0000, 0x0200_0000, 0x0400_0000, 0x0800_0000, 0x1000_0000,
    0x2000_0000, 0x4000_0000, 0x8000_0000, 0x1b00_0000, 0x3600_0000,
];

/// Expanded round keys for one 128-bit key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeySchedule {
    words: [u32; SCHEDULE_WORDS],
}

impl KeySchedule {
    /// Expands `key` into 44 words under the given packing order.
    ///
    /// Fails if the key is not exactly 128 bits. The round constants are
    /// applied to the packed word as-is, so the schedule for the two byte
    /// orders differs; `Big` is the one matching FIPS-197.
    pub fn derive(key: &Key, order: ByteOrder) -> Result<Self, CipherError> {
        let bits = key.bit_len();
        if bits != 128 {
            return Err(CipherError::InvalidKeyLength { bits });
        }
        let mut key_block = [0u8; 16];
        key_block.copy_from_slice(key.as_bytes());

        let mut words = [0u32; SCHEDULE_WORDS];
        words[..4].copy_from_slice(&pack_words(&key_block, order));
        for i in 4..SCHEDULE_WORDS {
            let mut temp = words[i - 1];
            if i % 4 == 0 {
                temp = sub_word(temp.rotate_left(8)) ^ RCON[i / 4 - 1];
            }
            words[i] = words[i - 4] ^ temp;
        }

        Ok(Self { words })
    }

    /// Returns the four words of the round key for `round` (0..=10).
    #[inline]
    pub fn round_key(&self, round: usize) -> &[u32] {
        &self.words[round * 4..round * 4 + 4]
    }

    /// All 44 schedule words in derivation order.
    pub fn words(&self) -> &[u32] {
        &self.words
    }
}
