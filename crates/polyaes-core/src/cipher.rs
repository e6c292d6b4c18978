//! Cipher construction and the encryption round loop.

use crate::error::CipherError;
use crate::key::Key;
use crate::round::{add_round_key, mix_columns, shift_rows, sub_bytes};
use crate::schedule::{KeySchedule, ROUNDS};
use crate::state::{pack_words, unpack_words, Block, ByteOrder};

/// Block length in bytes.
pub const BLOCK_BYTES: usize = 16;

/// AES-128 single-block encryption cipher.
///
/// The key schedule is derived once at construction and reused by every
/// [`Aes128::encrypt`] call; encryption is a pure function of the key and
/// the block.
#[derive(Clone, Debug)]
pub struct Aes128 {
    schedule: KeySchedule,
    order: ByteOrder,
}

impl Aes128 {
    /// Builds a cipher with big-endian byte-to-word packing, the order that
    /// reproduces the FIPS-197 test vectors.
    pub fn new(key: &Key) -> Result<Self, CipherError> {
        Self::with_byte_order(key, ByteOrder::Big)
    }

    /// Builds a cipher with an explicit packing order.
    ///
    /// Fails with [`CipherError::InvalidKeyLength`] unless the key is
    /// exactly 128 bits.
    pub fn with_byte_order(key: &Key, order: ByteOrder) -> Result<Self, CipherError> {
        let schedule = KeySchedule::derive(key, order)?;
        Ok(Self { schedule, order })
    }

    /// Encrypts one 16-byte block.
    ///
    /// Fails with [`CipherError::InvalidBlockSize`] for any other length.
    pub fn encrypt(&self, block: &[u8]) -> Result<Block, CipherError> {
        if block.len() != BLOCK_BYTES {
            return Err(CipherError::InvalidBlockSize { len: block.len() });
        }
        let mut input = [0u8; BLOCK_BYTES];
        input.copy_from_slice(block);

        let mut state = pack_words(&input, self.order);
        add_round_key(&mut state, self.schedule.round_key(0));

        for round in 1..=ROUNDS {
            sub_bytes(&mut state);
            shift_rows(&mut state, self.order);
            // MixColumns is skipped on the final round.
            if round != ROUNDS {
                mix_columns(&mut state, self.order);
            }
            add_round_key(&mut state, self.schedule.round_key(round));
        }

        Ok(unpack_words(&state, self.order))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::RngCore;

    const NIST_KEY: [u8; 16] = [
        0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e,
        0x0f,
    ];
    const NIST_PLAIN: [u8; 16] = [
        0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee,
        0xff,
    ];
    const NIST_CIPHER: [u8; 16] = [
        0x69, 0xc4, 0xe0, 0xd8, 0x6a, 0x7b, 0x04, 0x30, 0xd8, 0xcd, 0xb7, 0x80, 0x70, 0xb4, 0xc5,
        0x5a,
    ];

    fn block_from_hex(hex_str: &str) -> [u8; 16] {
        let bytes = hex::decode(hex_str).expect("valid hex");
        bytes.as_slice().try_into().expect("16 bytes")
    }

    #[test]
    fn encrypt_matches_fips_vector() {
        let cipher = Aes128::new(&Key::from(NIST_KEY)).unwrap();
        assert_eq!(cipher.encrypt(&NIST_PLAIN).unwrap(), NIST_CIPHER);
    }

    #[test]
    fn encrypt_matches_sp800_38a_vectors() {
        let key = Key::from(block_from_hex("2b7e151628aed2a6abf7158809cf4f3c"));
        let cipher = Aes128::new(&key).unwrap();
        let cases = [
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
        for (plain, expected) in cases {
            let ciphertext = cipher.encrypt(&block_from_hex(plain)).unwrap();
            assert_eq!(ciphertext, block_from_hex(expected), "plaintext {plain}");
        }
    }

    #[test]
    fn rejects_keys_that_are_not_128_bits() {
        for len in [0usize, 8, 15, 17, 24, 32] {
            let err = Aes128::new(&Key::new(vec![0u8; len])).unwrap_err();
            assert_eq!(err, CipherError::InvalidKeyLength { bits: len * 8 });
        }
    }

    #[test]
    fn rejects_blocks_that_are_not_16_bytes() {
        let cipher = Aes128::new(&Key::from([0u8; 16])).unwrap();
        for len in [0usize, 1, 15, 17, 32] {
            let err = cipher.encrypt(&vec![0u8; len]).unwrap_err();
            assert_eq!(err, CipherError::InvalidBlockSize { len });
        }
    }

    #[test]
    fn encryption_is_deterministic_across_instances() {
        let mut rng = rand::thread_rng();
        let mut key_bytes = [0u8; 16];
        rng.fill_bytes(&mut key_bytes);
        let first = Aes128::new(&Key::from(key_bytes)).unwrap();
        let second = Aes128::new(&Key::from(key_bytes)).unwrap();

        for _ in 0..100 {
            let mut block = [0u8; 16];
            rng.fill_bytes(&mut block);
            assert_eq!(
                first.encrypt(&block).unwrap(),
                second.encrypt(&block).unwrap()
            );
        }
    }

    #[test]
    fn single_bit_key_changes_alter_the_ciphertext() {
        let block = [0x42u8; 16];
        let base = Aes128::new(&Key::from([0u8; 16]))
            .unwrap()
            .encrypt(&block)
            .unwrap();
        for bit in 0..8 {
            let mut key_bytes = [0u8; 16];
            key_bytes[0] = 1 << bit;
            let ciphertext = Aes128::new(&Key::from(key_bytes))
                .unwrap()
                .encrypt(&block)
                .unwrap();
            assert_ne!(ciphertext, base, "key bit {bit}");
        }
    }

    #[test]
    fn little_endian_packing_is_a_consistent_variant() {
        let key = Key::from([0x07u8; 16]);
        let little_a = Aes128::with_byte_order(&key, ByteOrder::Little).unwrap();
        let little_b = Aes128::with_byte_order(&key, ByteOrder::Little).unwrap();
        let big = Aes128::new(&key).unwrap();

        let block = NIST_PLAIN;
        let ct = little_a.encrypt(&block).unwrap();
        assert_eq!(ct, little_b.encrypt(&block).unwrap());
        // The round constants interact with the packing, so the two orders
        // are distinct ciphers.
        assert_ne!(ct, big.encrypt(&block).unwrap());
    }
}
