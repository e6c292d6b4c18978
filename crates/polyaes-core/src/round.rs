//! Round transformations over the word-packed state.

use std::sync::LazyLock;

use gf2poly::Gf2Poly;

use crate::sbox::sub_word;
use crate::state::{pack_words, rotate_row_left, unpack_words, ByteOrder, Words};

/// Reduction threshold: products of degree 8 or higher leave GF(2^8).
const FIELD_DEGREE: u8 = 8;

/// MixColumns coefficient matrix, row-major.
const MIX_MATRIX: [[u8; 4]; 4] = [
    [0x02, 0x03, 0x01, 0x01],
    [0x01, 0x02, 0x03, 0x01],
    [0x01, 0x01, 0x02, 0x03],
    [0x03, 0x01, 0x01, 0x02],
];

/// AES field polynomial x^8 + x^4 + x^3 + x + 1 (0x11b).
static PRIMITIVE: LazyLock<Gf2Poly> =
    LazyLock::new(|| Gf2Poly::from_exponents([8, 4, 3, 1, 0]));

/// Multiplies two field elements through the polynomial engine.
fn gf_mul(a: u8, b: u8) -> u8 {
    Gf2Poly::from_bits(u16::from(a), 8)
        .mul_mod(&Gf2Poly::from_bits(u16::from(b), 8), FIELD_DEGREE, &PRIMITIVE)
        .to_bits() as u8
}

/// XORs a four-word round key into the state.
#[inline]
pub fn add_round_key(state: &mut Words, round_key: &[u32]) {
    for (word, key) in state.iter_mut().zip(round_key.iter()) {
        *word ^= key;
    }
}

/// Replaces every state byte with its S-box substitution.
#[inline]
pub fn sub_bytes(state: &mut Words) {
    for word in state.iter_mut() {
        *word = sub_word(*word);
    }
}

/// Rotates rows 1..=3 of the byte grid left by their row index.
pub fn shift_rows(state: &mut Words, order: ByteOrder) {
    let mut bytes = unpack_words(state, order);
    for row in 1..4 {
        rotate_row_left(&mut bytes, row, row);
    }
    *state = pack_words(&bytes, order);
}

/// Multiplies every state column by the mixing matrix over GF(2^8).
pub fn mix_columns(state: &mut Words, order: ByteOrder) {
    let bytes = unpack_words(state, order);
    let mut mixed = bytes;

    for col in 0..4 {
        let column = [
            bytes[col * 4],
            bytes[col * 4 + 1],
            bytes[col * 4 + 2],
            bytes[col * 4 + 3],
        ];
        for (row, coeffs) in MIX_MATRIX.iter().enumerate() {
            mixed[col * 4 + row] = coeffs
                .iter()
                .zip(column.iter())
                .fold(0u8, |acc, (&m, &c)| acc ^ gf_mul(m, c));
        }
    }

    *state = pack_words(&mixed, order);
}
