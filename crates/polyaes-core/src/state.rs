//! Word-packed state representation and byte-order handling.

/// AES block of 16 bytes.
pub type Block = [u8; 16];

/// Cipher state as four packed 32-bit words, one per column.
pub type Words = [u32; 4];

/// Byte-to-word packing order used when loading and storing blocks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ByteOrder {
    /// Most significant byte first; reproduces the FIPS-197 test vectors.
    #[default]
    Big,
    /// Least significant byte first.
    Little,
}

impl ByteOrder {
    #[inline]
    fn word_from(self, bytes: [u8; 4]) -> u32 {
        match self {
            ByteOrder::Big => u32::from_be_bytes(bytes),
            ByteOrder::Little => u32::from_le_bytes(bytes),
        }
    }

    #[inline]
    fn word_to(self, word: u32) -> [u8; 4] {
        match self {
            ByteOrder::Big => word.to_be_bytes(),
            ByteOrder::Little => word.to_le_bytes(),
        }
    }
}

/// Packs 16 bytes into four words under the given byte order.
pub fn pack_words(block: &Block, order: ByteOrder) -> Words {
    let mut words = [0u32; 4];
    for (word, chunk) in words.iter_mut().zip(block.chunks_exact(4)) {
        let bytes: [u8; 4] = chunk.try_into().expect("chunk length is four");
        *word = order.word_from(bytes);
    }
    words
}

/// Unpacks four words back into 16 bytes, the inverse of [`pack_words`].
pub fn unpack_words(words: &Words, order: ByteOrder) -> Block {
    let mut block = [0u8; 16];
    for (chunk, word) in block.chunks_exact_mut(4).zip(words.iter()) {
        chunk.copy_from_slice(&order.word_to(*word));
    }
    block
}

/// Returns byte `index` of `word`, counting from the least significant byte.
#[inline]
pub fn word_byte(word: u32, index: usize) -> u8 {
    (word >> (index * 8)) as u8
}

/// Rotates row `row` of the column-major byte grid left by `count` cells.
///
/// Word `i` of the state holds column `i`, so row `row` lives at indices
/// `[row, row + 4, row + 8, row + 12]` and wraps circularly across the four
/// columns.
pub fn rotate_row_left(bytes: &mut Block, row: usize, count: usize) {
    debug_assert!(row < 4);
    let count = count % 4;
    if count == 0 {
        return;
    }

    let cells = [row, row + 4, row + 8, row + 12];
    let current = cells.map(|cell| bytes[cell]);
    for (slot, cell) in cells.into_iter().enumerate() {
        bytes[cell] = current[(slot + count) % 4];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLOCK: Block = [
        0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e,
        0x0f,
    ];

    #[test]
    fn pack_unpack_round_trip_both_orders() {
        for order in [ByteOrder::Big, ByteOrder::Little] {
            let words = pack_words(&BLOCK, order);
            assert_eq!(unpack_words(&words, order), BLOCK);
        }
    }

    #[test]
    fn packing_orders_differ_per_word() {
        assert_eq!(pack_words(&BLOCK, ByteOrder::Big)[0], 0x00010203);
        assert_eq!(pack_words(&BLOCK, ByteOrder::Little)[0], 0x03020100);
    }

    #[test]
    fn word_byte_counts_from_low_end() {
        assert_eq!(word_byte(0x0a0b0c0d, 0), 0x0d);
        assert_eq!(word_byte(0x0a0b0c0d, 3), 0x0a);
    }

    #[test]
    fn row_rotation_wraps_across_columns() {
        let mut bytes = BLOCK;
        rotate_row_left(&mut bytes, 1, 1);
        assert_eq!(
            [bytes[1], bytes[5], bytes[9], bytes[13]],
            [0x05, 0x09, 0x0d, 0x01]
        );
        // Row 0 untouched.
        assert_eq!(
            [bytes[0], bytes[4], bytes[8], bytes[12]],
            [0x00, 0x04, 0x08, 0x0c]
        );
    }

    #[test]
    fn full_rotation_is_identity() {
        let mut bytes = BLOCK;
        rotate_row_left(&mut bytes, 2, 4);
        assert_eq!(bytes, BLOCK);
    }
}
