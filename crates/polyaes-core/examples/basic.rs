//! Encrypts the FIPS-197 example block and checks the expected ciphertext.

use polyaes_core::{Aes128, Key};

fn main() {
    let key = Key::from([
        0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e,
        0x0f,
    ]);
    let cipher = Aes128::new(&key).expect("128-bit key");

    let plaintext: [u8; 16] = [
        0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee,
        0xff,
    ];
    let ciphertext = cipher.encrypt(&plaintext).expect("16-byte block");

    assert_eq!(
        ciphertext,
        [
            0x69, 0xc4, 0xe0, 0xd8, 0x6a, 0x7b, 0x04, 0x30, 0xd8, 0xcd, 0xb7, 0x80, 0x70, 0xb4,
            0xc5, 0x5a,
        ]
    );
    println!("example succeeded; ciphertext matches the FIPS-197 vector");
}
