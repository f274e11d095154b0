use alloc::vec::Vec;

use rand::{rngs::StdRng, Rng};

mod encoding;

/// The 32 byte key of the SP 800-185 samples: `40 41 42 ... 5F`.
fn sample_key() -> Vec<u8> {
    (0x40..0x60).collect()
}

/// `00 01 02 ... (n - 1)`, the sample messages.
fn counting(n: usize) -> Vec<u8> {
    (0..n).map(|i| i as u8).collect()
}

fn random_bytes(rng: &mut StdRng, n: usize) -> Vec<u8> {
    (0..n).map(|_| rng.gen()).collect()
}

fn unhex(s: &str) -> Vec<u8> {
    hex::decode(s).unwrap()
}
