use generic_array::typenum::U200;

use super::PRP;

/// Number of 64-bit lanes in the `Keccak-F[1600]` state.
const LANES: usize = 25;

/// A psuedo-random permutation implementing `Keccak-F[1600]`
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct KeccakF1600 {
    /// Inner state for transformation
    state: [u64; LANES],
}

impl KeccakF1600 {
    /// Use `Keccak-F[1600]` sponge function on inner state
    fn permutation(&mut self) {
        keccak::f1600(&mut self.state);
    }
}

impl PRP for KeccakF1600 {
    type StateSize = U200; // 1600 / 8

    fn transform(&mut self) {
        self.permutation();
    }

    // Lanes are little-endian: byte `i` lives in lane `i / 8` at bit offset `8 * (i % 8)`.
    fn xor_in(&mut self, offset: usize, bytes: &[u8]) {
        for (i, b) in bytes.iter().enumerate() {
            let pos = offset + i;
            self.state[pos / 8] ^= u64::from(*b) << (8 * (pos % 8));
        }
    }

    fn copy_out(&self, offset: usize, out: &mut [u8]) {
        for (i, o) in out.iter_mut().enumerate() {
            let pos = offset + i;
            *o = (self.state[pos / 8] >> (8 * (pos % 8))) as u8;
        }
    }
}
