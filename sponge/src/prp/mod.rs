use generic_array::ArrayLength;

pub mod keccak;

/// Pseudo-random permutation.
///
/// Actually, it may be non-bijective as the inverse transform is not used in sponge construction.
/// The sponge addresses the state as a flat byte string; how those bytes map onto the
/// permutation's words is up to the implementation.
#[allow(clippy::upper_case_acronyms)]
pub trait PRP {
    /// Width of the full permutation state in bytes.
    /// The sponge rate plus its capacity always add up to this width.
    type StateSize: ArrayLength<u8>;

    /// Transform full state.
    fn transform(&mut self);

    /// XOR `bytes` into the state starting at byte `offset`.
    fn xor_in(&mut self, offset: usize, bytes: &[u8]);

    /// Copy state bytes starting at `offset` into `out`.
    fn copy_out(&self, offset: usize, out: &mut [u8]);
}
