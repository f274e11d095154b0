use alloc::vec::Vec;

use sp800_185_sponge::{Domain, KeccakF1600, Sponge, XofReader, PRP, RATE_128, RATE_256};

use crate::{encoding::Bytepad, error::Result};

/// Customizable SHAKE.
///
/// The domain separation header `bytepad(encode_string(N) || encode_string(S), rate)` is absorbed
/// on construction; with an empty function name `N` and an empty customization string `S` no header
/// is absorbed and the instance is plain SHAKE.
#[derive(Clone, Debug)]
pub struct CShake<F = KeccakF1600> {
    /// Live sponge message bytes are absorbed into.
    sponge: Sponge<F>,

    /// Sponge right after the header, restored by `reset`.
    initial: Sponge<F>,
}

impl CShake<KeccakF1600> {
    /// cSHAKE128 with a 32 byte default output.
    pub fn v128(function_name: &[u8], customization: &[u8]) -> Self {
        Self::with_rate(RATE_128, 32, function_name, customization)
    }

    /// cSHAKE256 with a 64 byte default output.
    pub fn v256(function_name: &[u8], customization: &[u8]) -> Self {
        Self::with_rate(RATE_256, 64, function_name, customization)
    }

    // Both standard rates are valid for Keccak-f[1600] and encode in a single byte,
    // so construction cannot fail.
    fn with_rate(rate: usize, output_len: usize, function_name: &[u8], customization: &[u8]) -> Self {
        match Self::new(rate, output_len, function_name, customization) {
            Ok(cshake) => cshake,
            Err(e) => unreachable!("standard cSHAKE parameters rejected: {}", e),
        }
    }
}

impl<F> CShake<F>
where
    F: PRP + Default + Clone,
{
    /// Create a cSHAKE instance.
    ///
    /// # Arguments
    /// * `rate`: sponge rate in bytes, also the `bytepad` width of the header.
    /// * `output_len`: number of bytes [`CShake::sum`] produces.
    /// * `function_name`: NIST function name `N`.
    /// * `customization`: customization string `S`.
    pub fn new(rate: usize, output_len: usize, function_name: &[u8], customization: &[u8]) -> Result<Self> {
        if function_name.is_empty() && customization.is_empty() {
            let sponge = Sponge::new(rate, output_len, Domain::Shake)?;
            return Ok(Self::from_sponge(sponge));
        }

        let mut sponge: Sponge<F> = Sponge::new(rate, output_len, Domain::CShake)?;
        let mut header = Bytepad::start(&mut sponge, rate)?;
        header.encode_string(function_name)?.encode_string(customization)?;
        header.finish();
        Ok(Self::from_sponge(sponge))
    }

    fn from_sponge(sponge: Sponge<F>) -> Self {
        Self {
            initial: sponge.duplicate(),
            sponge,
        }
    }
}

impl<F: PRP + Clone> CShake<F> {
    /// Absorb message bytes.
    pub fn update<T: AsRef<[u8]>>(&mut self, data: T) {
        self.sponge.absorb(data);
    }

    /// Drop all message bytes absorbed so far, keeping the header.
    pub fn reset(&mut self) {
        self.sponge = self.initial.duplicate();
    }

    /// Squeeze `n` bytes from a duplicate of the live state.
    pub fn squeeze(&self, n: usize) -> Vec<u8> {
        self.sponge.squeeze(n)
    }

    /// Squeeze the default output length from a duplicate of the live state.
    pub fn sum(&self) -> Vec<u8> {
        self.sponge.sum()
    }

    /// Output stream over a duplicate of the live state.
    pub fn finalize_xof(&self) -> XofReader<F> {
        self.sponge.duplicate().finalize_xof()
    }

    pub(crate) fn sponge(&self) -> &Sponge<F> {
        &self.sponge
    }

    pub(crate) fn sponge_mut(&mut self) -> &mut Sponge<F> {
        &mut self.sponge
    }

    /// Replace the live state, e.g. with a snapshot taken by an outer construction.
    pub(crate) fn restore(&mut self, snapshot: &Sponge<F>) {
        self.sponge = snapshot.duplicate();
    }
}

impl<F> CShake<F> {
    pub fn rate(&self) -> usize {
        self.sponge.rate()
    }

    pub fn output_len(&self) -> usize {
        self.sponge.output_len()
    }

    /// [`Domain::Shake`] for the header-less case, [`Domain::CShake`] otherwise.
    pub fn domain(&self) -> Domain {
        self.sponge.domain()
    }
}

impl<F: PRP + Clone> digest::Update for CShake<F> {
    fn update(&mut self, data: impl AsRef<[u8]>) {
        CShake::update(self, data);
    }
}

impl<F: PRP + Clone> digest::Reset for CShake<F> {
    fn reset(&mut self) {
        CShake::reset(self);
    }
}
