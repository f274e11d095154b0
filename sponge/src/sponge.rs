use alloc::vec::Vec;
use core::fmt;

use generic_array::typenum::Unsigned;

use crate::{
    error::{Error, Result},
    prp::{keccak::KeccakF1600, PRP},
};

/// Rate in bytes of the 128-bit security level variants (SHAKE128, cSHAKE128, KMAC128).
pub const RATE_128: usize = 168;

/// Rate in bytes of the 256-bit security level variants (SHAKE256, cSHAKE256, KMAC256).
pub const RATE_256: usize = 136;

/// Last bit of the `pad10*1` padding rule.
const PAD_LAST: u8 = 0x80;

/// Domain separation byte, folded into the first padding byte at finalization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Domain {
    /// Plain SHAKE extendable-output function.
    Shake,
    /// cSHAKE and everything built on it (KMAC).
    CShake,
}

impl Domain {
    /// Returns the suffix bits of the domain together with the first padding bit.
    pub const fn byte(self) -> u8 {
        match self {
            Domain::Shake => 0x1f,
            Domain::CShake => 0x04,
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Domain::Shake => write!(f, "SHAKE"),
            Domain::CShake => write!(f, "cSHAKE"),
        }
    }
}

/// Keccak sponge in the absorbing phase.
///
/// The sponge never leaves the absorbing phase: every output operation works either on a
/// duplicate ([`Sponge::squeeze`], [`Sponge::sum`]) or consumes the sponge
/// ([`Sponge::finalize_xof`]).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sponge<F = KeccakF1600> {
    /// Sponge transform together with its internal state.
    s: F,

    /// Bytes absorbed per transform.
    rate: usize,

    /// Current position (offset in bytes) within the outer state.
    pos: usize,

    /// Default number of bytes produced by [`Sponge::sum`].
    output_len: usize,

    /// Domain separation suffix.
    domain: Domain,
}

impl Sponge<KeccakF1600> {
    /// SHAKE128 with a 32 byte default output.
    pub fn shake128() -> Self {
        Self::init_with_state(KeccakF1600::default(), RATE_128, 32, Domain::Shake)
    }

    /// SHAKE256 with a 64 byte default output.
    pub fn shake256() -> Self {
        Self::init_with_state(KeccakF1600::default(), RATE_256, 64, Domain::Shake)
    }
}

impl<F> Sponge<F>
where
    F: PRP + Default,
{
    /// Create a sponge with a zeroed state.
    ///
    /// # Arguments
    /// * `rate`: bytes absorbed per transform; must leave a non-empty capacity.
    /// * `output_len`: number of bytes [`Sponge::sum`] produces.
    /// * `domain`: domain separation applied when padding.
    pub fn new(rate: usize, output_len: usize, domain: Domain) -> Result<Self> {
        let width = F::StateSize::USIZE;
        if rate == 0 || rate >= width {
            return Err(Error::InvalidRate { rate, width });
        }
        Ok(Self::init_with_state(F::default(), rate, output_len, domain))
    }
}

impl<F> Sponge<F> {
    /// Create a Sponge object with an explicit state.
    fn init_with_state(s: F, rate: usize, output_len: usize, domain: Domain) -> Self {
        Self {
            s,
            rate,
            pos: 0,
            output_len,
            domain,
        }
    }

    pub fn rate(&self) -> usize {
        self.rate
    }

    pub fn output_len(&self) -> usize {
        self.output_len
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }
}

impl<F: PRP + Clone> Sponge<F> {
    /// Independent copy of the sponge; absorbing into either one does not affect the other.
    pub fn duplicate(&self) -> Self {
        self.clone()
    }

    /// Absorb a slice into the Sponge object.
    pub fn absorb<T>(&mut self, xr: T)
    where
        T: AsRef<[u8]>,
    {
        let mut x = xr.as_ref();
        while !x.is_empty() {
            let n = core::cmp::min(self.rate - self.pos, x.len());
            self.s.xor_in(self.pos, &x[..n]);
            x = &x[n..];
            self.update(n);
        }
    }

    /// Update Sponge after processing the current piece of data of `n` bytes.
    fn update(&mut self, n: usize) {
        self.pos += n;
        if self.rate == self.pos {
            self.s.transform();
            self.pos = 0;
        }
    }

    /// Pad the absorbed input and switch to squeezing.
    pub fn finalize_xof(mut self) -> XofReader<F> {
        self.s.xor_in(self.pos, &[self.domain.byte()]);
        self.s.xor_in(self.rate - 1, &[PAD_LAST]);
        self.s.transform();
        XofReader {
            s: self.s,
            rate: self.rate,
            pos: 0,
        }
    }

    /// Squeeze `out.len()` bytes from a duplicate of the sponge.
    pub fn squeeze_into(&self, out: &mut [u8]) {
        self.duplicate().finalize_xof().read(out);
    }

    /// Squeeze vector, length is known at runtime.
    ///
    /// The live state is left untouched, so repeated calls return the same prefix.
    pub fn squeeze(&self, n: usize) -> Vec<u8> {
        let mut v = vec![0; n];
        self.squeeze_into(&mut v);
        v
    }

    /// Squeeze the default output length.
    pub fn sum(&self) -> Vec<u8> {
        self.squeeze(self.output_len)
    }
}

impl<F> fmt::Debug for Sponge<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sponge")
            .field("rate", &self.rate)
            .field("pos", &self.pos)
            .field("output_len", &self.output_len)
            .field("domain", &self.domain)
            .finish()
    }
}

/// Sponge in the squeezing phase.
#[derive(Clone)]
pub struct XofReader<F = KeccakF1600> {
    s: F,
    rate: usize,
    pos: usize,
}

impl<F: PRP> XofReader<F> {
    /// Squeeze a byte slice; consecutive reads continue the same output stream.
    pub fn read(&mut self, mut y: &mut [u8]) {
        while !y.is_empty() {
            if self.pos == self.rate {
                self.s.transform();
                self.pos = 0;
            }
            let n = core::cmp::min(self.rate - self.pos, y.len());
            self.s.copy_out(self.pos, &mut y[..n]);
            y = &mut y[n..];
            self.pos += n;
        }
    }

    /// Squeeze the next `n` bytes of the output stream.
    pub fn read_n(&mut self, n: usize) -> Vec<u8> {
        let mut v = vec![0; n];
        self.read(&mut v);
        v
    }
}

impl<F: PRP> digest::XofReader for XofReader<F> {
    fn read(&mut self, buffer: &mut [u8]) {
        XofReader::read(self, buffer);
    }
}

impl<F> fmt::Debug for XofReader<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("XofReader").field("rate", &self.rate).field("pos", &self.pos).finish()
    }
}
