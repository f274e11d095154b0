use alloc::vec::Vec;
use core::{convert::TryFrom, fmt};

use sp800_185_sponge::{KeccakF1600, Sponge, XofReader, PRP, RATE_128, RATE_256};

use crate::{
    cshake::CShake,
    encoding::{bit_length, right_encode, Bytepad},
    error::{Error, Result},
};

/// Shortest tag [`Kmac`] agrees to produce, in bytes.
///
/// SP 800-185 forbids tags under 32 bits and asks for a risk analysis below 64 bits; 64 bits is
/// the floor here.
pub const MIN_TAG_LEN: usize = 8;

/// NIST function name of KMAC.
const FUNCTION_NAME: &[u8] = b"KMAC";

/// Security strength of a KMAC instance; fixes the sponge rate and the minimum key length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SecurityLevel {
    /// KMAC128
    Bits128,
    /// KMAC256
    Bits256,
}

impl SecurityLevel {
    pub const fn bits(self) -> u16 {
        match self {
            SecurityLevel::Bits128 => 128,
            SecurityLevel::Bits256 => 256,
        }
    }

    /// Sponge rate in bytes.
    pub const fn rate(self) -> usize {
        match self {
            SecurityLevel::Bits128 => RATE_128,
            SecurityLevel::Bits256 => RATE_256,
        }
    }

    /// Keys shorter than the security strength are rejected.
    pub const fn min_key_len(self) -> usize {
        self.bits() as usize / 8
    }
}

impl TryFrom<u16> for SecurityLevel {
    type Error = Error;

    fn try_from(bits: u16) -> Result<Self> {
        match bits {
            128 => Ok(SecurityLevel::Bits128),
            256 => Ok(SecurityLevel::Bits256),
            other => err!(Error::UnsupportedSecurityLevel(other)),
        }
    }
}

impl fmt::Display for SecurityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KMAC{}", self.bits())
    }
}

/// KMAC message authentication code.
///
/// The key block `bytepad(encode_string(K), rate)` is absorbed right after the cSHAKE header.
/// Finalization never touches the live state, so a context can keep absorbing after a tag has
/// been produced, and [`Kmac::reset`] returns it to the freshly keyed state.
#[derive(Clone)]
pub struct Kmac<F = KeccakF1600> {
    /// cSHAKE with function name "KMAC", message bytes go here.
    cshake: CShake<F>,

    /// Sponge right after the key block, restored by `reset`.
    keyed: Sponge<F>,

    level: SecurityLevel,
}

impl Kmac<KeccakF1600> {
    /// KMAC128 producing `output_len` byte tags. The key must be at least 16 bytes.
    pub fn new128(key: &[u8], output_len: usize, customization: &[u8]) -> Result<Self> {
        Self::new(SecurityLevel::Bits128, key, output_len, customization)
    }

    /// KMAC256 producing `output_len` byte tags. The key must be at least 32 bytes.
    pub fn new256(key: &[u8], output_len: usize, customization: &[u8]) -> Result<Self> {
        Self::new(SecurityLevel::Bits256, key, output_len, customization)
    }

    /// Tag `data` in one go.
    pub fn mac(
        level: SecurityLevel,
        key: &[u8],
        customization: &[u8],
        data: &[u8],
        output_len: usize,
    ) -> Result<Vec<u8>> {
        let mut kmac = Self::new(level, key, output_len, customization)?;
        kmac.update(data);
        Ok(kmac.finalize())
    }
}

impl<F> Kmac<F>
where
    F: PRP + Default + Clone,
{
    /// Create a keyed KMAC instance.
    ///
    /// # Arguments
    /// * `level`: security strength, determines the rate.
    /// * `key`: secret key, at least `level.min_key_len()` bytes.
    /// * `output_len`: tag length in bytes, at least [`MIN_TAG_LEN`].
    /// * `customization`: customization string `S`, may be empty.
    pub fn new(level: SecurityLevel, key: &[u8], output_len: usize, customization: &[u8]) -> Result<Self> {
        try_or!(
            key.len() >= level.min_key_len(),
            Error::KeyTooShort {
                level: level.bits(),
                expected: level.min_key_len(),
                found: key.len(),
            }
        );
        try_or!(
            output_len >= MIN_TAG_LEN,
            Error::OutputTooShort {
                minimum: MIN_TAG_LEN,
                found: output_len,
            }
        );
        // The suffix must be encodable before any tag is promised.
        bit_length(output_len)?;

        let rate = level.rate();
        let mut cshake: CShake<F> = CShake::new(rate, output_len, FUNCTION_NAME, customization)?;
        let mut key_block = Bytepad::start(cshake.sponge_mut(), rate)?;
        key_block.encode_string(key)?;
        key_block.finish();

        Ok(Self {
            keyed: cshake.sponge().duplicate(),
            cshake,
            level,
        })
    }
}

impl<F: PRP + Clone> Kmac<F> {
    /// Absorb message bytes; chunk boundaries do not affect the tag.
    pub fn update<T: AsRef<[u8]>>(&mut self, data: T) {
        self.cshake.update(data);
    }

    /// Duplicate of the live state with the length suffix `right_encode(bits)` absorbed.
    fn suffixed(&self, bits: u64) -> Sponge<F> {
        let mut s = self.cshake.sponge().duplicate();
        s.absorb(&right_encode(bits));
        s
    }

    /// Tag over every byte absorbed since construction or the last reset.
    ///
    /// May be called repeatedly; the live state is not modified.
    pub fn finalize(&self) -> Vec<u8> {
        let mut tag = Vec::with_capacity(self.output_len());
        self.finalize_append(&mut tag);
        tag
    }

    /// Append the tag to `out`, leaving its existing contents as a prefix.
    pub fn finalize_append(&self, out: &mut Vec<u8>) {
        let n = self.output_len();
        // `new` checked that `n * 8` fits.
        let bits = n as u64 * 8;
        let start = out.len();
        out.resize(start + n, 0);
        self.suffixed(bits).squeeze_into(&mut out[start..]);
    }

    /// KMACXOF: arbitrary-length output, the suffix encodes a length of zero.
    pub fn finalize_xof(&self) -> XofReader<F> {
        self.suffixed(0).finalize_xof()
    }

    /// Compare `tag` with the tag of the bytes absorbed so far.
    ///
    /// Every byte is compared regardless of where the first mismatch is.
    pub fn verify(&self, tag: &[u8]) -> bool {
        if tag.len() != self.output_len() {
            return false;
        }
        let expected = self.finalize();
        expected.iter().zip(tag.iter()).fold(0_u8, |acc, (e, t)| acc | (e ^ t)) == 0
    }

    /// Drop all message bytes absorbed so far, keeping the header and key.
    pub fn reset(&mut self) {
        self.cshake.restore(&self.keyed);
    }
}

impl<F> Kmac<F> {
    /// Tag length in bytes.
    pub fn output_len(&self) -> usize {
        self.cshake.output_len()
    }

    /// Sponge rate in bytes.
    pub fn block_size(&self) -> usize {
        self.cshake.rate()
    }

    pub fn security_level(&self) -> SecurityLevel {
        self.level
    }
}

impl<F> fmt::Debug for Kmac<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Kmac")
            .field("level", &self.level)
            .field("output_len", &self.output_len())
            .finish()
    }
}

impl<F: PRP + Clone> digest::Update for Kmac<F> {
    fn update(&mut self, data: impl AsRef<[u8]>) {
        Kmac::update(self, data);
    }
}

impl<F: PRP + Clone> digest::Reset for Kmac<F> {
    fn reset(&mut self) {
        Kmac::reset(self);
    }
}
