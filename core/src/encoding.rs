use alloc::vec::Vec;
use core::{convert::TryFrom, fmt, ops::Deref};

use sp800_185_sponge::{Sponge, PRP};

use crate::error::{Error, Result};

/// Largest number of value bytes an encoded integer may carry.
const MAX_WIDTH: usize = 8;

const ZEROES: [u8; 64] = [0; 64];

/// An encoded integer: at most 8 big-endian value bytes plus the length byte.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Encoded {
    buf: [u8; MAX_WIDTH + 1],
    start: usize,
}

impl Encoded {
    pub fn as_slice(&self) -> &[u8] {
        &self.buf[self.start..]
    }
}

impl Deref for Encoded {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl AsRef<[u8]> for Encoded {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl fmt::Debug for Encoded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Encoded({:02x?})", self.as_slice())
    }
}

/// Number of leading zero bytes of `be` that can be dropped, always leaving at least one byte.
fn skip_zeroes(be: &[u8; MAX_WIDTH]) -> usize {
    be[..MAX_WIDTH - 1].iter().take_while(|&&b| b == 0).count()
}

/// `left_encode(x)`: the byte length of `x` followed by `x` in minimal big-endian form.
///
/// Zero still takes one value byte, so `left_encode(0)` is `01 00`.
pub fn left_encode(x: u64) -> Encoded {
    let be = x.to_be_bytes();
    let i = skip_zeroes(&be);
    let mut buf = [0_u8; MAX_WIDTH + 1];
    buf[i] = (MAX_WIDTH - i) as u8;
    buf[i + 1..].copy_from_slice(&be[i..]);
    Encoded { buf, start: i }
}

/// `right_encode(x)`: `x` in minimal big-endian form followed by its byte length.
pub fn right_encode(x: u64) -> Encoded {
    let be = x.to_be_bytes();
    let i = skip_zeroes(&be);
    let mut buf = [0_u8; MAX_WIDTH + 1];
    buf[i..MAX_WIDTH].copy_from_slice(&be[i..]);
    buf[MAX_WIDTH] = (MAX_WIDTH - i) as u8;
    Encoded { buf, start: i }
}

/// Length in bits of a string of `n` bytes.
pub fn bit_length(n: usize) -> Result<u64> {
    u64::try_from(n)
        .ok()
        .and_then(|n| n.checked_mul(8))
        .ok_or(Error::EncodingOverflow("bit length"))
}

/// `encode_string(s)`: `left_encode` of the bit length of `s`, then `s` itself.
pub fn encode_string(s: &[u8]) -> Result<Vec<u8>> {
    let prefix = left_encode(bit_length(s.len())?);
    let mut out = Vec::with_capacity(prefix.len() + s.len());
    out.extend_from_slice(&prefix);
    out.extend_from_slice(s);
    Ok(out)
}

fn pad_width(w: usize) -> Result<u64> {
    try_or!(w > 0, Error::InvalidPadWidth);
    u64::try_from(w).map_err(|_| Error::EncodingOverflow("bytepad width"))
}

/// `bytepad(x, w)`: `left_encode(w)` and `x`, zero padded to a multiple of `w` bytes.
pub fn bytepad(x: &[u8], w: usize) -> Result<Vec<u8>> {
    let prefix = left_encode(pad_width(w)?);
    let mut out = Vec::with_capacity(prefix.len() + x.len() + w);
    out.extend_from_slice(&prefix);
    out.extend_from_slice(x);
    let rem = out.len() % w;
    if rem != 0 {
        out.resize(out.len() + w - rem, 0);
    }
    Ok(out)
}

/// Absorbs `bytepad(encode_string(s1) || ... || encode_string(sn), w)` straight into a sponge,
/// without materializing the padded string.
///
/// Keeps key material out of temporary buffers.
pub(crate) struct Bytepad<'a, F> {
    sponge: &'a mut Sponge<F>,
    w: usize,
    written: usize,
}

impl<'a, F: PRP + Clone> Bytepad<'a, F> {
    /// Absorb `left_encode(w)`.
    pub(crate) fn start(sponge: &'a mut Sponge<F>, w: usize) -> Result<Self> {
        let prefix = left_encode(pad_width(w)?);
        sponge.absorb(&prefix);
        Ok(Self {
            sponge,
            w,
            written: prefix.len(),
        })
    }

    /// Absorb `encode_string(s)`.
    pub(crate) fn encode_string(&mut self, s: &[u8]) -> Result<&mut Self> {
        let prefix = left_encode(bit_length(s.len())?);
        self.sponge.absorb(&prefix);
        self.sponge.absorb(s);
        self.written += prefix.len() + s.len();
        Ok(self)
    }

    /// Absorb the zero padding up to the next multiple of `w`.
    pub(crate) fn finish(self) {
        let mut pad = (self.w - self.written % self.w) % self.w;
        while pad > 0 {
            let n = core::cmp::min(pad, ZEROES.len());
            self.sponge.absorb(&ZEROES[..n]);
            pad -= n;
        }
    }
}
