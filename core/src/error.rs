//! SP 800-185 Errors

use sp800_185_sponge::Error as SpongeError;
use thiserror_no_std::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
/// Error type of the SP 800-185 core crate.
pub enum Error {
    #[error("KMAC{level} key must be at least {expected} bytes long, but is {found} bytes long instead")]
    KeyTooShort { level: u16, expected: usize, found: usize },

    #[error("requested tag length {found} is below the minimum of {minimum} bytes")]
    OutputTooShort { minimum: usize, found: usize },

    #[error("{0} does not fit in the 8 byte integer encoding")]
    EncodingOverflow(&'static str),

    #[error("bytepad width must be positive")]
    InvalidPadWidth,

    #[error("unsupported security level: {0} bits (expected 128 or 256)")]
    UnsupportedSecurityLevel(u16),

    #[error("Internal sponge error: {0}")]
    Sponge(SpongeError),
}

impl From<SpongeError> for Error {
    fn from(error: SpongeError) -> Self {
        Self::Sponge(error)
    }
}
