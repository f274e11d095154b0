//! # SP 800-185 core
//! Encoding primitives, cSHAKE and KMAC as specified in NIST SP 800-185.
//!
//! The `encoding` module serializes integers and byte strings into self-delimiting byte
//! sequences. [`CShake`] absorbs a domain separation header built from those encodings before any
//! message data, and [`Kmac`] keys a cSHAKE instance and binds the requested output length into
//! the tag at finalization. The Keccak sponge itself comes from `sp800-185-sponge`.

#![no_std]

#[macro_use]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

// Stub used when printing is not available.
// Macros are exported at crate root level, that's why it's defined here.
#[cfg(not(feature = "std"))]
#[doc(hidden)]
#[macro_export]
macro_rules! println {
    () => {{}};
    ($($arg:tt)*) => {{}};
}

// Reexport macro at the same level as `no_std`.
#[cfg(feature = "std")]
#[doc(hidden)]
pub use std::println;

#[cfg(not(feature = "err-location-log"))]
pub const LOCATION_LOG: bool = false;

#[cfg(feature = "err-location-log")]
pub const LOCATION_LOG: bool = true;

#[macro_use]
mod macros;

/// Errors specific to the SP 800-185 constructions
pub mod error;

/// `left_encode`, `right_encode`, `encode_string` and `bytepad`
pub mod encoding;

mod cshake;
mod kmac;

pub use crate::{
    cshake::CShake,
    error::{Error, Result},
    kmac::{Kmac, SecurityLevel, MIN_TAG_LEN},
};
pub use sp800_185_sponge::{Domain, KeccakF1600, Sponge, XofReader, PRP, RATE_128, RATE_256};

#[cfg(test)]
mod tests;
