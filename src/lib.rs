//! KMAC and cSHAKE as specified in NIST SP 800-185.
//!
//! ```
//! use sp800_185::Kmac;
//!
//! let key = [0x40_u8; 32];
//! let mut kmac = Kmac::new256(&key, 32, b"My Tagged Application").unwrap();
//! kmac.update(b"hello ");
//! kmac.update(b"world");
//! let tag = kmac.finalize();
//! assert!(kmac.verify(&tag));
//! ```

/// Encodings, cSHAKE and KMAC.
pub use sp800_185_core;
/// Keccak sponge the constructions run on.
pub use sp800_185_sponge;

pub use sp800_185_core::{
    encoding, CShake, Domain, Error, KeccakF1600, Kmac, Result, SecurityLevel, Sponge, XofReader, MIN_TAG_LEN,
};
