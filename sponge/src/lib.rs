//! # Sponge
//! The `sp800-185-sponge` crate houses the Keccak sponge that the SP 800-185 constructions are
//! layered on. A [`PRP`] supplies the permutation, [`Sponge`] absorbs bytes into the outer part of
//! the state at a configurable rate, and finalization pads with a [`Domain`] byte before output is
//! read through an [`XofReader`].
//!
//! A [`Sponge`] is plain owned data: duplicating it with `Clone` yields an independent copy.

#![no_std]

#[macro_use]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Errors specific to sponge construction
pub mod error;

/// Pseudo-random permutations the sponge can run on
pub mod prp;

mod sponge;

pub use crate::{
    error::{Error, Result},
    prp::{keccak::KeccakF1600, PRP},
    sponge::{Domain, Sponge, XofReader, RATE_128, RATE_256},
};
