//! Sponge Errors

use thiserror_no_std::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
/// Error type of the sponge crate.
pub enum Error {
    #[error("sponge rate must be between 1 and {width} bytes exclusive, found {rate}")]
    InvalidRate { rate: usize, width: usize },
}
