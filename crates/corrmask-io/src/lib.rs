#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for the io module.
pub mod error;

/// Filter-file reading and parsing.
pub mod filterfile;

/// High-level image reading and writing.
pub mod functional;

pub use crate::error::IoError;
