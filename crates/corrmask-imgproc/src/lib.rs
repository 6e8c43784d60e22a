#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// color transformations module.
pub mod color;

/// image post-processing module.
pub mod enhance;

/// Error types for the imgproc module.
pub mod error;

/// correlation filtering module.
pub mod filter;

pub use crate::error::FilterError;
