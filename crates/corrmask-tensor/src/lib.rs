#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// tensor module containing the dense array and its operations.
pub mod tensor;

pub use crate::tensor::{get_strides_from_shape, Tensor, Tensor2, Tensor3, TensorError};
