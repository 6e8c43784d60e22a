use thiserror::Error;

/// An error type for tensor operations.
#[derive(Error, Debug, PartialEq)]
pub enum TensorError {
    /// Tensor shape does not match the provided data.
    #[error("Shape mismatch: expected {expected} elements for shape, but got {actual} elements in data")]
    InvalidShape {
        /// Expected number of elements based on shape
        expected: usize,
        /// Actual number of elements in the data
        actual: usize,
    },

    /// Index exceeds tensor bounds.
    #[error("Index {index} out of bounds for dimension of size {size}")]
    IndexOutOfBounds {
        /// The invalid index that was attempted
        index: usize,
        /// The size of the dimension being indexed
        size: usize,
    },
}

/// Computes the strides for a row-major (C-contiguous) tensor layout.
///
/// The rightmost dimension has stride 1, and each dimension's stride is the
/// product of all dimensions to its right.
///
/// # Examples
///
/// ```
/// use corrmask_tensor::get_strides_from_shape;
///
/// let strides = get_strides_from_shape([2, 3]);
/// assert_eq!(strides, [3, 1]);
///
/// let strides = get_strides_from_shape([2, 3, 4]);
/// assert_eq!(strides, [12, 4, 1]);
/// ```
pub fn get_strides_from_shape<const N: usize>(shape: [usize; N]) -> [usize; N] {
    let mut strides: [usize; N] = [0; N];
    let mut stride = 1;
    for i in (0..shape.len()).rev() {
        strides[i] = stride;
        stride *= shape[i];
    }
    strides
}

/// A multi-dimensional array with owned, contiguous, row-major data.
///
/// The tensor combines a contiguous buffer, a shape and the strides derived
/// from that shape. There is no implicit broadcasting: any operation that
/// crosses dimensions is an explicit, named function on the consumer side.
///
/// # Examples
///
/// ```
/// use corrmask_tensor::Tensor2;
///
/// let t = Tensor2::<u8>::from_shape_vec([2, 2], vec![1, 2, 3, 4]).unwrap();
/// assert_eq!(t.shape, [2, 2]);
/// assert_eq!(t.get([1, 0]), Some(&3));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Tensor<T, const N: usize> {
    data: Vec<T>,
    /// The shape of the tensor.
    pub shape: [usize; N],
    /// The strides of the tensor data in memory.
    pub strides: [usize; N],
}

/// A 2-dimensional tensor alias.
pub type Tensor2<T> = Tensor<T, 2>;

/// A 3-dimensional tensor alias.
pub type Tensor3<T> = Tensor<T, 3>;

impl<T, const N: usize> Tensor<T, N> {
    /// Create a new tensor from a shape and a flat data vector.
    ///
    /// # Errors
    ///
    /// Returns [`TensorError::InvalidShape`] if the data length does not
    /// match the product of the shape dimensions.
    pub fn from_shape_vec(shape: [usize; N], data: Vec<T>) -> Result<Self, TensorError> {
        let numel = shape.iter().product::<usize>();
        if numel != data.len() {
            return Err(TensorError::InvalidShape {
                expected: numel,
                actual: data.len(),
            });
        }
        let strides = get_strides_from_shape(shape);
        Ok(Self {
            data,
            shape,
            strides,
        })
    }

    /// Create a new tensor of the given shape filled with a single value.
    pub fn from_shape_val(shape: [usize; N], val: T) -> Self
    where
        T: Clone,
    {
        let numel = shape.iter().product::<usize>();
        let strides = get_strides_from_shape(shape);
        Self {
            data: vec![val; numel],
            shape,
            strides,
        }
    }

    /// Get the total number of elements in the tensor.
    #[inline]
    pub fn numel(&self) -> usize {
        self.data.len()
    }

    /// Get the data of the tensor as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Get the data of the tensor as a mutable slice.
    #[inline]
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the tensor and return the underlying data vector.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Compute the flat buffer offset for a multi-dimensional index.
    ///
    /// # Errors
    ///
    /// Returns [`TensorError::IndexOutOfBounds`] when any index exceeds its
    /// dimension.
    #[inline]
    pub fn offset(&self, index: [usize; N]) -> Result<usize, TensorError> {
        for (&idx, &dim) in index.iter().zip(self.shape.iter()) {
            if idx >= dim {
                return Err(TensorError::IndexOutOfBounds {
                    index: idx,
                    size: dim,
                });
            }
        }
        Ok(index
            .iter()
            .zip(self.strides.iter())
            .map(|(&idx, &stride)| idx * stride)
            .sum())
    }

    /// Get a reference to the element at the given index, if in bounds.
    #[inline]
    pub fn get(&self, index: [usize; N]) -> Option<&T> {
        let offset = self.offset(index).ok()?;
        self.data.get(offset)
    }

    /// Get a mutable reference to the element at the given index, if in bounds.
    #[inline]
    pub fn get_mut(&mut self, index: [usize; N]) -> Option<&mut T> {
        let offset = self.offset(index).ok()?;
        self.data.get_mut(offset)
    }

    /// Apply a function elementwise, producing a new tensor.
    pub fn map<U, F>(&self, f: F) -> Tensor<U, N>
    where
        F: Fn(&T) -> U,
    {
        Tensor {
            data: self.data.iter().map(f).collect(),
            shape: self.shape,
            strides: self.strides,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strides_from_shape() {
        assert_eq!(get_strides_from_shape([4]), [1]);
        assert_eq!(get_strides_from_shape([2, 3]), [3, 1]);
        assert_eq!(get_strides_from_shape([2, 3, 4]), [12, 4, 1]);
    }

    #[test]
    fn from_shape_vec_ok() -> Result<(), TensorError> {
        let t = Tensor2::from_shape_vec([2, 3], vec![0u8, 1, 2, 3, 4, 5])?;
        assert_eq!(t.numel(), 6);
        assert_eq!(t.get([0, 2]), Some(&2));
        assert_eq!(t.get([1, 0]), Some(&3));
        assert_eq!(t.get([2, 0]), None);
        Ok(())
    }

    #[test]
    fn from_shape_vec_invalid() {
        let res = Tensor2::from_shape_vec([2, 3], vec![0u8; 5]);
        assert_eq!(
            res.err(),
            Some(TensorError::InvalidShape {
                expected: 6,
                actual: 5
            })
        );
    }

    #[test]
    fn from_shape_val_fill() {
        let t = Tensor3::from_shape_val([2, 2, 3], 7i32);
        assert_eq!(t.numel(), 12);
        assert!(t.as_slice().iter().all(|&x| x == 7));
    }

    #[test]
    fn offset_row_major() -> Result<(), TensorError> {
        let t = Tensor3::from_shape_val([2, 3, 4], 0u8);
        assert_eq!(t.offset([0, 0, 0])?, 0);
        assert_eq!(t.offset([1, 2, 3])?, 23);
        assert!(t.offset([2, 0, 0]).is_err());
        Ok(())
    }

    #[test]
    fn map_elementwise() -> Result<(), TensorError> {
        let t = Tensor2::from_shape_vec([2, 2], vec![1.0f32, -2.0, 3.0, -4.0])?;
        let abs = t.map(|x| x.abs());
        assert_eq!(abs.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
        Ok(())
    }
}
