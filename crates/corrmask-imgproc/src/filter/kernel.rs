use corrmask_tensor::{Tensor2, Tensor3};

use crate::error::FilterError;

/// A 2D correlation mask with `rows x cols` weights.
///
/// The mask is swept across a single image channel without flipping, so the
/// operation is a correlation, not a convolution. Both even and odd
/// dimensions are valid.
#[derive(Clone, Debug, PartialEq)]
pub struct Kernel2d(Tensor2<f32>);

impl Kernel2d {
    /// Create a new kernel from its shape and row-major weights.
    ///
    /// # Errors
    ///
    /// Returns an error when a dimension is zero or the data length does not
    /// match the shape.
    pub fn new(shape: [usize; 2], weights: Vec<f32>) -> Result<Self, FilterError> {
        if shape[0] == 0 || shape[1] == 0 {
            return Err(FilterError::EmptyKernel(shape[0], shape[1]));
        }
        Ok(Self(Tensor2::from_shape_vec(shape, weights)?))
    }

    /// Get the number of rows of the kernel.
    #[inline]
    pub fn rows(&self) -> usize {
        self.0.shape[0]
    }

    /// Get the number of columns of the kernel.
    #[inline]
    pub fn cols(&self) -> usize {
        self.0.shape[1]
    }

    /// Get the weights of the kernel as a row-major slice.
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        self.0.as_slice()
    }

    /// Get the weight at the given row and column.
    #[inline]
    pub fn weight(&self, row: usize, col: usize) -> f32 {
        self.0.as_slice()[row * self.cols() + col]
    }
}

/// A 3D correlation mask with `rows x cols x channels` weights.
///
/// The channel count of the mask must match the channel count of the image
/// it is applied to. The mask consumes all channels jointly per output
/// pixel, producing a single scalar.
#[derive(Clone, Debug, PartialEq)]
pub struct Kernel3d(Tensor3<f32>);

impl Kernel3d {
    /// Create a new kernel from its shape and row-major weights.
    ///
    /// The layout is `(rows, cols, channels)` with the channel index varying
    /// fastest.
    ///
    /// # Errors
    ///
    /// Returns an error when a spatial dimension or the channel count is
    /// zero, or the data length does not match the shape.
    pub fn new(shape: [usize; 3], weights: Vec<f32>) -> Result<Self, FilterError> {
        if shape[0] == 0 || shape[1] == 0 || shape[2] == 0 {
            return Err(FilterError::EmptyKernel(shape[0], shape[1]));
        }
        Ok(Self(Tensor3::from_shape_vec(shape, weights)?))
    }

    /// Get the number of rows of the kernel.
    #[inline]
    pub fn rows(&self) -> usize {
        self.0.shape[0]
    }

    /// Get the number of columns of the kernel.
    #[inline]
    pub fn cols(&self) -> usize {
        self.0.shape[1]
    }

    /// Get the number of channel planes of the kernel.
    #[inline]
    pub fn channels(&self) -> usize {
        self.0.shape[2]
    }

    /// Get the weights of the kernel as a row-major slice.
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        self.0.as_slice()
    }

    /// Get the weight at the given row, column and channel.
    #[inline]
    pub fn weight(&self, row: usize, col: usize, channel: usize) -> f32 {
        self.0.as_slice()[(row * self.cols() + col) * self.channels() + channel]
    }

    /// Compute the (row, col) pivot of this kernel under the given rule.
    pub fn pivots(&self, rule: PivotRule) -> (usize, usize) {
        (
            rule.pivot(self.rows(), self.rows()),
            rule.pivot(self.cols(), self.rows()),
        )
    }
}

/// How the pivot cell of a kernel dimension is chosen.
///
/// The pivot is the kernel cell aligned with the output pixel under
/// computation. For a dimension of size `k` the pivot index is `k - 1` when
/// the even-size formula applies and `(k - 1) / 2` otherwise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PivotRule {
    /// The parity of the row dimension selects the formula for both axes.
    ///
    /// This reproduces the historical behavior: a kernel with an even number
    /// of rows uses the even-size formula for its column pivot as well, even
    /// when the column count is odd.
    #[default]
    RowParity,

    /// Each axis selects the formula from its own parity.
    PerAxis,
}

impl PivotRule {
    /// Compute the pivot index for a dimension of size `dim`, given the row
    /// dimension size `row_dim` of the same kernel.
    pub fn pivot(&self, dim: usize, row_dim: usize) -> usize {
        let even = match self {
            PivotRule::RowParity => row_dim % 2 == 0,
            PivotRule::PerAxis => dim % 2 == 0,
        };
        if even {
            dim - 1
        } else {
            (dim - 1) / 2
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kernel2d_accessors() -> Result<(), FilterError> {
        let k = Kernel2d::new([2, 3], vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])?;
        assert_eq!(k.rows(), 2);
        assert_eq!(k.cols(), 3);
        assert_eq!(k.weight(1, 2), 6.0);
        Ok(())
    }

    #[test]
    fn kernel2d_rejects_empty() {
        assert!(Kernel2d::new([0, 3], vec![]).is_err());
        assert!(Kernel2d::new([3, 0], vec![]).is_err());
    }

    #[test]
    fn kernel3d_accessors() -> Result<(), FilterError> {
        let k = Kernel3d::new([1, 2, 3], vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])?;
        assert_eq!(k.rows(), 1);
        assert_eq!(k.cols(), 2);
        assert_eq!(k.channels(), 3);
        assert_eq!(k.weight(0, 1, 0), 4.0);
        assert_eq!(k.weight(0, 1, 2), 6.0);
        Ok(())
    }

    #[test]
    fn pivot_row_parity_odd_rows() {
        // 3x5 kernel: odd row count selects the centered formula for both axes.
        assert_eq!(PivotRule::RowParity.pivot(3, 3), 1);
        assert_eq!(PivotRule::RowParity.pivot(5, 3), 2);
    }

    #[test]
    fn pivot_row_parity_even_rows() {
        // 2x3 kernel: even row count drags the column axis onto the
        // trailing-cell formula as well.
        assert_eq!(PivotRule::RowParity.pivot(2, 2), 1);
        assert_eq!(PivotRule::RowParity.pivot(3, 2), 2);
    }

    #[test]
    fn pivot_per_axis() {
        // Same 2x3 kernel under the per-axis rule: the column pivot recovers
        // the centered formula.
        assert_eq!(PivotRule::PerAxis.pivot(2, 2), 1);
        assert_eq!(PivotRule::PerAxis.pivot(3, 2), 1);
    }

    #[test]
    fn kernel3d_pivots() -> Result<(), FilterError> {
        let k = Kernel3d::new([2, 3, 1], vec![0.0; 6])?;
        assert_eq!(k.pivots(PivotRule::RowParity), (1, 2));
        assert_eq!(k.pivots(PivotRule::PerAxis), (1, 1));
        Ok(())
    }
}
