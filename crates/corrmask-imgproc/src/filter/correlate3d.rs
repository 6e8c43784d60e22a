use corrmask_image::Image;

use super::kernel::{Kernel3d, PivotRule};
use super::window::window_reduce3d;
use crate::error::FilterError;

/// The rectangle of output pixels actually computed by [`correlate3d`].
///
/// Bounds are inclusive. Pixels outside this rectangle keep the value the
/// caller allocated the destination with; the region lets callers tell a
/// computed zero apart from a never-visited border pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValidRegion {
    /// First computed row.
    pub top: usize,
    /// First computed column.
    pub left: usize,
    /// Last computed row.
    pub bottom: usize,
    /// Last computed column.
    pub right: usize,
}

impl ValidRegion {
    /// Whether the pixel at `(row, col)` was computed.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row >= self.top && row <= self.bottom && col >= self.left && col <= self.right
    }

    /// Number of computed rows.
    pub fn height(&self) -> usize {
        self.bottom - self.top + 1
    }

    /// Number of computed columns.
    pub fn width(&self) -> usize {
        self.right - self.left + 1
    }
}

/// Apply a 3D correlation mask across all channels of an image.
///
/// For each output pixel inside the valid region the `rows x cols x channels`
/// window aligned by the kernel pivot is reduced to a single scalar - one
/// Frobenius inner product over all rows, columns and channels jointly - and
/// that same scalar is written into every channel of the output pixel. A
/// 3-channel kernel therefore does not produce three independent channel
/// results; it blends the channels into one number and replicates it.
///
/// The destination keeps the spatial size of the source. Pixels outside the
/// returned [`ValidRegion`] are left untouched.
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, C).
/// * `dst` - The destination image with shape (H, W, C), typically allocated
///   with a zero fill.
/// * `kernel` - The 3D correlation mask; its channel count must equal `C`.
/// * `rule` - How the kernel pivot is chosen per axis.
///
/// # Errors
///
/// Returns [`FilterError::ChannelCountMismatch`] when the kernel channel
/// count differs from `C` (nothing is written in that case), and size errors
/// when the kernel does not fit or `dst` has the wrong size.
pub fn correlate3d<const C: usize>(
    src: &Image<f32, C>,
    dst: &mut Image<f32, C>,
    kernel: &Kernel3d,
    rule: PivotRule,
) -> Result<ValidRegion, FilterError> {
    if kernel.channels() != C {
        return Err(FilterError::ChannelCountMismatch {
            kernel: kernel.channels(),
            image: C,
        });
    }
    if dst.size() != src.size() {
        return Err(FilterError::InvalidOutputSize(
            src.width(),
            src.height(),
            dst.width(),
            dst.height(),
        ));
    }

    let (height, width) = (src.height(), src.width());
    let (m, n) = (kernel.rows(), kernel.cols());
    if m > height || n > width {
        return Err(FilterError::KernelTooLarge(m, n, height, width));
    }

    let (pivot_row, pivot_col) = kernel.pivots(rule);
    let region = ValidRegion {
        top: pivot_row,
        left: pivot_col,
        bottom: (height - 1) - (m - 1 - pivot_row),
        right: (width - 1) - (n - 1 - pivot_col),
    };

    let src_data = src.as_slice();
    let dst_data = dst.as_slice_mut();

    for y in region.top..=region.bottom {
        for x in region.left..=region.right {
            let anchor = (y - pivot_row, x - pivot_col);
            let value = window_reduce3d(src_data, width, C, anchor, kernel);
            let pixel_offset = (y * width + x) * C;
            for ch in 0..C {
                dst_data[pixel_offset + ch] = value;
            }
        }
    }

    Ok(region)
}

#[cfg(test)]
mod tests {
    use super::*;
    use corrmask_image::{ImageError, ImageSize};

    fn interleaved_image<const C: usize>(
        width: usize,
        height: usize,
    ) -> Result<Image<f32, C>, ImageError> {
        Image::new(
            ImageSize { width, height },
            (0..width * height * C).map(|x| x as f32).collect(),
        )
    }

    #[test]
    fn channel_count_mismatch_is_an_error() -> Result<(), FilterError> {
        let src = interleaved_image::<2>(4, 4)?;
        let mut dst = Image::<f32, 2>::from_size_val(src.size(), 0.0)?;
        let kernel = Kernel3d::new([3, 3, 3], vec![1.0; 27])?;

        let res = correlate3d(&src, &mut dst, &kernel, PivotRule::RowParity);
        assert!(matches!(
            res,
            Err(FilterError::ChannelCountMismatch {
                kernel: 3,
                image: 2
            })
        ));
        // nothing was written
        assert!(dst.as_slice().iter().all(|&x| x == 0.0));
        Ok(())
    }

    #[test]
    fn collapse_then_broadcast() -> Result<(), FilterError> {
        let src = interleaved_image::<3>(5, 5)?;
        let mut dst = Image::<f32, 3>::from_size_val(src.size(), 0.0)?;

        // all-zero kernel except weight 1 at (0, 0, channel 0)
        let mut weights = vec![0.0; 3 * 3 * 3];
        weights[0] = 1.0;
        let kernel = Kernel3d::new([3, 3, 3], weights)?;

        let region = correlate3d(&src, &mut dst, &kernel, PivotRule::RowParity)?;
        assert_eq!(region, ValidRegion { top: 1, left: 1, bottom: 3, right: 3 });

        for y in region.top..=region.bottom {
            for x in region.left..=region.right {
                // pivot (1, 1): window top-left sits one pixel up and left
                let expected = *src.get([y - 1, x - 1, 0]).ok_or(FilterError::EmptyImage)?;
                for ch in 0..3 {
                    assert_eq!(dst.get([y, x, ch]), Some(&expected));
                }
            }
        }
        Ok(())
    }

    #[test]
    fn border_pixels_keep_fill_value() -> Result<(), FilterError> {
        let src = interleaved_image::<3>(4, 4)?;
        let mut dst = Image::<f32, 3>::from_size_val(src.size(), -1.0)?;
        let kernel = Kernel3d::new([3, 3, 3], vec![1.0; 27])?;

        let region = correlate3d(&src, &mut dst, &kernel, PivotRule::RowParity)?;

        for y in 0..4 {
            for x in 0..4 {
                for ch in 0..3 {
                    let v = *dst.get([y, x, ch]).ok_or(FilterError::EmptyImage)?;
                    if region.contains(y, x) {
                        assert_ne!(v, -1.0);
                    } else {
                        assert_eq!(v, -1.0);
                    }
                }
            }
        }
        Ok(())
    }

    #[test]
    fn even_rows_shift_region_under_row_parity() -> Result<(), FilterError> {
        let src = interleaved_image::<1>(5, 5)?;
        let mut dst = Image::<f32, 1>::from_size_val(src.size(), 0.0)?;

        // 2x3 kernel: even row count puts both pivots at the trailing cell
        let kernel = Kernel3d::new([2, 3, 1], vec![1.0; 6])?;
        let region = correlate3d(&src, &mut dst, &kernel, PivotRule::RowParity)?;
        assert_eq!(region, ValidRegion { top: 1, left: 2, bottom: 4, right: 4 });

        // same kernel under the per-axis rule centers the column pivot
        let region = correlate3d(&src, &mut dst, &kernel, PivotRule::PerAxis)?;
        assert_eq!(region, ValidRegion { top: 1, left: 1, bottom: 4, right: 3 });
        Ok(())
    }

    #[test]
    fn joint_reduction_blends_channels() -> Result<(), FilterError> {
        let src = Image::<f32, 2>::new(
            ImageSize {
                width: 1,
                height: 1,
            },
            vec![3.0, 4.0],
        )?;
        let mut dst = Image::<f32, 2>::from_size_val(src.size(), 0.0)?;
        let kernel = Kernel3d::new([1, 1, 2], vec![1.0, 1.0])?;

        correlate3d(&src, &mut dst, &kernel, PivotRule::RowParity)?;

        // both channels carry the blended sum, not per-channel results
        assert_eq!(dst.as_slice(), &[7.0, 7.0]);
        Ok(())
    }
}
