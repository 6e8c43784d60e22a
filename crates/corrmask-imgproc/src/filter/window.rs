use super::kernel::{Kernel2d, Kernel3d};

/// Reduce a single-channel window against a 2D kernel.
///
/// Computes the Frobenius inner product of the `rows x cols` window anchored
/// at `anchor` (top-left, in (row, col) order) with the kernel weights. The
/// source is a row-major single-channel plane with `src_cols` columns.
///
/// The caller is responsible for anchoring the window inside the plane; the
/// reduction itself carries no state and performs no region clipping.
pub fn window_reduce2d(
    src: &[f32],
    src_cols: usize,
    anchor: (usize, usize),
    kernel: &Kernel2d,
) -> f32 {
    let weights = kernel.as_slice();
    let n = kernel.cols();

    let mut sum = 0.0;
    for i in 0..kernel.rows() {
        let row_offset = (anchor.0 + i) * src_cols + anchor.1;
        for j in 0..n {
            sum += src[row_offset + j] * weights[i * n + j];
        }
    }
    sum
}

/// Reduce a cross-channel window against a 3D kernel.
///
/// Computes a single scalar: the Frobenius inner product over all rows,
/// columns and channels of the `rows x cols x channels` window anchored at
/// `anchor`. The source is a row-major interleaved (H, W, C) buffer with
/// `src_cols` columns and `src_channels` channels per pixel.
///
/// The kernel channel count must not exceed `src_channels`; callers enforce
/// equality before entering the scan loop.
pub fn window_reduce3d(
    src: &[f32],
    src_cols: usize,
    src_channels: usize,
    anchor: (usize, usize),
    kernel: &Kernel3d,
) -> f32 {
    let weights = kernel.as_slice();
    let n = kernel.cols();
    let c = kernel.channels();

    let mut sum = 0.0;
    for i in 0..kernel.rows() {
        for j in 0..n {
            let pixel_offset = ((anchor.0 + i) * src_cols + anchor.1 + j) * src_channels;
            let weight_offset = (i * n + j) * c;
            for ch in 0..c {
                sum += src[pixel_offset + ch] * weights[weight_offset + ch];
            }
        }
    }
    sum
}
