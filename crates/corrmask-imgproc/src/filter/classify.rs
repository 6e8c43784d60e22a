use super::kernel::{Kernel2d, Kernel3d};

/// Check whether a 2D kernel carries an edge-detection sign pattern.
///
/// A kernel matches the horizontal pattern when no cell above the middle
/// row (`row < m/2`, integer division) is positive and no cell below it
/// (`row > m/2`) is negative; cells on the middle row are unconstrained.
/// The vertical pattern applies the same logic to the column index against
/// `n/2`. The result is the OR of both tests.
///
/// Only a found sign contradiction disqualifies an axis, so a kernel whose
/// constrained bands hold zeros passes; in particular an all-zero kernel
/// classifies as edge-like under both tests. The check is a structural
/// heuristic over the sign transition, not a lookup of known Sobel
/// coefficients, and it admits false positives.
///
/// Every cell is scanned on both axes without early exit; a single
/// contradiction anywhere disqualifies that axis.
pub fn is_edge_pattern(kernel: &Kernel2d) -> bool {
    let (m, n) = (kernel.rows(), kernel.cols());

    let mut horizontal = true;
    let mut vertical = true;
    for i in 0..m {
        for j in 0..n {
            let value = kernel.weight(i, j);
            if i < m / 2 && value > 0.0 {
                horizontal = false;
            } else if i > m / 2 && value < 0.0 {
                horizontal = false;
            }
            if j < n / 2 && value > 0.0 {
                vertical = false;
            } else if j > n / 2 && value < 0.0 {
                vertical = false;
            }
        }
    }

    horizontal || vertical
}

/// Check whether a 3D kernel carries an edge-detection sign pattern.
///
/// The same test as [`is_edge_pattern`], applied identically across all
/// channel planes: every plane cell participates in the row and column
/// constraints of its spatial position.
pub fn is_edge_pattern3d(kernel: &Kernel3d) -> bool {
    let (m, n, c) = (kernel.rows(), kernel.cols(), kernel.channels());

    let mut horizontal = true;
    let mut vertical = true;
    for i in 0..m {
        for j in 0..n {
            for k in 0..c {
                let value = kernel.weight(i, j, k);
                if i < m / 2 && value > 0.0 {
                    horizontal = false;
                } else if i > m / 2 && value < 0.0 {
                    horizontal = false;
                }
                if j < n / 2 && value > 0.0 {
                    vertical = false;
                } else if j > n / 2 && value < 0.0 {
                    vertical = false;
                }
            }
        }
    }

    horizontal || vertical
}
