/// Sign-pattern classification of edge-detection kernels.
mod classify;
/// Single-channel 2D correlation with stride, offset and activation.
mod correlate;
/// Cross-channel 3D correlation with collapse-then-broadcast semantics.
mod correlate3d;
/// Kernel containers and pivot arithmetic.
mod kernel;
/// Windowed Frobenius inner products.
mod window;

pub use classify::{is_edge_pattern, is_edge_pattern3d};
pub use correlate::{
    correlate2d, correlate2d_output_size, correlate2d_rgb, Activation, FilterConfig,
};
pub use correlate3d::{correlate3d, ValidRegion};
pub use kernel::{Kernel2d, Kernel3d, PivotRule};
pub use window::{window_reduce2d, window_reduce3d};
