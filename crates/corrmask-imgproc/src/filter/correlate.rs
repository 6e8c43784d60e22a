use corrmask_image::{Image, ImageSize};

use super::kernel::Kernel2d;
use super::window::window_reduce2d;
use crate::error::FilterError;

/// Non-linear clamp applied after the offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activation {
    /// Clamp negative results to zero.
    Relu,
}

/// Configuration of a 2D correlation pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FilterConfig {
    /// Additive bias applied after the weighted sum.
    pub offset: f32,
    /// Step size between consecutive window anchors.
    pub stride: usize,
    /// Optional clamp applied after the offset.
    pub activation: Option<Activation>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            offset: 0.0,
            stride: 1,
            activation: None,
        }
    }
}

/// Compute the output size of a valid-only 2D correlation.
///
/// The output shape follows `out = (in - kernel) / stride + 1` with floor
/// division on both axes. No padding is applied, so the output shrinks
/// whenever the kernel is larger than 1x1 or the stride exceeds 1.
///
/// # Errors
///
/// Returns an error when the stride is zero or the kernel does not fit
/// inside the image.
pub fn correlate2d_output_size(
    src: ImageSize,
    kernel: &Kernel2d,
    stride: usize,
) -> Result<ImageSize, FilterError> {
    if stride < 1 {
        return Err(FilterError::InvalidStride(stride));
    }
    if kernel.rows() > src.height || kernel.cols() > src.width {
        return Err(FilterError::KernelTooLarge(
            kernel.rows(),
            kernel.cols(),
            src.height,
            src.width,
        ));
    }
    Ok(ImageSize {
        width: (src.width - kernel.cols()) / stride + 1,
        height: (src.height - kernel.rows()) / stride + 1,
    })
}

/// Apply a 2D correlation mask to a single channel.
///
/// For each output cell `(oi, oj)` the window anchored at
/// `(oi * stride, oj * stride)` is reduced against the kernel, the offset is
/// added, and the optional activation clamp is applied. Regions where the
/// kernel would overhang the channel are never visited.
///
/// # Arguments
///
/// * `src` - The source channel with shape (H, W).
/// * `dst` - The destination channel, preallocated to the valid output size
///   (see [`correlate2d_output_size`]).
/// * `kernel` - The correlation mask.
/// * `config` - Offset, stride and activation.
///
/// # Errors
///
/// Returns an error when the stride is zero, the kernel exceeds the channel
/// size or `dst` was not allocated to the valid output size.
pub fn correlate2d(
    src: &Image<f32, 1>,
    dst: &mut Image<f32, 1>,
    kernel: &Kernel2d,
    config: &FilterConfig,
) -> Result<(), FilterError> {
    let out_size = correlate2d_output_size(src.size(), kernel, config.stride)?;
    if dst.size() != out_size {
        return Err(FilterError::InvalidOutputSize(
            out_size.width,
            out_size.height,
            dst.width(),
            dst.height(),
        ));
    }

    let src_cols = src.cols();
    let src_data = src.as_slice();
    let dst_data = dst.as_slice_mut();

    for oi in 0..out_size.height {
        for oj in 0..out_size.width {
            let anchor = (oi * config.stride, oj * config.stride);
            let mut value = window_reduce2d(src_data, src_cols, anchor, kernel) + config.offset;
            if let Some(Activation::Relu) = config.activation {
                value = value.max(0.0);
            }
            dst_data[oi * out_size.width + oj] = value;
        }
    }

    Ok(())
}

/// Apply the same 2D correlation mask independently to each RGB channel.
///
/// The three channels never mix: the result is bitwise identical to calling
/// [`correlate2d`] three times with the same kernel and configuration.
///
/// # Errors
///
/// Same failure conditions as [`correlate2d`].
pub fn correlate2d_rgb(
    src: &Image<f32, 3>,
    dst: &mut Image<f32, 3>,
    kernel: &Kernel2d,
    config: &FilterConfig,
) -> Result<(), FilterError> {
    let out_size = correlate2d_output_size(src.size(), kernel, config.stride)?;
    if dst.size() != out_size {
        return Err(FilterError::InvalidOutputSize(
            out_size.width,
            out_size.height,
            dst.width(),
            dst.height(),
        ));
    }

    let channels = src.split_channels()?;
    let mut out_channels = Vec::with_capacity(channels.len());
    for channel in &channels {
        let mut out = Image::<f32, 1>::from_size_val(out_size, 0.0)?;
        correlate2d(channel, &mut out, kernel, config)?;
        out_channels.push(out);
    }

    let merged = Image::<f32, 3>::from_channels(&out_channels)?;
    dst.as_slice_mut().copy_from_slice(merged.as_slice());

    Ok(())
}
