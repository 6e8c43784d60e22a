use corrmask_image::{Image, ImageError};

/// Define the RGB weights for the luma conversion (YIQ Y band).
const RW: f32 = 0.299;
const GW: f32 = 0.587;
const BW: f32 = 0.114;

/// Convert an RGB image to grayscale by replicating the G band into R and B.
///
/// # Arguments
///
/// * `src` - The input RGB image.
/// * `dst` - The output image, green value replicated across all channels.
///
/// Precondition: the input and output images must have the same size.
pub fn gray_from_green(src: &Image<f32, 3>, dst: &mut Image<f32, 3>) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    for (src_pixel, dst_pixel) in src
        .as_slice()
        .chunks_exact(3)
        .zip(dst.as_slice_mut().chunks_exact_mut(3))
    {
        let g = src_pixel[1];
        dst_pixel[0] = g;
        dst_pixel[1] = g;
        dst_pixel[2] = g;
    }

    Ok(())
}

/// Convert an RGB image to grayscale by replicating the YIQ Y band.
///
/// Computes `Y = 0.299 * R + 0.587 * G + 0.114 * B` and writes it into all
/// three output channels.
///
/// # Arguments
///
/// * `src` - The input RGB image.
/// * `dst` - The output image, luma replicated across all channels.
///
/// Precondition: the input and output images must have the same size.
pub fn gray_from_luma(src: &Image<f32, 3>, dst: &mut Image<f32, 3>) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    for (src_pixel, dst_pixel) in src
        .as_slice()
        .chunks_exact(3)
        .zip(dst.as_slice_mut().chunks_exact_mut(3))
    {
        let y = RW * src_pixel[0] + GW * src_pixel[1] + BW * src_pixel[2];
        dst_pixel[0] = y;
        dst_pixel[1] = y;
        dst_pixel[2] = y;
    }

    Ok(())
}
