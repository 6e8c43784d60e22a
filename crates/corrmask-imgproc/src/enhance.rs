use corrmask_image::Image;

use crate::error::FilterError;

/// Find the minimum and maximum values in a slice of samples.
///
/// # Errors
///
/// Returns [`FilterError::EmptyImage`] when the slice holds no samples.
pub fn find_min_max(data: &[f32]) -> Result<(f32, f32), FilterError> {
    let first = match data.first() {
        Some(x) => *x,
        None => return Err(FilterError::EmptyImage),
    };

    let mut min = first;
    let mut max = first;
    for &x in data {
        if x < min {
            min = x;
        }
        if x > max {
            max = x;
        }
    }

    Ok((min, max))
}

fn stretch_into(src: &[f32], dst: &mut [u8]) -> Result<(), FilterError> {
    let (min, max) = find_min_max_abs(src)?;

    // flat input maps to zero, never to 255
    if max == min {
        dst.fill(0);
        return Ok(());
    }

    let scale = 255.0 / (max - min);
    for (out, &x) in dst.iter_mut().zip(src.iter()) {
        *out = ((x.abs() - min) * scale) as u8;
    }
    Ok(())
}

fn find_min_max_abs(data: &[f32]) -> Result<(f32, f32), FilterError> {
    let first = match data.first() {
        Some(x) => x.abs(),
        None => return Err(FilterError::EmptyImage),
    };

    let mut min = first;
    let mut max = first;
    for &x in data {
        let x = x.abs();
        if x < min {
            min = x;
        }
        if x > max {
            max = x;
        }
    }

    Ok((min, max))
}

/// Take the absolute value and stretch the histogram to the byte range.
///
/// The minimum and maximum are computed once over the whole array, so all
/// channels share the same rescaling. Values map linearly to `[0, 255]` and
/// are truncated to `u8`. A flat array (max equals min) maps to all-zero
/// output as a deterministic fallback for the degenerate division.
///
/// # Errors
///
/// Returns an error when the images differ in size or hold no pixels.
pub fn abs_stretch_u8<const C: usize>(
    src: &Image<f32, C>,
    dst: &mut Image<u8, C>,
) -> Result<(), FilterError> {
    if src.size() != dst.size() {
        return Err(FilterError::InvalidOutputSize(
            src.width(),
            src.height(),
            dst.width(),
            dst.height(),
        ));
    }

    stretch_into(src.as_slice(), dst.as_slice_mut())
}

/// Take the absolute value and stretch each channel independently.
///
/// Same transform as [`abs_stretch_u8`] but the minimum and maximum are
/// computed per channel, so a dominant channel cannot compress the others.
///
/// # Errors
///
/// Returns an error when the images differ in size or hold no pixels.
pub fn abs_stretch_u8_per_channel<const C: usize>(
    src: &Image<f32, C>,
    dst: &mut Image<u8, C>,
) -> Result<(), FilterError> {
    if src.size() != dst.size() {
        return Err(FilterError::InvalidOutputSize(
            src.width(),
            src.height(),
            dst.width(),
            dst.height(),
        ));
    }

    for c in 0..C {
        let channel: Vec<f32> = src.as_slice().iter().skip(c).step_by(C).copied().collect();
        let mut stretched = vec![0u8; channel.len()];
        stretch_into(&channel, &mut stretched)?;
        for (out, v) in dst
            .as_slice_mut()
            .iter_mut()
            .skip(c)
            .step_by(C)
            .zip(stretched)
        {
            *out = v;
        }
    }
    Ok(())
}

/// Clamp raw correlation values into the byte range.
///
/// Each value is rounded and clamped to `[0, 255]` before the cast. This is
/// the direct output path for kernels that do not classify as edge
/// detectors.
///
/// # Errors
///
/// Returns an error when the images differ in size.
pub fn clamp_u8<const C: usize>(
    src: &Image<f32, C>,
    dst: &mut Image<u8, C>,
) -> Result<(), FilterError> {
    if src.size() != dst.size() {
        return Err(FilterError::InvalidOutputSize(
            src.width(),
            src.height(),
            dst.width(),
            dst.height(),
        ));
    }

    for (out, &x) in dst.as_slice_mut().iter_mut().zip(src.as_slice().iter()) {
        *out = x.round().clamp(0.0, 255.0) as u8;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use corrmask_image::ImageSize;

    #[test]
    fn min_max_over_samples() -> Result<(), FilterError> {
        let (min, max) = find_min_max(&[3.0, -7.0, 2.0, 5.0])?;
        assert_eq!(min, -7.0);
        assert_eq!(max, 5.0);
        Ok(())
    }

    #[test]
    fn min_max_empty_is_an_error() {
        assert!(matches!(find_min_max(&[]), Err(FilterError::EmptyImage)));
    }

    #[test]
    fn stretch_spans_full_byte_range() -> Result<(), FilterError> {
        let src = Image::<f32, 1>::new(
            ImageSize {
                width: 3,
                height: 1,
            },
            vec![-100.0, 0.0, 50.0],
        )?;
        let mut dst = Image::<u8, 1>::from_size_val(src.size(), 0)?;

        abs_stretch_u8(&src, &mut dst)?;

        // |x| in [0, 100] stretches to [0, 255]
        assert_eq!(dst.as_slice(), &[255, 0, 127]);
        Ok(())
    }

    #[test]
    fn flat_array_maps_to_zero() -> Result<(), FilterError> {
        let src = Image::<f32, 1>::new(
            ImageSize {
                width: 4,
                height: 1,
            },
            vec![5.0; 4],
        )?;
        let mut dst = Image::<u8, 1>::from_size_val(src.size(), 42)?;

        abs_stretch_u8(&src, &mut dst)?;

        assert_eq!(dst.as_slice(), &[0, 0, 0, 0]);
        Ok(())
    }

    #[test]
    fn per_channel_stretch_is_independent() -> Result<(), FilterError> {
        // channel 0 spans [0, 10], channel 1 is flat
        let src = Image::<f32, 2>::new(
            ImageSize {
                width: 2,
                height: 1,
            },
            vec![0.0, 3.0, 10.0, 3.0],
        )?;
        let mut dst = Image::<u8, 2>::from_size_val(src.size(), 42)?;

        abs_stretch_u8_per_channel(&src, &mut dst)?;

        assert_eq!(dst.as_slice(), &[0, 0, 255, 0]);
        Ok(())
    }

    #[test]
    fn whole_array_stretch_shares_min_max() -> Result<(), FilterError> {
        let src = Image::<f32, 2>::new(
            ImageSize {
                width: 2,
                height: 1,
            },
            vec![0.0, 3.0, 10.0, 3.0],
        )?;
        let mut dst = Image::<u8, 2>::from_size_val(src.size(), 0)?;

        abs_stretch_u8(&src, &mut dst)?;

        // min 0, max 10 over all channels
        assert_eq!(dst.as_slice(), &[0, 76, 255, 76]);
        Ok(())
    }

    #[test]
    fn clamp_rounds_and_saturates() -> Result<(), FilterError> {
        let src = Image::<f32, 1>::new(
            ImageSize {
                width: 4,
                height: 1,
            },
            vec![-20.0, 0.4, 128.6, 300.0],
        )?;
        let mut dst = Image::<u8, 1>::from_size_val(src.size(), 0)?;

        clamp_u8(&src, &mut dst)?;

        assert_eq!(dst.as_slice(), &[0, 0, 129, 255]);
        Ok(())
    }
}
