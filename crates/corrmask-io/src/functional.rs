use std::fs::File;
use std::path::Path;

use corrmask_image::{Image, ImageSize};
use png::{BitDepth, ColorType, Encoder};

use crate::error::IoError;

/// Reads an image in any supported format as RGB8.
///
/// The format is guessed from the file content; grayscale and alpha inputs
/// are converted to three channels.
///
/// # Arguments
///
/// * `file_path` - The path to the image file.
///
/// # Returns
///
/// An RGB image with three channels.
pub fn read_image_any_rgb8(file_path: impl AsRef<Path>) -> Result<Image<u8, 3>, IoError> {
    let file_path = file_path.as_ref();

    // verify the file exists
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    let img = image::ImageReader::open(file_path)?
        .with_guessed_format()?
        .decode()?;

    let size = ImageSize {
        width: img.width() as usize,
        height: img.height() as usize,
    };

    let data = img.to_rgb8().into_raw();
    Ok(Image::new(size, data)?)
}

/// Writes the given PNG _(rgb8)_ data to the given file path.
///
/// # Arguments
///
/// * `file_path` - The path to the PNG image.
/// * `image` - The image containing the pixel data.
pub fn write_image_png_rgb8(
    file_path: impl AsRef<Path>,
    image: &Image<u8, 3>,
) -> Result<(), IoError> {
    write_png_impl(
        file_path,
        image.as_slice(),
        image.size(),
        BitDepth::Eight,
        ColorType::Rgb,
    )
}

/// Writes the given PNG _(grayscale 8-bit)_ data to the given file path.
///
/// # Arguments
///
/// * `file_path` - The path to the PNG image.
/// * `image` - The image containing the pixel data.
pub fn write_image_png_gray8(
    file_path: impl AsRef<Path>,
    image: &Image<u8, 1>,
) -> Result<(), IoError> {
    write_png_impl(
        file_path,
        image.as_slice(),
        image.size(),
        BitDepth::Eight,
        ColorType::Grayscale,
    )
}

fn write_png_impl(
    file_path: impl AsRef<Path>,
    image_data: &[u8],
    image_size: ImageSize,
    depth: BitDepth,
    color_type: ColorType,
) -> Result<(), IoError> {
    let file = File::create(file_path)?;

    let mut encoder = Encoder::new(file, image_size.width as u32, image_size.height as u32);
    encoder.set_color(color_type);
    encoder.set_depth(depth);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::PngEncodingError(e.to_string()))?;
    writer
        .write_image_data(image_data)
        .map_err(|e| IoError::PngEncodingError(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_and_read_roundtrip() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("out.png");

        let image = Image::<u8, 3>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![
                255, 0, 0, 0, 255, 0, //
                0, 0, 255, 128, 128, 128,
            ],
        )?;

        write_image_png_rgb8(&path, &image)?;
        let read_back = read_image_any_rgb8(&path)?;

        assert_eq!(read_back.size(), image.size());
        assert_eq!(read_back.as_slice(), image.as_slice());
        Ok(())
    }

    #[test]
    fn missing_file_is_an_error() {
        let res = read_image_any_rgb8("/definitely/not/here.png");
        assert!(matches!(res, Err(IoError::FileDoesNotExist(_))));
    }
}
