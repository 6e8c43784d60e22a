use std::path::PathBuf;

use argh::FromArgs;
use corrmask::image::Image;
use corrmask::imgproc::enhance::{abs_stretch_u8, clamp_u8};
use corrmask::imgproc::filter::{
    correlate2d_output_size, correlate2d_rgb, correlate3d, is_edge_pattern, is_edge_pattern3d,
    PivotRule,
};
use corrmask::io::filterfile::{read_filter_file, FilterFile};
use corrmask::io::functional as F;

#[derive(FromArgs)]
/// Apply a correlation mask from a filter file to an RGB image.
struct Args {
    /// path to the input image
    #[argh(positional)]
    image_path: PathBuf,

    /// path to the filter file
    #[argh(positional)]
    filter_path: PathBuf,

    /// path to save the filtered image (defaults to <input stem>_filtered.png)
    #[argh(option, short = 'o')]
    output: Option<PathBuf>,

    /// compute the kernel pivot per axis instead of from the row parity
    #[argh(switch)]
    per_axis_pivot: bool,
}

fn resolve_output_path(args: &Args) -> PathBuf {
    match &args.output {
        Some(path) => {
            let mut path = path.clone();
            // no extension defaults to png
            if path.extension().is_none() {
                path.set_extension("png");
            }
            path
        }
        None => {
            let stem = args
                .image_path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "output".into());
            args.image_path
                .with_file_name(format!("{stem}_filtered.png"))
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Args = argh::from_env();
    let output_path = resolve_output_path(&args);

    // read the image as raw byte channels and lift to float
    let image = F::read_image_any_rgb8(&args.image_path)?;
    log::info!(
        "Image loaded: {} ({}x{})",
        args.image_path.display(),
        image.height(),
        image.width()
    );
    let image_f32 = image.cast::<f32>()?;

    let pivot_rule = if args.per_axis_pivot {
        PivotRule::PerAxis
    } else {
        PivotRule::RowParity
    };

    let (result, edge_like) = match read_filter_file(&args.filter_path)? {
        FilterFile::TwoD(filter) => {
            log::info!(
                "Applying a {}x{} mask to each channel independently",
                filter.kernel.rows(),
                filter.kernel.cols()
            );
            let out_size =
                correlate2d_output_size(image_f32.size(), &filter.kernel, filter.config.stride)?;
            let mut dst = Image::<f32, 3>::from_size_val(out_size, 0.0)?;
            correlate2d_rgb(&image_f32, &mut dst, &filter.kernel, &filter.config)?;
            (dst, is_edge_pattern(&filter.kernel))
        }
        FilterFile::ThreeD(kernel) => {
            log::info!(
                "Applying a {}x{}x{} mask across all channels",
                kernel.rows(),
                kernel.cols(),
                kernel.channels()
            );
            let mut dst = Image::<f32, 3>::from_size_val(image_f32.size(), 0.0)?;
            let region = correlate3d(&image_f32, &mut dst, &kernel, pivot_rule)?;
            log::debug!(
                "Computed rows {}..={}, cols {}..={}",
                region.top,
                region.bottom,
                region.left,
                region.right
            );
            (dst, is_edge_pattern3d(&kernel))
        }
    };

    let mut out = Image::<u8, 3>::from_size_val(result.size(), 0)?;
    if edge_like {
        log::info!("Mask detected as edge-like, stretching the absolute response");
        abs_stretch_u8(&result, &mut out)?;
    } else {
        clamp_u8(&result, &mut out)?;
    }

    F::write_image_png_rgb8(&output_path, &out)?;
    log::info!("Filtered image saved at: {}", output_path.display());

    Ok(())
}
