use std::path::Path;

use corrmask_imgproc::filter::{Activation, FilterConfig, Kernel2d, Kernel3d};

use crate::error::IoError;

/// A 2D correlation mask together with its run configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct Filter2d {
    /// The correlation mask.
    pub kernel: Kernel2d,
    /// Offset, stride and activation parsed from the trailer lines.
    pub config: FilterConfig,
}

/// A parsed filter file, discriminated by its header.
///
/// A two-token header `m n` introduces a 2D mask with optional trailers; a
/// three-token header `m n c` introduces a 3D mask laid out as `c` stacked
/// blocks of `m` rows by `n` values.
#[derive(Clone, Debug, PartialEq)]
pub enum FilterFile {
    /// A per-channel 2D mask with offset/stride/activation.
    TwoD(Filter2d),
    /// A cross-channel 3D mask.
    ThreeD(Kernel3d),
}

/// Read and parse a filter file from disk.
///
/// # Errors
///
/// Returns [`IoError::FileDoesNotExist`] when the path is missing, io
/// errors from reading, and parse errors from [`parse_filter_file`].
pub fn read_filter_file(file_path: impl AsRef<Path>) -> Result<FilterFile, IoError> {
    let file_path = file_path.as_ref();
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    let text = std::fs::read_to_string(file_path)?;
    parse_filter_file(&text)
}

/// Parse the text form of a filter file.
///
/// 2D format: first line `m n`, then `m` lines of `n` whitespace-separated
/// values, then optional trailer lines `OFFSET <int>`, `STRIDE <int>` and
/// `ACTIVATION <token>` in any order with case-insensitive keys. 3D format:
/// first line `m n c`, then `c` blocks of `m` rows by `n` values; blank
/// lines between blocks are ignored, and the reshaped kernel holds at cell
/// `(i, j)` the `c` block values in block order.
pub fn parse_filter_file(text: &str) -> Result<FilterFile, IoError> {
    // keep original line numbers for error reporting, drop blank lines
    let lines: Vec<(usize, &str)> = text
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .collect();

    let (header_line, header) = match lines.first() {
        Some(&(num, line)) => (num, line),
        None => {
            return Err(IoError::InvalidFilterHeader {
                line: 1,
                message: "file is empty".into(),
            })
        }
    };

    let dims = header
        .split_whitespace()
        .map(|token| {
            token
                .parse::<usize>()
                .map_err(|_| IoError::InvalidFilterValue {
                    line: header_line,
                    token: token.to_string(),
                })
        })
        .collect::<Result<Vec<usize>, IoError>>()?;

    match dims.as_slice() {
        [m, n] => parse_filter2d(*m, *n, &lines[1..]).map(FilterFile::TwoD),
        [m, n, c] => parse_kernel3d(*m, *n, *c, &lines[1..]).map(FilterFile::ThreeD),
        _ => Err(IoError::InvalidFilterHeader {
            line: header_line,
            message: format!("expected 2 or 3 dimensions, found {}", dims.len()),
        }),
    }
}

fn parse_row(line_num: usize, line: &str, expected: usize) -> Result<Vec<f32>, IoError> {
    let values = line
        .split_whitespace()
        .map(|token| {
            token
                .parse::<f32>()
                .map_err(|_| IoError::InvalidFilterValue {
                    line: line_num,
                    token: token.to_string(),
                })
        })
        .collect::<Result<Vec<f32>, IoError>>()?;

    if values.len() != expected {
        return Err(IoError::InvalidFilterRow {
            line: line_num,
            expected,
            found: values.len(),
        });
    }
    Ok(values)
}

fn parse_filter2d(m: usize, n: usize, lines: &[(usize, &str)]) -> Result<Filter2d, IoError> {
    if lines.len() < m {
        return Err(IoError::TruncatedFilter {
            expected: m,
            found: lines.len(),
        });
    }

    let mut weights = Vec::with_capacity(m * n);
    for &(line_num, line) in &lines[..m] {
        weights.extend(parse_row(line_num, line, n)?);
    }
    let kernel = Kernel2d::new([m, n], weights)?;

    let mut config = FilterConfig::default();
    for &(line_num, line) in &lines[m..] {
        let parts: Vec<&str> = line.split_whitespace().collect();
        // trailer lines need a key and a value; anything else is ignored
        if parts.len() < 2 {
            continue;
        }
        match parts[0].to_ascii_uppercase().as_str() {
            "OFFSET" => {
                config.offset = parts[1]
                    .parse::<f32>()
                    .map_err(|_| IoError::InvalidFilterValue {
                        line: line_num,
                        token: parts[1].to_string(),
                    })?;
            }
            "STRIDE" => {
                config.stride = parts[1]
                    .parse::<usize>()
                    .map_err(|_| IoError::InvalidFilterValue {
                        line: line_num,
                        token: parts[1].to_string(),
                    })?;
            }
            "ACTIVATION" => match parts[1].to_ascii_uppercase().as_str() {
                "RELU" => config.activation = Some(Activation::Relu),
                "NONE" => config.activation = None,
                other => return Err(IoError::UnknownActivation(other.to_string())),
            },
            _ => {}
        }
    }

    Ok(Filter2d { kernel, config })
}

fn parse_kernel3d(
    m: usize,
    n: usize,
    c: usize,
    lines: &[(usize, &str)],
) -> Result<Kernel3d, IoError> {
    if lines.len() < c * m {
        return Err(IoError::TruncatedFilter {
            expected: c * m,
            found: lines.len(),
        });
    }

    // read c stacked blocks of m rows each
    let mut blocks = Vec::with_capacity(c);
    for block in 0..c {
        let mut rows = Vec::with_capacity(m);
        for &(line_num, line) in &lines[block * m..(block + 1) * m] {
            rows.push(parse_row(line_num, line, n)?);
        }
        blocks.push(rows);
    }

    // reshape so cell (i, j) holds the c block values in block order
    let mut weights = Vec::with_capacity(m * n * c);
    for i in 0..m {
        for j in 0..n {
            for row_block in blocks.iter() {
                weights.push(row_block[i][j]);
            }
        }
    }

    Ok(Kernel3d::new([m, n, c], weights)?)
}
