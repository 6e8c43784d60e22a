/// An error type for the io module.
#[derive(thiserror::Error, Debug)]
pub enum IoError {
    /// Error when the file does not exist.
    #[error("File does not exist: {0}")]
    FileDoesNotExist(std::path::PathBuf),

    /// Error to open or read the file.
    #[error("Failed to manipulate the file. {0}")]
    FileError(#[from] std::io::Error),

    /// Error to decode the image.
    #[error("Failed to decode the image. {0}")]
    ImageDecodeError(#[from] image::ImageError),

    /// Error to encode the PNG image.
    #[error("Failed to encode the png image. {0}")]
    PngEncodingError(String),

    /// Error to create the image.
    #[error("Failed to create image. {0}")]
    ImageCreationError(#[from] corrmask_image::ImageError),

    /// Error to construct a kernel from parsed values.
    #[error("Failed to build the kernel. {0}")]
    KernelError(#[from] corrmask_imgproc::FilterError),

    /// Error when the filter-file header is malformed.
    #[error("Invalid filter header at line {line}: {message}")]
    InvalidFilterHeader {
        /// One-based line number of the header.
        line: usize,
        /// What went wrong.
        message: String,
    },

    /// Error when a filter-file token is not numeric.
    #[error("Invalid numeric value '{token}' at line {line}")]
    InvalidFilterValue {
        /// One-based line number of the token.
        line: usize,
        /// The offending token.
        token: String,
    },

    /// Error when a filter-file row has the wrong number of values.
    #[error("Expected {expected} values at line {line}, found {found}")]
    InvalidFilterRow {
        /// One-based line number of the row.
        line: usize,
        /// Expected value count.
        expected: usize,
        /// Actual value count.
        found: usize,
    },

    /// Error when the filter file ends before all rows were read.
    #[error("Filter file ended early: expected {expected} data rows, found {found}")]
    TruncatedFilter {
        /// Expected row count.
        expected: usize,
        /// Actual row count.
        found: usize,
    },

    /// Error when an activation token is not recognized.
    #[error("Unknown activation '{0}'")]
    UnknownActivation(String),
}
