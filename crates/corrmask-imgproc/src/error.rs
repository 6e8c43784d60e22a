/// An error type for the correlation engine.
#[derive(thiserror::Error, Debug)]
pub enum FilterError {
    /// Error when the kernel does not fit inside the image.
    #[error("Kernel size ({0}x{1}) exceeds the image size ({2}x{3})")]
    KernelTooLarge(usize, usize, usize, usize),

    /// Error when a kernel is constructed with a zero-sized dimension.
    #[error("Kernel dimensions must be at least 1x1, got {0}x{1}")]
    EmptyKernel(usize, usize),

    /// Error when a 3D kernel and the image disagree on the channel count.
    #[error("Kernel has {kernel} channel planes but the image has {image} channels")]
    ChannelCountMismatch {
        /// Number of channel planes in the kernel.
        kernel: usize,
        /// Number of channels in the image.
        image: usize,
    },

    /// Error when the stride is not a positive step.
    #[error("Stride must be >= 1, got {0}")]
    InvalidStride(usize),

    /// Error when the destination image has the wrong size for the operation.
    #[error("Output size mismatch: expected {0}x{1}, got {2}x{3}")]
    InvalidOutputSize(usize, usize, usize, usize),

    /// Error when an operation receives an image without pixels.
    #[error("Image contains no pixels")]
    EmptyImage,

    /// Error coming from the image module.
    #[error(transparent)]
    Image(#[from] corrmask_image::ImageError),

    /// Error coming from the tensor module.
    #[error(transparent)]
    Tensor(#[from] corrmask_tensor::TensorError),
}
