#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use corrmask_tensor as tensor;

#[doc(inline)]
pub use corrmask_image as image;

#[doc(inline)]
pub use corrmask_imgproc as imgproc;

#[doc(inline)]
pub use corrmask_io as io;
