use thiserror::Error;

/// Errors raised while turning uploaded bytes into an [`crate::ImageArray`].
#[derive(Debug, Error)]
pub enum MixevalError {
    /// Reading the image from disk failed.
    #[error("failed to read image: {0}")]
    Io(#[from] std::io::Error),

    /// The bytes are not a PNG or JPEG image the decoder understands.
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    /// The pixel buffer does not match the declared dimensions.
    #[error("image buffer holds {actual} values, expected {expected}")]
    Shape { expected: usize, actual: usize },
}
