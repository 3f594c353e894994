//! Error type shared by every codec and path-level operation.

use thiserror::Error;

/// Boxed error returned by a completion hook.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Shape of a pixel grid as `(rows, columns, channels)`.
pub type Shape = (usize, usize, usize);

/// Errors that can occur while embedding or extracting a payload.
#[derive(Error, Debug)]
pub enum StegoError {
    #[error("Cover and secret images must have the same dimensions: cover {cover:?}, secret {secret:?}")]
    DimensionMismatch { cover: Shape, secret: Shape },

    #[error("Payload too large: need {needed}, capacity is {capacity}")]
    PayloadTooLarge { needed: usize, capacity: usize },

    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("Truncated payload: need {needed} samples, carrier has {available}")]
    TruncatedPayload { needed: usize, available: usize },

    #[error("Character {character:?} at position {position} is outside the 8-bit range")]
    UnsupportedCharacter { character: char, position: usize },

    #[error("Unsupported audio format: {0}")]
    UnsupportedFormat(String),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Audio error: {0}")]
    Audio(#[from] hound::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Completion hook failed: {0}")]
    Hook(#[source] BoxError),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StegoError>;
