use thiserror::Error;

use crate::common::types::AnyError;

/// Everything [`crate::audio::FrameEncoder`] can fail with.
#[derive(Debug, Error)]
pub enum EncoderError {
    /// The encoder was used after `close()`.
    #[error("encoder closed")]
    Closed,

    /// The codec runtime or the native encoder could not be created.
    #[error("unable to create opus encoder: {0}")]
    Initialization(#[source] AnyError),

    /// The native encoder rejected a frame.
    #[error("opus encode failed: {0}")]
    Codec(#[source] AnyError),

    /// The wrapped source did not produce a frame.
    #[error("frame source failed: {0}")]
    Source(#[source] AnyError),

    /// The wrapped source produced PCM that is not exactly one frame.
    #[error("expected a {expected} byte pcm frame, got {actual} bytes")]
    FrameSize { expected: usize, actual: usize },
}

pub type EncoderResult<T> = std::result::Result<T, EncoderError>;

/// Flatten a foreign error into an [`AnyError`] through its message.
pub fn map_boxed_err<E: std::fmt::Display>(e: E) -> AnyError {
    Box::new(std::io::Error::new(
        std::io::ErrorKind::Other,
        e.to_string(),
    ))
}
