use crate::{common::types::AnyResult, configs::EncoderSettings};

/// The native codec primitives a [`crate::audio::FrameEncoder`] drives.
///
/// A backend owns no per-encoder state itself; everything that belongs to a
/// single encoder lives in its [`CodecBackend::Handle`].
pub trait CodecBackend: Send + Sync {
    /// Opaque encoder instance.
    type Handle: Send;

    /// Make the codec runtime resident. Called before every `create`; must be
    /// cheap after the first success.
    fn load(&self) -> AnyResult<()>;

    /// Create an encoder for 48 kHz interleaved stereo.
    fn create(&self, settings: &EncoderSettings) -> AnyResult<Self::Handle>;

    /// Encode `frame_size` samples per channel from `pcm` into `out`.
    /// Returns the number of bytes written from the start of `out`.
    fn encode(
        &self,
        handle: &mut Self::Handle,
        pcm: &[i16],
        frame_size: usize,
        out: &mut [u8],
    ) -> AnyResult<usize>;

    /// Release the encoder. Infallible at this layer; implementations log
    /// anything that goes wrong.
    fn destroy(&self, handle: Self::Handle);
}
