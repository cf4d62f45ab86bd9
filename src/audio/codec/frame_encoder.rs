//! `codec/frame_encoder.rs` — wraps a [`FrameSource`] so every frame it hands
//! out is Opus.
//!
//! Opus sources pass straight through.  PCM sources are encoded one 20 ms
//! frame at a time; the native encoder and both staging buffers are created on
//! the first PCM frame and kept until [`FrameEncoder::close`].
//!
//! ```text
//! Uninitialized ──first PCM provide()──▶ Ready
//!       │                                  │
//!       └──────────── close() ─────────────┴──▶ Closed
//! ```

use byteorder::{ByteOrder, NativeEndian};
use bytes::{Bytes, BytesMut};
use parking_lot::Mutex;
use tracing::{debug, trace, warn};

use super::{CodecBackend, Libopus};
use crate::{
    audio::{
        constants::{
            FRAME_SIZE_SAMPLES, MAXIMUM_INPUT_BUFFER_SIZE, MAXIMUM_OUTPUT_BUFFER_SIZE,
            OPUS_FRAME_SIZE,
        },
        format::INPUT_FORMAT,
        source::FrameSource,
    },
    common::{
        errors::{EncoderError, EncoderResult},
        types::AnyResult,
    },
    configs::EncoderSettings,
};

/// Native handle plus the two staging buffers that share its lifetime.
struct ActiveCodec<H> {
    handle: H,
    /// One frame of interleaved i16 samples.
    input: Vec<i16>,
    /// Worst-case encoded frame. Handed out with `split_to` and reclaimed on
    /// the next call once the caller has dropped the previous frame.
    output: BytesMut,
}

impl<H> ActiveCodec<H> {
    fn new(handle: H) -> Self {
        Self {
            handle,
            input: vec![0; FRAME_SIZE_SAMPLES],
            output: BytesMut::with_capacity(MAXIMUM_OUTPUT_BUFFER_SIZE),
        }
    }

    fn encode<B>(&mut self, backend: &B, pcm: &[u8]) -> EncoderResult<Bytes>
    where
        B: CodecBackend<Handle = H>,
    {
        if pcm.len() != MAXIMUM_INPUT_BUFFER_SIZE {
            return Err(EncoderError::FrameSize {
                expected: MAXIMUM_INPUT_BUFFER_SIZE,
                actual: pcm.len(),
            });
        }
        NativeEndian::read_i16_into(pcm, &mut self.input);

        self.output.clear();
        self.output.resize(MAXIMUM_OUTPUT_BUFFER_SIZE, 0);

        let written = backend
            .encode(
                &mut self.handle,
                &self.input,
                OPUS_FRAME_SIZE,
                &mut self.output[..],
            )
            .map_err(|e| {
                warn!("opus encode failed: {}", e);
                EncoderError::Codec(e)
            })?;

        if written > MAXIMUM_OUTPUT_BUFFER_SIZE {
            return Err(EncoderError::Codec(
                format!(
                    "codec reported {} bytes for a {} byte buffer",
                    written, MAXIMUM_OUTPUT_BUFFER_SIZE
                )
                .into(),
            ));
        }

        trace!(
            "encoded {} ms of pcm into {} opus bytes",
            INPUT_FORMAT.duration_ms(pcm.len()),
            written
        );
        Ok(self.output.split_to(written).freeze())
    }
}

struct EncoderState<S, H> {
    source: S,
    codec: Option<ActiveCodec<H>>,
    closed: bool,
}

/// Opus adapter over a [`FrameSource`].
///
/// All operations take `&self` and serialize on one internal lock, so an
/// encoder can be shared between threads behind an `Arc`.
///
/// The native encoder is only released by [`FrameEncoder::close`]; dropping an
/// open encoder frees memory but skips the backend's destroy hook and never
/// closes the wrapped source.
pub struct FrameEncoder<S, B: CodecBackend = Libopus> {
    backend: B,
    settings: EncoderSettings,
    state: Mutex<EncoderState<S, B::Handle>>,
}

impl<S: FrameSource> FrameEncoder<S, Libopus> {
    /// Wrap `source` with a libopus encoder using the default settings.
    pub fn new(source: S) -> Self {
        Self::with_backend(source, Libopus, EncoderSettings::default())
    }

    /// Wrap `source` with a libopus encoder using `settings`.
    pub fn with_settings(source: S, settings: EncoderSettings) -> Self {
        Self::with_backend(source, Libopus, settings)
    }
}

impl<S: FrameSource, B: CodecBackend> FrameEncoder<S, B> {
    pub fn with_backend(source: S, backend: B, settings: EncoderSettings) -> Self {
        Self {
            backend,
            settings,
            state: Mutex::new(EncoderState {
                source,
                codec: None,
                closed: false,
            }),
        }
    }

    pub fn can_provide(&self) -> bool {
        self.state.lock().source.can_provide()
    }

    /// Next frame, always Opus.
    ///
    /// Encoded frames share one staging allocation: dropping a frame before
    /// the next call lets the encoder reuse it, holding on to it costs one
    /// fresh allocation on that call.
    pub fn provide(&self) -> EncoderResult<Bytes> {
        let mut guard = self.state.lock();
        let state = &mut *guard;

        if state.closed {
            return Err(EncoderError::Closed);
        }

        if state.source.is_opus() {
            return state.source.provide().map_err(EncoderError::Source);
        }

        let codec = self.ensure_encoder(&mut state.codec)?;
        let pcm = state.source.provide().map_err(EncoderError::Source)?;
        codec.encode(&self.backend, &pcm)
    }

    pub fn is_opus(&self) -> bool {
        true
    }

    /// Destroy the native encoder (if any) and close the wrapped source.
    /// Later calls do nothing.
    pub fn close(&self) {
        let mut state = self.state.lock();
        if state.closed {
            return;
        }
        state.closed = true;

        if let Some(codec) = state.codec.take() {
            self.backend.destroy(codec.handle);
            debug!("opus encoder destroyed");
        }
        state.source.close();
    }

    /// Whether the native encoder has been created.
    pub fn is_initialized(&self) -> bool {
        self.state.lock().codec.is_some()
    }

    pub fn is_closed(&self) -> bool {
        self.state.lock().closed
    }

    fn ensure_encoder<'a>(
        &self,
        slot: &'a mut Option<ActiveCodec<B::Handle>>,
    ) -> EncoderResult<&'a mut ActiveCodec<B::Handle>> {
        let codec = match slot.take() {
            Some(codec) => codec,
            None => {
                self.backend.load().map_err(EncoderError::Initialization)?;
                let handle = self
                    .backend
                    .create(&self.settings)
                    .map_err(EncoderError::Initialization)?;
                debug!(
                    "opus encoder created (application: {:?}, bitrate: {:?})",
                    self.settings.application, self.settings.bitrate
                );
                ActiveCodec::new(handle)
            }
        };
        Ok(slot.insert(codec))
    }
}

impl<S: FrameSource, B: CodecBackend> FrameSource for FrameEncoder<S, B> {
    fn can_provide(&self) -> bool {
        FrameEncoder::can_provide(self)
    }

    fn provide(&mut self) -> AnyResult<Bytes> {
        Ok(FrameEncoder::provide(self)?)
    }

    fn is_opus(&self) -> bool {
        FrameEncoder::is_opus(self)
    }

    fn close(&mut self) {
        FrameEncoder::close(self)
    }
}

/// Box `source` behind a libopus [`FrameEncoder`].
pub fn wrap<S: FrameSource + 'static>(source: S) -> Box<dyn FrameSource> {
    Box::new(FrameEncoder::new(source))
}
