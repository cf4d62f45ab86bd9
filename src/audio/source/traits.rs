use bytes::Bytes;

use crate::common::types::AnyResult;

/// Common trait implemented by everything that hands out audio frames.
///
/// A frame is either raw PCM (see [`crate::audio::INPUT_FORMAT`]) or an
/// already-encoded Opus packet, depending on [`FrameSource::is_opus`].
pub trait FrameSource: Send {
    /// Whether a frame is available right now.
    fn can_provide(&self) -> bool;

    /// Pull the next frame.
    fn provide(&mut self) -> AnyResult<Bytes>;

    /// Whether frames from [`FrameSource::provide`] are Opus packets.
    fn is_opus(&self) -> bool;

    /// Release the source. Must be safe to call more than once.
    fn close(&mut self);
}

impl<T: FrameSource + ?Sized> FrameSource for Box<T> {
    fn can_provide(&self) -> bool {
        (**self).can_provide()
    }

    fn provide(&mut self) -> AnyResult<Bytes> {
        (**self).provide()
    }

    fn is_opus(&self) -> bool {
        (**self).is_opus()
    }

    fn close(&mut self) {
        (**self).close()
    }
}
