//! `source/channel.rs` — frame source fed through a flume channel.
//!
//! The producer side keeps a [`FrameSender`] and pushes frames in whatever
//! cadence it likes; the consumer drains them one at a time through
//! [`FrameSource::provide`].  Closing the source drops the receiver, so the
//! producer sees a send error and can stop.

use bytes::Bytes;
use flume::{Receiver, Sender, TryRecvError};

use super::FrameSource;
use crate::common::types::AnyResult;

/// Producer half handed out by [`ChannelSource::new`].
pub type FrameSender = Sender<Bytes>;

pub struct ChannelSource {
    rx: Option<Receiver<Bytes>>,
    opus: bool,
}

impl ChannelSource {
    /// Create a source backed by a bounded channel of `capacity` frames.
    ///
    /// `opus` declares whether the frames pushed into the sender are already
    /// Opus packets (`true`) or raw PCM (`false`).
    pub fn new(opus: bool, capacity: usize) -> (FrameSender, Self) {
        let (tx, rx) = flume::bounded(capacity);
        (tx, Self { rx: Some(rx), opus })
    }

    /// Same as [`ChannelSource::new`] with no capacity limit.
    pub fn unbounded(opus: bool) -> (FrameSender, Self) {
        let (tx, rx) = flume::unbounded();
        (tx, Self { rx: Some(rx), opus })
    }

    /// Number of frames waiting to be provided.
    pub fn queued(&self) -> usize {
        self.rx.as_ref().map_or(0, Receiver::len)
    }

    pub fn is_closed(&self) -> bool {
        self.rx.is_none()
    }
}

impl FrameSource for ChannelSource {
    fn can_provide(&self) -> bool {
        self.rx.as_ref().is_some_and(|rx| !rx.is_empty())
    }

    fn provide(&mut self) -> AnyResult<Bytes> {
        let rx = self.rx.as_ref().ok_or("channel source closed")?;
        match rx.try_recv() {
            Ok(frame) => Ok(frame),
            Err(TryRecvError::Empty) => Err("no frame queued".into()),
            Err(TryRecvError::Disconnected) => Err("frame producer disconnected".into()),
        }
    }

    fn is_opus(&self) -> bool {
        self.opus
    }

    fn close(&mut self) {
        self.rx = None;
    }
}
