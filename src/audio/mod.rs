pub mod codec;
pub mod constants;
pub mod format;
pub mod source;

pub use codec::{CodecBackend, FrameEncoder, Libopus, wrap};
pub use format::{INPUT_FORMAT, PcmFormat};
pub use source::{ChannelSource, FrameSender, FrameSource};
