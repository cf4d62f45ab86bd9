pub mod audio;
pub mod common;
pub mod configs;

pub use audio::{
    ChannelSource, CodecBackend, FrameEncoder, FrameSource, INPUT_FORMAT, Libopus, PcmFormat,
    wrap,
};
pub use common::{AnyError, AnyResult, EncoderError, EncoderResult};
pub use configs::{Config, EncoderSettings, OpusApplication};
