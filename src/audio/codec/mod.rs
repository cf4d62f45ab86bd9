pub mod backend;
pub mod frame_encoder;
pub mod opus_encoder;

pub use backend::CodecBackend;
pub use frame_encoder::{FrameEncoder, wrap};
pub use opus_encoder::Libopus;
