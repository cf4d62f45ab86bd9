pub mod channel;
pub mod traits;

pub use channel::{ChannelSource, FrameSender};
pub use traits::FrameSource;
