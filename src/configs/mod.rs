pub mod base;
pub mod encoder;
pub mod logging;

pub use base::*;
pub use encoder::*;
pub use logging::*;
