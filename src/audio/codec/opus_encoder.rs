use std::sync::OnceLock;

use audiopus::{Application, Bitrate, Channels, SampleRate, coder::Encoder as OpusEncoder};
use tracing::{debug, trace};

use super::CodecBackend;
use crate::{
    audio::constants::OPUS_CHANNEL_COUNT,
    common::{errors::map_boxed_err, types::AnyResult},
    configs::{EncoderSettings, OpusApplication},
};

static OPUS_RUNTIME: OnceLock<()> = OnceLock::new();

/// libopus through `audiopus`. The library is linked into the binary, so
/// loading only has to happen once per process and cannot fail.
#[derive(Debug, Default, Clone, Copy)]
pub struct Libopus;

impl Libopus {
    fn application(app: OpusApplication) -> Application {
        match app {
            OpusApplication::Audio => Application::Audio,
            OpusApplication::Voip => Application::Voip,
            OpusApplication::LowDelay => Application::LowDelay,
        }
    }
}

impl CodecBackend for Libopus {
    type Handle = OpusEncoder;

    fn load(&self) -> AnyResult<()> {
        OPUS_RUNTIME.get_or_init(|| debug!("opus runtime ready"));
        Ok(())
    }

    fn create(&self, settings: &EncoderSettings) -> AnyResult<OpusEncoder> {
        let mut encoder = OpusEncoder::new(
            SampleRate::Hz48000,
            Channels::Stereo,
            Self::application(settings.application),
        )
        .map_err(map_boxed_err)?;
        let bitrate = match settings.bitrate {
            Some(bps) => Bitrate::BitsPerSecond(bps),
            None => Bitrate::Auto,
        };
        encoder.set_bitrate(bitrate).map_err(map_boxed_err)?;
        Ok(encoder)
    }

    fn encode(
        &self,
        handle: &mut OpusEncoder,
        pcm: &[i16],
        frame_size: usize,
        out: &mut [u8],
    ) -> AnyResult<usize> {
        // audiopus infers the frame size from the slice length.
        if pcm.len() != frame_size * OPUS_CHANNEL_COUNT {
            return Err(format!(
                "pcm holds {} samples, frame needs {}",
                pcm.len(),
                frame_size * OPUS_CHANNEL_COUNT
            )
            .into());
        }
        handle.encode(pcm, out).map_err(map_boxed_err)
    }

    fn destroy(&self, handle: OpusEncoder) {
        drop(handle);
        trace!("opus encoder released");
    }
}
