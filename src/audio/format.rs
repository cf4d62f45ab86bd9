use crate::audio::constants::{
    BYTES_PER_SAMPLE, OPUS_CHANNEL_COUNT, OPUS_FRAME_SIZE, OPUS_SAMPLE_RATE,
};

/// Shape of the raw PCM an encoder accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PcmFormat {
    pub sample_rate: u32,
    pub bits_per_sample: u16,
    pub channels: u16,
    pub signed: bool,
    pub big_endian: bool,
}

/// 48 kHz, signed 16-bit, interleaved stereo in native byte order.
pub const INPUT_FORMAT: PcmFormat = PcmFormat {
    sample_rate: OPUS_SAMPLE_RATE,
    bits_per_sample: (BYTES_PER_SAMPLE * 8) as u16,
    channels: OPUS_CHANNEL_COUNT as u16,
    signed: true,
    big_endian: cfg!(target_endian = "big"),
};

impl PcmFormat {
    /// Bytes in one interleaved sample frame (all channels).
    pub fn block_align(&self) -> usize {
        self.channels as usize * (self.bits_per_sample as usize / 8)
    }

    /// Bytes in one 20 ms Opus frame of this format.
    pub fn frame_bytes(&self) -> usize {
        self.block_align() * OPUS_FRAME_SIZE
    }

    /// Playback duration of `bytes` worth of PCM, in milliseconds.
    pub fn duration_ms(&self, bytes: usize) -> u64 {
        let align = self.block_align();
        if align == 0 || self.sample_rate == 0 {
            return 0;
        }
        (bytes / align) as u64 * 1_000 / self.sample_rate as u64
    }
}
