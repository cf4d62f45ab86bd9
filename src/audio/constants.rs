//! Fixed sizing constants for the encoder.
//!
//! These values form the compatibility contract with Discord voice and are not
//! exposed through configuration.

// ── Sample / PCM ─────────────────────────────────────────────────────────────

/// Opus sample rate (Hz).
pub const OPUS_SAMPLE_RATE: u32 = 48_000;

/// Samples per channel in one 20 ms frame at 48 kHz.
pub const OPUS_FRAME_SIZE: usize = 960;

/// Interleaved stereo.
pub const OPUS_CHANNEL_COUNT: usize = 2;

/// Width of one input sample (i16).
pub const BYTES_PER_SAMPLE: usize = 2;

/// Samples per 20 ms stereo frame (960 frames × 2 channels).
pub const FRAME_SIZE_SAMPLES: usize = OPUS_FRAME_SIZE * OPUS_CHANNEL_COUNT;

// ── Staging buffers ──────────────────────────────────────────────────────────

/// Raw PCM bytes in one frame: 2 channels × 960 samples × 2 bytes = 3 840.
pub const MAXIMUM_INPUT_BUFFER_SIZE: usize = FRAME_SIZE_SAMPLES * BYTES_PER_SAMPLE;

/// Worst-case encoded frame: 32 bytes of header room plus 1 536 bytes per
/// 960-sample chunk.
pub const MAXIMUM_OUTPUT_BUFFER_SIZE: usize = 32 + 1_536 * OPUS_FRAME_SIZE / 960;
