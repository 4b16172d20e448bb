//! Generic codec configuration.
//!
//! [`CodecOption`] describes a stream independently of the native engine.
//! It is serde-serializable so applications can keep codec settings in
//! JSON or YAML next to the rest of their configuration:
//!
//! ```yaml
//! sample_rate: 44100
//! sample_bits: 16
//! channels: 2
//! audio_object_type: aac_lc
//! channel_order: wav
//! transport_type: adts
//! bitrate: 64000
//! ```

use serde::{Deserialize, Serialize};

/// AAC profile / toolset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AudioObjectType {
    #[default]
    Unknown,
    /// Low Complexity.
    AacLc,
    /// High Efficiency (spectral band replication).
    AacHe,
    /// High Efficiency v2 (SBR + parametric stereo).
    AacHeV2,
    /// Low Delay.
    AacLd,
    /// Enhanced Low Delay.
    AacEld,
}

/// Interleaving order of multichannel samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelOrder {
    #[default]
    Unknown,
    /// MPEG canonical order.
    Mpeg,
    /// WAV file order.
    Wav,
}

/// Framing wrapped around AAC access units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportType {
    #[default]
    Unknown,
    /// Headerless access units.
    Raw,
    Adif,
    Adts,
    /// LATM with muxConfigPresent = 1.
    LatmMcp1,
    /// LATM with muxConfigPresent = 0.
    LatmMcp0,
    Loas,
}

/// Common sample rates in Hz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum SampleRate {
    R8000 = 8000,
    R11025 = 11025,
    R12000 = 12000,
    R16000 = 16000,
    R22050 = 22050,
    R24000 = 24000,
    R32000 = 32000,
    R44100 = 44100,
    R48000 = 48000,
    R64000 = 64000,
    R88200 = 88200,
    R96000 = 96000,
}

impl SampleRate {
    /// Returns the rate in Hz.
    pub fn hz(self) -> i32 {
        self as i32
    }
}

impl From<SampleRate> for i32 {
    fn from(rate: SampleRate) -> Self {
        rate.hz()
    }
}

/// Common PCM sample widths in bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum SampleBits {
    B8 = 8,
    B16 = 16,
    B24 = 24,
    B32 = 32,
    B64 = 64,
}

impl SampleBits {
    /// Returns the width in bits.
    pub fn bits(self) -> i32 {
        self as i32
    }

    /// Returns the width in bytes.
    pub fn bytes(self) -> usize {
        (self as i32 / 8) as usize
    }
}

impl From<SampleBits> for i32 {
    fn from(bits: SampleBits) -> Self {
        bits.bits()
    }
}

/// Generic description of an AAC stream.
///
/// `bitrate` doubles as a bitrate-mode selector: a negative value selects
/// the variable bitrate mode `-bitrate`, a positive value sets a constant
/// bitrate in bits per second, zero leaves the engine default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecOption {
    /// Sample rate in Hz.
    pub sample_rate: i32,
    /// Bits per PCM sample.
    pub sample_bits: i32,
    /// Channel count (1..=7).
    pub channels: i32,
    pub audio_object_type: AudioObjectType,
    pub channel_order: ChannelOrder,
    pub transport_type: TransportType,
    pub bitrate: i32,
}

impl CodecOption {
    /// Sets the sample rate.
    pub fn with_sample_rate(mut self, rate: impl Into<i32>) -> Self {
        self.sample_rate = rate.into();
        self
    }

    /// Sets the PCM sample width.
    pub fn with_sample_bits(mut self, bits: impl Into<i32>) -> Self {
        self.sample_bits = bits.into();
        self
    }

    /// Sets the channel count.
    pub fn with_channels(mut self, channels: i32) -> Self {
        self.channels = channels;
        self
    }

    /// Sets the audio object type.
    pub fn with_audio_object_type(mut self, aot: AudioObjectType) -> Self {
        self.audio_object_type = aot;
        self
    }

    /// Sets the channel order.
    pub fn with_channel_order(mut self, order: ChannelOrder) -> Self {
        self.channel_order = order;
        self
    }

    /// Sets the transport type.
    pub fn with_transport_type(mut self, transport: TransportType) -> Self {
        self.transport_type = transport;
        self
    }

    /// Sets the bitrate field. See the type docs for the sign convention.
    pub fn with_bitrate(mut self, bitrate: i32) -> Self {
        self.bitrate = bitrate;
        self
    }

    /// Bytes per PCM sample, as used for encoder input.
    pub fn sample_bytes(&self) -> usize {
        (self.sample_bits / 8).max(0) as usize
    }

    /// Bitrate mode derived from the bitrate field.
    pub fn bitrate_mode(&self) -> u32 {
        if self.bitrate < 0 {
            self.bitrate.unsigned_abs()
        } else {
            0
        }
    }

    /// Explicit constant bitrate, if one is configured.
    pub fn constant_bitrate(&self) -> Option<u32> {
        (self.bitrate > 0).then_some(self.bitrate as u32)
    }
}
