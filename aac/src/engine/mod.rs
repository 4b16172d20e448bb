//! Native engine capability.
//!
//! The adapters never call the AAC library directly. They drive one of the
//! two traits below, which mirror the engine's call contract: open/close,
//! set-parameter, encode, fill/decode and stream info. Every method reports
//! failure as the raw native status code; the adapters attach step names.

#[cfg(feature = "fdk")]
pub mod fdk;

/// Raw native status code.
pub type Status = u32;

/// Native PCM sample (`INT_PCM`).
pub type Pcm = i16;

/// Bytes per native PCM sample.
pub const PCM_SAMPLE_BYTES: usize = std::mem::size_of::<Pcm>();

/// Bitstream unit size used for encoder output buffer descriptors.
pub const BITSTREAM_UNIT_BYTES: usize = 2;

/// Number of sub-streams a decoder instance is opened with.
pub const DECODER_LAYERS: u32 = 2;

// Transport types (TRANSPORT_TYPE)
pub const TT_MP4_RAW: i32 = 0;
pub const TT_MP4_ADIF: i32 = 1;
pub const TT_MP4_ADTS: i32 = 2;
pub const TT_MP4_LATM_MCP1: i32 = 6;
pub const TT_MP4_LATM_MCP0: i32 = 7;
pub const TT_MP4_LOAS: i32 = 10;

// Audio object types (AUDIO_OBJECT_TYPE)
pub const AOT_AAC_LC: i32 = 2;
pub const AOT_SBR: i32 = 5;
pub const AOT_ER_AAC_LD: i32 = 23;
pub const AOT_PS: i32 = 29;
pub const AOT_ER_AAC_ELD: i32 = 39;

// Channel modes (CHANNEL_MODE)
pub const MODE_1: i32 = 1;
pub const MODE_2: i32 = 2;
pub const MODE_1_2: i32 = 3;
pub const MODE_1_2_1: i32 = 4;
pub const MODE_1_2_2: i32 = 5;
pub const MODE_1_2_2_1: i32 = 6;
pub const MODE_1_2_2_2_1: i32 = 7;

// Encoder status (AACENC_ERROR)
pub const AACENC_OK: Status = 0x0000;
pub const AACENC_ENCODE_EOF: Status = 0x0080;

// Decoder status (AAC_DECODER_ERROR)
pub const AAC_DEC_OK: Status = 0x0000;
pub const AAC_DEC_OUT_OF_MEMORY: Status = 0x0002;
pub const AAC_DEC_UNKNOWN: Status = 0x0005;
pub const AAC_DEC_NOT_ENOUGH_BITS: Status = 0x1002;

// Buffer identifiers (AACENC_BufferIdentifier)
pub const IN_AUDIO_DATA: i32 = 0;
pub const OUT_BITSTREAM_DATA: i32 = 3;

/// Encoder parameters set during construction (AACENC_PARAM).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncoderParam {
    Aot,
    Bitrate,
    BitrateMode,
    SampleRate,
    ChannelMode,
    ChannelOrder,
    Afterburner,
    Transmux,
}

impl EncoderParam {
    /// Native parameter identifier.
    pub fn code(self) -> u32 {
        match self {
            Self::Aot => 0x0100,
            Self::Bitrate => 0x0101,
            Self::BitrateMode => 0x0102,
            Self::SampleRate => 0x0103,
            Self::ChannelMode => 0x0106,
            Self::ChannelOrder => 0x0107,
            Self::Afterburner => 0x0200,
            Self::Transmux => 0x0300,
        }
    }

    /// Step name reported when setting this parameter fails.
    pub fn step(self) -> &'static str {
        match self {
            Self::Aot => "aacEncoder_SetParam::AACENC_AOT",
            Self::Bitrate => "aacEncoder_SetParam::AACENC_BITRATE",
            Self::BitrateMode => "aacEncoder_SetParam::AACENC_BITRATEMODE",
            Self::SampleRate => "aacEncoder_SetParam::AACENC_SAMPLERATE",
            Self::ChannelMode => "aacEncoder_SetParam::AACENC_CHANNELMODE",
            Self::ChannelOrder => "aacEncoder_SetParam::AACENC_CHANNELORDER",
            Self::Afterburner => "aacEncoder_SetParam::AACENC_AFTERBURNER",
            Self::Transmux => "aacEncoder_SetParam::AACENC_TRANSMUX",
        }
    }
}

/// Result of one encode call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeOutcome {
    /// Bitstream bytes written to the output buffer.
    pub out_bytes: usize,
    /// Input samples the engine consumed.
    pub in_samples: usize,
}

/// Stream properties reported by the decoder after a frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamInfo {
    pub sample_rate: i32,
    /// Samples per channel in the last decoded frame.
    pub frame_size: i32,
    pub num_channels: i32,
    /// Native audio object type code.
    pub aot: i32,
}

/// One encoder engine instance.
pub trait EncoderEngine {
    /// Sets a configuration parameter.
    fn set_param(&mut self, param: EncoderParam, value: u32) -> Result<(), Status>;

    /// Issues the zero-buffer encode call that applies the configuration.
    fn init(&mut self) -> Result<(), Status>;

    /// Encodes `input` into `output`.
    ///
    /// `input` holds interleaved samples of `in_el_size` bytes each. The
    /// output descriptor is sized in units of `out_el_size` bytes, i.e.
    /// `output.len() / out_el_size`.
    fn encode(
        &mut self,
        input: &[u8],
        in_el_size: usize,
        output: &mut [u8],
        out_el_size: usize,
    ) -> Result<EncodeOutcome, Status>;

    /// Releases the native instance.
    fn close(&mut self) -> Result<(), Status>;
}

/// One decoder engine instance.
pub trait DecoderEngine {
    /// Applies an out-of-band Audio Specific Config to the base layer.
    fn config_raw(&mut self, asc: &[u8]) -> Result<(), Status>;

    /// Copies `data` into the bit reservoir. Returns the number of bytes
    /// still valid, i.e. not taken by the engine.
    fn fill(&mut self, data: &[u8]) -> Result<usize, Status>;

    /// Decodes one frame of interleaved PCM into `pcm`.
    fn decode_frame(&mut self, pcm: &mut [Pcm]) -> Result<(), Status>;

    /// Stream properties of the last decoded frame.
    fn stream_info(&self) -> Option<StreamInfo>;

    /// Releases the native instance. The engine has no failure signal here.
    fn close(&mut self);
}
