//! AAC decoder adapter.

use tracing::{debug, warn};

use crate::asc::AudioSpecificConfig;
use crate::engine::{
    AAC_DEC_NOT_ENOUGH_BITS, AAC_DEC_UNKNOWN, DECODER_LAYERS, DecoderEngine, PCM_SAMPLE_BYTES,
    Pcm, Status,
};
use crate::error::{Error, Result};
use crate::mapping;
use crate::option::{AudioObjectType, CodecOption};

#[cfg(feature = "fdk")]
use crate::engine::fdk::FdkDecoder;

/// AAC decoder.
///
/// Owns one engine instance, primed at construction with an Audio Specific
/// Config built from the option's object type, sample rate and channel
/// count. The config is applied for every transport type, including the
/// self-describing ones (ADIF, ADTS, LATM, LOAS).
///
/// # Streaming
///
/// Feed bitstream with [`write`](Self::write), which may take only part of
/// the input; re-offer the rest later. Pull PCM with [`read`](Self::read)
/// until it returns 0, which means the engine needs more input. PCM is
/// interleaved 16-bit little-endian.
pub struct AacDecoder<D: DecoderEngine> {
    option: CodecOption,
    engine: D,
    pcm: Vec<Pcm>,
    closed: bool,
}

#[cfg(feature = "fdk")]
impl AacDecoder<FdkDecoder> {
    /// Creates a decoder backed by libfdk-aac.
    pub fn new(option: CodecOption) -> Result<Self> {
        Self::with_engine(option, FdkDecoder::open)
    }
}

impl<D: DecoderEngine> AacDecoder<D> {
    /// Creates a decoder on the engine returned by `open`, which receives
    /// the native transport type and the sub-stream count.
    pub fn with_engine<F>(option: CodecOption, open: F) -> Result<Self>
    where
        F: FnOnce(i32, u32) -> std::result::Result<D, Status>,
    {
        let transport = mapping::transport_type(option.transport_type)?;
        let aot = mapping::audio_object_type(option.audio_object_type)?;

        let engine =
            open(transport, DECODER_LAYERS).map_err(|code| Error::native("aacDecoder_Open", code))?;
        debug!(transport, "aac: decoder opened");

        let mut decoder = Self {
            option,
            engine,
            pcm: Vec::new(),
            closed: false,
        };

        let asc = AudioSpecificConfig::new(aot, option.sample_rate, option.channels);
        debug!(bits = asc.bit_len(), "aac: applying audio specific config");
        decoder
            .engine
            .config_raw(asc.as_bytes())
            .map_err(|code| Error::native("aacDecoder_ConfigRaw", code))?;

        Ok(decoder)
    }

    /// Returns the option, updated from the stream after each decoded frame.
    pub fn info(&self) -> &CodecOption {
        &self.option
    }

    /// Feeds bitstream bytes. Returns how many bytes the engine took.
    pub fn write(&mut self, data: &[u8]) -> Result<usize> {
        if self.closed {
            return Err(Error::Closed);
        }
        let valid = self
            .engine
            .fill(data)
            .map_err(|code| Error::native("aacDecoder_Fill", code))?;
        Ok(data.len().saturating_sub(valid))
    }

    /// Decodes one frame into `out`. Returns the PCM byte count of the
    /// frame, or 0 if more input is needed.
    pub fn read(&mut self, out: &mut [u8]) -> Result<usize> {
        if self.closed {
            return Err(Error::Closed);
        }

        let samples = out.len() / PCM_SAMPLE_BYTES;
        self.pcm.resize(samples, 0);
        match self.engine.decode_frame(&mut self.pcm) {
            Ok(()) => {}
            Err(AAC_DEC_NOT_ENOUGH_BITS) => return Ok(0),
            Err(code) => return Err(Error::native("aacDecoder_DecodeFrame", code)),
        }

        let info = self
            .engine
            .stream_info()
            .ok_or(Error::native("aacDecoder_GetStreamInfo", AAC_DEC_UNKNOWN))?;

        self.option.sample_rate = info.sample_rate;
        self.option.sample_bits = (PCM_SAMPLE_BYTES * 8) as i32;
        self.option.channels = info.num_channels;
        self.option.audio_object_type = match mapping::from_native_audio_object_type(info.aot) {
            Some(aot) => aot,
            None => {
                warn!(aot = info.aot, "aac: stream uses an unmapped audio object type");
                AudioObjectType::Unknown
            }
        };

        let produced = (info.frame_size.max(0) as usize)
            * (info.num_channels.max(0) as usize)
            * PCM_SAMPLE_BYTES;
        let copied = produced.min(samples * PCM_SAMPLE_BYTES);
        for (dst, s) in out[..copied]
            .chunks_exact_mut(PCM_SAMPLE_BYTES)
            .zip(&self.pcm)
        {
            dst.copy_from_slice(&s.to_le_bytes());
        }

        Ok(produced)
    }

    /// Releases the engine instance. Later calls are no-ops; `write` and
    /// `read` fail with [`Error::Closed`].
    pub fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        self.engine.close();
        debug!("aac: decoder closed");
    }
}

impl<D: DecoderEngine> Drop for AacDecoder<D> {
    fn drop(&mut self) {
        self.close();
    }
}
