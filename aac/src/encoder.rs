//! AAC encoder adapter.

use tracing::{debug, error};

use crate::engine::{AACENC_ENCODE_EOF, BITSTREAM_UNIT_BYTES, EncoderEngine, EncoderParam, Status};
use crate::error::{Error, Result};
use crate::mapping;
use crate::option::CodecOption;

#[cfg(feature = "fdk")]
use crate::engine::fdk::FdkEncoder;

/// AAC encoder.
///
/// Owns one engine instance for its whole lifetime. The instance is
/// configured once from the [`CodecOption`] and released exactly once, by
/// [`close`](Self::close) or on drop.
///
/// # Streaming
///
/// [`write`](Self::write) stages one block of interleaved PCM
/// (`sample_bits / 8` bytes per sample) and [`read`](Self::read) encodes
/// it. Each `read` must directly follow the `write` it consumes. A `read`
/// with nothing staged, including after an empty `write`, asks the engine
/// to flush its delay line; once drained it reports end of stream and
/// `read` returns 0.
///
/// Output buffers are described to the engine in 2-byte bitstream units,
/// so the usable capacity is `out.len() / 2` units.
pub struct AacEncoder<E: EncoderEngine> {
    option: CodecOption,
    engine: E,
    pending: Vec<u8>,
    closed: bool,
}

#[cfg(feature = "fdk")]
impl AacEncoder<FdkEncoder> {
    /// Creates an encoder backed by libfdk-aac.
    pub fn new(option: CodecOption) -> Result<Self> {
        Self::with_engine(option, FdkEncoder::open)
    }
}

impl<E: EncoderEngine> AacEncoder<E> {
    /// Creates an encoder on the engine returned by `open`.
    ///
    /// All option fields are mapped before `open` is called, so an invalid
    /// option never creates an engine instance. If configuration fails the
    /// instance is closed before returning.
    pub fn with_engine<F>(option: CodecOption, open: F) -> Result<Self>
    where
        F: FnOnce() -> std::result::Result<E, Status>,
    {
        let transport = mapping::transport_type(option.transport_type)?;
        let aot = mapping::audio_object_type(option.audio_object_type)?;
        let mode = mapping::channel_mode(option.channels)?;
        let order = mapping::channel_order(option.channel_order)?;

        let engine = open().map_err(|code| Error::native("aacEncOpen", code))?;
        debug!("aac: encoder opened");

        let mut encoder = Self {
            option,
            engine,
            pending: Vec::new(),
            closed: false,
        };

        encoder.set(EncoderParam::Aot, aot as u32)?;
        encoder.set(EncoderParam::Transmux, transport as u32)?;
        encoder.set(EncoderParam::ChannelOrder, order as u32)?;
        encoder.set(EncoderParam::ChannelMode, mode as u32)?;
        encoder.set(EncoderParam::SampleRate, option.sample_rate as u32)?;
        encoder.set(EncoderParam::BitrateMode, option.bitrate_mode())?;
        if let Some(bitrate) = option.constant_bitrate() {
            encoder.set(EncoderParam::Bitrate, bitrate)?;
        }
        encoder.set(EncoderParam::Afterburner, 1)?;

        encoder
            .engine
            .init()
            .map_err(|code| Error::native("aacEncEncode::init", code))?;

        Ok(encoder)
    }

    fn set(&mut self, param: EncoderParam, value: u32) -> Result<()> {
        debug!(?param, value, "aac: set encoder param");
        self.engine
            .set_param(param, value)
            .map_err(|code| Error::native(param.step(), code))
    }

    /// Returns the option as configured.
    pub fn info(&self) -> &CodecOption {
        &self.option
    }

    /// Stages `data` for the next [`read`](Self::read). Always reports the
    /// full length as consumed.
    pub fn write(&mut self, data: &[u8]) -> Result<usize> {
        if self.closed {
            return Err(Error::Closed);
        }
        self.pending.clear();
        self.pending.extend_from_slice(data);
        Ok(data.len())
    }

    /// Encodes the staged input into `out`. Returns the number of
    /// bitstream bytes written, 0 at end of stream.
    pub fn read(&mut self, out: &mut [u8]) -> Result<usize> {
        let mut input = std::mem::take(&mut self.pending);
        let result = self.encode(&input, out);
        input.clear();
        self.pending = input;
        result
    }

    /// Encodes `input` into `out` in a single engine call.
    pub fn encode(&mut self, input: &[u8], out: &mut [u8]) -> Result<usize> {
        if self.closed {
            return Err(Error::Closed);
        }
        let in_el_size = self.option.sample_bytes();
        match self
            .engine
            .encode(input, in_el_size, out, BITSTREAM_UNIT_BYTES)
        {
            Ok(outcome) => Ok(outcome.out_bytes),
            Err(AACENC_ENCODE_EOF) => Ok(0),
            Err(code) => Err(Error::native("aacEncEncode", code)),
        }
    }

    /// Releases the engine instance. Later calls are no-ops; `write` and
    /// `read` fail with [`Error::Closed`].
    pub fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        debug!("aac: encoder closed");
        self.engine
            .close()
            .map_err(|code| Error::native("aacEncClose", code))
    }
}

impl<E: EncoderEngine> Drop for AacEncoder<E> {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            error!(error = %e, "aac: encoder close failed");
        }
    }
}
