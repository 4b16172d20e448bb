//! Uniform codec handle and factory.

use crate::decoder::AacDecoder;
use crate::encoder::AacEncoder;
use crate::engine::{DecoderEngine, EncoderEngine};
use crate::error::Result;
use crate::option::CodecOption;

/// An encoder or decoder driven through `write`/`read`.
///
/// A handle owns exactly one engine instance and is not reentrant:
/// callers sharing one across threads must serialize access, e.g. with a
/// `Mutex<Box<dyn Codec + Send>>`.
pub trait Codec {
    /// Returns the current option.
    ///
    /// Encoders report the option as configured. Decoders report what the
    /// stream contained as of the last decoded frame.
    fn info(&self) -> &CodecOption;

    /// Feeds input. Returns the number of bytes consumed.
    fn write(&mut self, data: &[u8]) -> Result<usize>;

    /// Pulls output into `buf`. Returns the number of bytes produced; 0
    /// means the codec needs more input or reached end of stream.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize>;

    /// Releases the engine instance. Dropping the handle does the same.
    fn close(&mut self) -> Result<()>;
}

impl<E: EncoderEngine> Codec for AacEncoder<E> {
    fn info(&self) -> &CodecOption {
        AacEncoder::info(self)
    }

    fn write(&mut self, data: &[u8]) -> Result<usize> {
        AacEncoder::write(self, data)
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        AacEncoder::read(self, buf)
    }

    fn close(&mut self) -> Result<()> {
        AacEncoder::close(self)
    }
}

impl<D: DecoderEngine> Codec for AacDecoder<D> {
    fn info(&self) -> &CodecOption {
        AacDecoder::info(self)
    }

    fn write(&mut self, data: &[u8]) -> Result<usize> {
        AacDecoder::write(self, data)
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        AacDecoder::read(self, buf)
    }

    fn close(&mut self) -> Result<()> {
        AacDecoder::close(self);
        Ok(())
    }
}

/// Creates an AAC encoder.
#[cfg(feature = "fdk")]
pub fn create_encoder(option: CodecOption) -> Result<Box<dyn Codec + Send>> {
    Ok(Box::new(AacEncoder::new(option)?))
}

/// Creates an AAC decoder.
#[cfg(feature = "fdk")]
pub fn create_decoder(option: CodecOption) -> Result<Box<dyn Codec + Send>> {
    Ok(Box::new(AacDecoder::new(option)?))
}
