//! AAC encode/decode over the Fraunhofer FDK AAC engine.
//!
//! This crate adapts a generic [`CodecOption`] to the exact parameter and
//! buffer-descriptor shapes of an external AAC engine:
//!
//! - `mapping`: `CodecOption` enums to native engine codes and back
//! - `asc`: bit-packed Audio Specific Config used to prime raw decoding
//! - `encoder` / `decoder`: streaming adapters over one engine instance
//! - `codec`: the [`Codec`] trait and the two factory functions
//!
//! # Example
//!
//! ```no_run
//! use aaclib::{create_encoder, AudioObjectType, ChannelOrder, Codec, CodecOption, TransportType};
//!
//! let option = CodecOption::default()
//!     .with_sample_rate(44100)
//!     .with_sample_bits(16)
//!     .with_channels(2)
//!     .with_audio_object_type(AudioObjectType::AacLc)
//!     .with_channel_order(ChannelOrder::Wav)
//!     .with_transport_type(TransportType::Adts)
//!     .with_bitrate(64000);
//!
//! let mut encoder = create_encoder(option)?;
//!
//! // One AAC frame of 16-bit stereo silence.
//! let pcm = vec![0u8; 1024 * 2 * 2];
//! let mut out = vec![0u8; 8192];
//! encoder.write(&pcm)?;
//! let n = encoder.read(&mut out)?;
//! println!("produced {n} bytes");
//! # Ok::<(), aaclib::Error>(())
//! ```

pub mod asc;
pub mod codec;
pub mod decoder;
pub mod encoder;
pub mod engine;
mod error;
pub mod mapping;
pub mod option;

#[cfg(test)]
mod testing;

pub use codec::Codec;
#[cfg(feature = "fdk")]
pub use codec::{create_decoder, create_encoder};
pub use decoder::AacDecoder;
pub use encoder::AacEncoder;
pub use error::{Error, Result};
pub use option::{AudioObjectType, ChannelOrder, CodecOption, SampleBits, SampleRate, TransportType};
