//! Audio Specific Config builder.
//!
//! Packs the leading fields of an MPEG-4 AudioSpecificConfig:
//!
//! ```text
//! audioObjectType          5 bits, 31 = escape followed by 6 bits (aot - 32)
//! samplingFrequencyIndex   4 bits, 15 = escape followed by 24 bits frequency
//! channelConfiguration     4 bits
//! ```
//!
//! The frequency field takes the value it is given: values below 15 are
//! written as an index, anything else as an explicit frequency. Callers
//! passing Hz therefore always take the explicit path; use
//! [`sampling_frequency_index`] to obtain an index first if a short config
//! is wanted.

/// Capacity of the config blob in bytes.
pub const ASC_BYTES: usize = 8;

const AOT_ESCAPE: u32 = 31;
const FREQ_ESCAPE: u32 = 15;

/// Standard sampling frequencies, by index.
pub const SAMPLING_FREQUENCIES: [i32; 13] = [
    96000, 88200, 64000, 48000, 44100, 32000, 24000, 22050, 16000, 12000, 11025, 8000, 7350,
];

/// Returns the standard table index for a sampling frequency.
pub fn sampling_frequency_index(hz: i32) -> Option<u8> {
    SAMPLING_FREQUENCIES
        .iter()
        .position(|&f| f == hz)
        .map(|i| i as u8)
}

/// MSB-first bit writer over a fixed 8-byte buffer.
#[derive(Debug, Clone, Default)]
pub struct BitWriter {
    buf: [u8; ASC_BYTES],
    pos: usize,
}

impl BitWriter {
    /// Creates an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the low `width` bits of `value`, most significant first.
    /// Bits past the buffer capacity are dropped.
    pub fn put(&mut self, value: u32, width: u32) {
        debug_assert!(width <= 32);
        debug_assert!(self.pos + width as usize <= ASC_BYTES * 8);
        for i in (0..width).rev() {
            if self.pos >= ASC_BYTES * 8 {
                return;
            }
            if (value >> i) & 1 == 1 {
                self.buf[self.pos / 8] |= 0x80 >> (self.pos % 8);
            }
            self.pos += 1;
        }
    }

    /// Number of bits written so far.
    pub fn bit_len(&self) -> usize {
        self.pos
    }

    /// Consumes the writer and returns the buffer.
    pub fn into_bytes(self) -> [u8; ASC_BYTES] {
        self.buf
    }
}

/// A packed Audio Specific Config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioSpecificConfig {
    bytes: [u8; ASC_BYTES],
    bits: usize,
}

impl AudioSpecificConfig {
    /// Packs object type, frequency and channel configuration.
    pub fn new(aot: i32, frequency: i32, channels: i32) -> Self {
        let mut w = BitWriter::new();

        let aot = aot as u32;
        if aot >= AOT_ESCAPE {
            w.put(AOT_ESCAPE, 5);
            w.put(aot.wrapping_sub(32) & 0x3F, 6);
        } else {
            w.put(aot, 5);
        }

        let frequency = frequency as u32;
        if frequency >= FREQ_ESCAPE {
            w.put(FREQ_ESCAPE, 4);
            w.put(frequency & 0xFF_FFFF, 24);
        } else {
            w.put(frequency, 4);
        }

        w.put(channels as u32 & 0xF, 4);

        let bits = w.bit_len();
        Self {
            bytes: w.into_bytes(),
            bits,
        }
    }

    /// The full blob, trailing bits zero. This is what the decoder receives.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of meaningful bits at the front of the blob.
    pub fn bit_len(&self) -> usize {
        self.bits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Reads `width` bits starting at bit `pos`, MSB first.
    fn bits(buf: &[u8], pos: usize, width: usize) -> u32 {
        let mut v = 0;
        for i in pos..pos + width {
            v = (v << 1) | u32::from((buf[i / 8] >> (7 - i % 8)) & 1);
        }
        v
    }

    #[test]
    fn test_bit_writer_crosses_bytes() {
        let mut w = BitWriter::new();
        w.put(0b101, 3);
        w.put(0xFF, 8);
        w.put(0, 2);
        w.put(1, 1);
        assert_eq!(w.bit_len(), 14);
        let buf = w.into_bytes();
        assert_eq!(buf[0], 0b1011_1111);
        assert_eq!(buf[1], 0b1110_0100);
        assert!(buf[2..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_indexed_fields() {
        // LC, 44.1 kHz index, stereo: the canonical 0x12 0x10.
        let asc = AudioSpecificConfig::new(2, 4, 2);
        assert_eq!(asc.bit_len(), 13);
        assert_eq!(&asc.as_bytes()[..2], &[0x12, 0x10]);
        assert!(asc.as_bytes()[2..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_indexed_fields_grid() {
        for aot in [1, 2, 5, 23, 29, 30] {
            for index in 0..15 {
                for channels in 0..=15 {
                    let asc = AudioSpecificConfig::new(aot, index, channels);
                    let b = asc.as_bytes();
                    assert_eq!(bits(b, 0, 5), aot as u32);
                    assert_eq!(bits(b, 5, 4), index as u32);
                    assert_eq!(bits(b, 9, 4), channels as u32);
                }
            }
        }
    }

    #[test]
    fn test_object_type_escape() {
        for aot in [31, 32, 39, 42, 95] {
            let asc = AudioSpecificConfig::new(aot, 3, 1);
            let b = asc.as_bytes();
            assert_eq!(bits(b, 0, 5), 0b11111);
            assert_eq!(bits(b, 5, 6), ((aot - 32) & 0x3F) as u32);
            assert_eq!(bits(b, 11, 4), 3);
            assert_eq!(bits(b, 15, 4), 1);
            assert_eq!(asc.bit_len(), 19);
        }
    }

    #[test]
    fn test_explicit_frequency() {
        let asc = AudioSpecificConfig::new(2, 44100, 2);
        let b = asc.as_bytes();
        assert_eq!(bits(b, 0, 5), 2);
        assert_eq!(bits(b, 5, 4), 0xF);
        assert_eq!(bits(b, 9, 24), 44100);
        assert_eq!(bits(b, 33, 4), 2);
        assert_eq!(asc.bit_len(), 37);
    }

    #[test]
    fn test_both_escapes_fit() {
        // ELD at 48 kHz, 7 channels: 5 + 6 + 4 + 24 + 4 bits.
        let asc = AudioSpecificConfig::new(39, 48000, 7);
        let b = asc.as_bytes();
        assert_eq!(asc.bit_len(), 43);
        assert_eq!(b.len(), ASC_BYTES);
        assert_eq!(bits(b, 5, 6), 7);
        assert_eq!(bits(b, 15, 24), 48000);
        assert_eq!(bits(b, 39, 4), 7);
        assert_eq!(bits(b, 43, 21), 0);
    }

    #[test]
    fn test_sampling_frequency_index() {
        assert_eq!(sampling_frequency_index(96000), Some(0));
        assert_eq!(sampling_frequency_index(44100), Some(4));
        assert_eq!(sampling_frequency_index(7350), Some(12));
        assert_eq!(sampling_frequency_index(44000), None);
    }
}
