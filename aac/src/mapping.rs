//! `CodecOption` fields to native engine codes.
//!
//! Every forward mapping is partial: `Unknown` variants and out-of-range
//! channel counts fail with [`Error::UnknownOption`] before the engine is
//! touched.

use crate::engine::{
    AOT_AAC_LC, AOT_ER_AAC_ELD, AOT_ER_AAC_LD, AOT_PS, AOT_SBR, MODE_1, MODE_1_2, MODE_1_2_1,
    MODE_1_2_2, MODE_1_2_2_1, MODE_1_2_2_2_1, MODE_2, TT_MP4_ADIF, TT_MP4_ADTS, TT_MP4_LATM_MCP0,
    TT_MP4_LATM_MCP1, TT_MP4_LOAS, TT_MP4_RAW,
};
use crate::error::{Error, Result};
use crate::option::{AudioObjectType, ChannelOrder, TransportType};

/// Maps a transport type to the native transport code.
pub fn transport_type(transport: TransportType) -> Result<i32> {
    match transport {
        TransportType::Raw => Ok(TT_MP4_RAW),
        TransportType::Adif => Ok(TT_MP4_ADIF),
        TransportType::Adts => Ok(TT_MP4_ADTS),
        TransportType::LatmMcp1 => Ok(TT_MP4_LATM_MCP1),
        TransportType::LatmMcp0 => Ok(TT_MP4_LATM_MCP0),
        TransportType::Loas => Ok(TT_MP4_LOAS),
        TransportType::Unknown => Err(Error::unknown("transport type")),
    }
}

/// Maps an audio object type to the native object type code.
///
/// HE and HE v2 select the SBR and PS extension object types.
pub fn audio_object_type(aot: AudioObjectType) -> Result<i32> {
    match aot {
        AudioObjectType::AacLc => Ok(AOT_AAC_LC),
        AudioObjectType::AacHe => Ok(AOT_SBR),
        AudioObjectType::AacHeV2 => Ok(AOT_PS),
        AudioObjectType::AacLd => Ok(AOT_ER_AAC_LD),
        AudioObjectType::AacEld => Ok(AOT_ER_AAC_ELD),
        AudioObjectType::Unknown => Err(Error::unknown("audio object type")),
    }
}

/// Maps a native object type code reported by the decoder back to an
/// [`AudioObjectType`]. Codes without a counterpart yield `None`.
pub fn from_native_audio_object_type(code: i32) -> Option<AudioObjectType> {
    match code {
        AOT_AAC_LC => Some(AudioObjectType::AacLc),
        AOT_SBR => Some(AudioObjectType::AacHe),
        AOT_PS => Some(AudioObjectType::AacHeV2),
        AOT_ER_AAC_LD => Some(AudioObjectType::AacLd),
        AOT_ER_AAC_ELD => Some(AudioObjectType::AacEld),
        _ => None,
    }
}

/// Maps a channel count to the MPEG channel mode.
pub fn channel_mode(channels: i32) -> Result<i32> {
    match channels {
        1 => Ok(MODE_1),
        2 => Ok(MODE_2),
        3 => Ok(MODE_1_2),
        4 => Ok(MODE_1_2_1),
        5 => Ok(MODE_1_2_2),
        6 => Ok(MODE_1_2_2_1),
        7 => Ok(MODE_1_2_2_2_1),
        _ => Err(Error::unknown("channel mode")),
    }
}

/// Maps a channel order to the native flag (0 = MPEG, 1 = WAV).
pub fn channel_order(order: ChannelOrder) -> Result<i32> {
    match order {
        ChannelOrder::Mpeg => Ok(0),
        ChannelOrder::Wav => Ok(1),
        ChannelOrder::Unknown => Err(Error::unknown("channel order")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_transport_type_distinct() {
        let all = [
            TransportType::Raw,
            TransportType::Adif,
            TransportType::Adts,
            TransportType::LatmMcp1,
            TransportType::LatmMcp0,
            TransportType::Loas,
        ];
        let codes: HashSet<i32> = all.iter().map(|t| transport_type(*t).unwrap()).collect();
        assert_eq!(codes.len(), all.len());
        assert_eq!(transport_type(TransportType::Adts).unwrap(), TT_MP4_ADTS);
    }

    #[test]
    fn test_transport_type_unknown() {
        let err = transport_type(TransportType::Unknown).unwrap_err();
        assert_eq!(err, Error::unknown("transport type"));
        assert_eq!(err.to_string(), "aac: unknown transport type");
    }

    #[test]
    fn test_audio_object_type_extension_codes() {
        assert_eq!(audio_object_type(AudioObjectType::AacLc).unwrap(), 2);
        assert_eq!(audio_object_type(AudioObjectType::AacHe).unwrap(), AOT_SBR);
        assert_eq!(audio_object_type(AudioObjectType::AacHeV2).unwrap(), AOT_PS);
        assert_eq!(audio_object_type(AudioObjectType::AacLd).unwrap(), 23);
        assert_eq!(audio_object_type(AudioObjectType::AacEld).unwrap(), 39);
    }

    #[test]
    fn test_audio_object_type_reverse_is_idempotent() {
        let all = [
            AudioObjectType::AacLc,
            AudioObjectType::AacHe,
            AudioObjectType::AacHeV2,
            AudioObjectType::AacLd,
            AudioObjectType::AacEld,
        ];
        for aot in all {
            let code = audio_object_type(aot).unwrap();
            assert_eq!(from_native_audio_object_type(code), Some(aot));
        }
        assert!(audio_object_type(AudioObjectType::Unknown).is_err());
    }

    #[test]
    fn test_reverse_unmapped_code() {
        // AOT_ER_AAC_LC has no counterpart.
        assert_eq!(from_native_audio_object_type(17), None);
        assert_eq!(from_native_audio_object_type(-1), None);
    }

    #[test]
    fn test_channel_mode_supported_counts() {
        let codes: Vec<i32> = (1..=7).map(|n| channel_mode(n).unwrap()).collect();
        let unique: HashSet<i32> = codes.iter().copied().collect();
        assert_eq!(unique.len(), 7);
        assert_eq!(channel_mode(3).unwrap(), MODE_1_2);
        // Stable across calls.
        assert_eq!(codes, (1..=7).map(|n| channel_mode(n).unwrap()).collect::<Vec<_>>());
    }

    #[test]
    fn test_channel_mode_out_of_range() {
        for n in [0, 8, -1, i32::MIN, i32::MAX] {
            assert_eq!(channel_mode(n).unwrap_err(), Error::unknown("channel mode"));
        }
    }

    #[test]
    fn test_channel_order() {
        assert_eq!(channel_order(ChannelOrder::Mpeg).unwrap(), 0);
        assert_eq!(channel_order(ChannelOrder::Wav).unwrap(), 1);
        assert!(channel_order(ChannelOrder::Unknown).is_err());
    }
}
