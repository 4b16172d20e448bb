//! Recording engine doubles for adapter tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::engine::{
    AAC_DEC_NOT_ENOUGH_BITS, DecoderEngine, EncodeOutcome, EncoderEngine, EncoderParam, Pcm,
    Status, StreamInfo,
};

/// Shared view of everything a [`MockEncoder`] saw.
#[derive(Debug, Default)]
pub struct EncoderLog {
    pub params: Vec<(EncoderParam, u32)>,
    pub inits: usize,
    /// (input bytes, input element size, output bytes, output element size)
    pub encodes: Vec<(Vec<u8>, usize, usize, usize)>,
    pub closes: usize,

    pub fail_param: Option<(EncoderParam, Status)>,
    pub fail_init: Option<Status>,
    pub fail_close: Option<Status>,
    pub results: VecDeque<Result<EncodeOutcome, Status>>,
}

#[derive(Clone, Default)]
pub struct MockEncoder {
    log: Arc<Mutex<EncoderLog>>,
}

impl MockEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&self) -> MutexGuard<'_, EncoderLog> {
        self.log.lock().unwrap()
    }
}

impl EncoderEngine for MockEncoder {
    fn set_param(&mut self, param: EncoderParam, value: u32) -> Result<(), Status> {
        let mut log = self.log();
        log.params.push((param, value));
        match log.fail_param {
            Some((p, code)) if p == param => Err(code),
            _ => Ok(()),
        }
    }

    fn init(&mut self) -> Result<(), Status> {
        let mut log = self.log();
        log.inits += 1;
        log.fail_init.map_or(Ok(()), Err)
    }

    fn encode(
        &mut self,
        input: &[u8],
        in_el_size: usize,
        output: &mut [u8],
        out_el_size: usize,
    ) -> Result<EncodeOutcome, Status> {
        let mut log = self.log();
        log.encodes
            .push((input.to_vec(), in_el_size, output.len(), out_el_size));
        match log.results.pop_front() {
            Some(Ok(outcome)) => {
                for (i, b) in output.iter_mut().take(outcome.out_bytes).enumerate() {
                    *b = i as u8;
                }
                Ok(outcome)
            }
            Some(Err(code)) => Err(code),
            None => Ok(EncodeOutcome {
                out_bytes: 0,
                in_samples: input.len().checked_div(in_el_size).unwrap_or(0),
            }),
        }
    }

    fn close(&mut self) -> Result<(), Status> {
        let mut log = self.log();
        log.closes += 1;
        log.fail_close.map_or(Ok(()), Err)
    }
}

/// Shared view of everything a [`MockDecoder`] saw.
#[derive(Debug, Default)]
pub struct DecoderLog {
    pub configs: Vec<Vec<u8>>,
    pub fills: Vec<usize>,
    pub decodes: usize,
    pub closes: usize,

    /// Bytes of input that make one frame.
    pub frame_bytes: usize,
    /// Maximum bytes the reservoir holds.
    pub capacity: usize,
    pub reservoir: usize,
    /// Stream reported after each decoded frame.
    pub info: StreamInfo,
    pub fail_config: Option<Status>,
    pub fail_fill: Option<Status>,
    pub fail_decode: Option<Status>,
}

#[derive(Clone)]
pub struct MockDecoder {
    log: Arc<Mutex<DecoderLog>>,
}

impl MockDecoder {
    /// A decoder that needs `frame_bytes` per frame and reports `info`.
    pub fn new(frame_bytes: usize, capacity: usize, info: StreamInfo) -> Self {
        let log = DecoderLog {
            frame_bytes,
            capacity,
            info,
            ..Default::default()
        };
        Self {
            log: Arc::new(Mutex::new(log)),
        }
    }

    pub fn log(&self) -> MutexGuard<'_, DecoderLog> {
        self.log.lock().unwrap()
    }
}

impl DecoderEngine for MockDecoder {
    fn config_raw(&mut self, asc: &[u8]) -> Result<(), Status> {
        let mut log = self.log();
        log.configs.push(asc.to_vec());
        log.fail_config.map_or(Ok(()), Err)
    }

    fn fill(&mut self, data: &[u8]) -> Result<usize, Status> {
        let mut log = self.log();
        log.fills.push(data.len());
        if let Some(code) = log.fail_fill {
            return Err(code);
        }
        let room = log.capacity - log.reservoir;
        let taken = room.min(data.len());
        log.reservoir += taken;
        Ok(data.len() - taken)
    }

    fn decode_frame(&mut self, pcm: &mut [Pcm]) -> Result<(), Status> {
        let mut log = self.log();
        log.decodes += 1;
        if let Some(code) = log.fail_decode {
            return Err(code);
        }
        if log.reservoir < log.frame_bytes {
            return Err(AAC_DEC_NOT_ENOUGH_BITS);
        }
        log.reservoir -= log.frame_bytes;
        let samples = (log.info.frame_size * log.info.num_channels) as usize;
        for (i, s) in pcm.iter_mut().take(samples).enumerate() {
            *s = i as Pcm;
        }
        Ok(())
    }

    fn stream_info(&self) -> Option<StreamInfo> {
        Some(self.log().info)
    }

    fn close(&mut self) {
        self.log().closes += 1;
    }
}
