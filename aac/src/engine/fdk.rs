//! libfdk-aac backend.
//!
//! Raw bindings come from `fdk-aac-sys`, which builds the library from its
//! bundled sources. Parameter, transport and status values are passed as
//! plain integers from the parent module so the adapters stay independent
//! of the generated enum names.

use std::os::raw::{c_int, c_void};
use std::{mem, ptr};

use fdk_aac_sys as sys;

use super::{
    AAC_DEC_OK, AAC_DEC_OUT_OF_MEMORY, AACENC_OK, DECODER_LAYERS, DecoderEngine, EncodeOutcome,
    EncoderEngine, EncoderParam, IN_AUDIO_DATA, OUT_BITSTREAM_DATA, Pcm, Status, StreamInfo,
};

/// AACENC_INVALID_HANDLE
const AACENC_INVALID_HANDLE: Status = 0x0020;

/// AAC_DEC_INVALID_HANDLE
const AAC_DEC_INVALID_HANDLE: Status = 0x2001;

/// FDK AAC encoder instance.
pub struct FdkEncoder {
    handle: sys::HANDLE_AACENCODER,
    // 4-byte aligned copy of the PCM input.
    pcm: Vec<u32>,
}

// Safety: The encoder handle is owned by exactly one FdkEncoder and never shared.
unsafe impl Send for FdkEncoder {}

impl FdkEncoder {
    /// Opens an encoder with all modules and the maximum channel count.
    pub fn open() -> Result<Self, Status> {
        let mut handle: sys::HANDLE_AACENCODER = ptr::null_mut();
        let err = unsafe { sys::aacEncOpen(&mut handle, 0, 0) } as Status;
        if err != AACENC_OK {
            return Err(err);
        }
        Ok(Self {
            handle,
            pcm: Vec::new(),
        })
    }
}

impl Drop for FdkEncoder {
    fn drop(&mut self) {
        if !self.handle.is_null() {
            unsafe { sys::aacEncClose(&mut self.handle) };
            self.handle = ptr::null_mut();
        }
    }
}

impl EncoderEngine for FdkEncoder {
    fn set_param(&mut self, param: EncoderParam, value: u32) -> Result<(), Status> {
        if self.handle.is_null() {
            return Err(AACENC_INVALID_HANDLE);
        }
        let err = unsafe { sys::aacEncoder_SetParam(self.handle, param.code() as _, value as _) }
            as Status;
        if err != AACENC_OK {
            return Err(err);
        }
        Ok(())
    }

    fn init(&mut self) -> Result<(), Status> {
        if self.handle.is_null() {
            return Err(AACENC_INVALID_HANDLE);
        }
        let err = unsafe {
            sys::aacEncEncode(
                self.handle,
                ptr::null(),
                ptr::null(),
                ptr::null(),
                ptr::null_mut(),
            )
        } as Status;
        if err != AACENC_OK {
            return Err(err);
        }
        Ok(())
    }

    fn encode(
        &mut self,
        input: &[u8],
        in_el_size: usize,
        output: &mut [u8],
        out_el_size: usize,
    ) -> Result<EncodeOutcome, Status> {
        if self.handle.is_null() {
            return Err(AACENC_INVALID_HANDLE);
        }

        self.pcm.clear();
        self.pcm.resize(input.len().div_ceil(4), 0);
        unsafe {
            ptr::copy_nonoverlapping(input.as_ptr(), self.pcm.as_mut_ptr().cast::<u8>(), input.len());
        }

        // An empty input asks the engine to drain its delay line.
        let num_in_samples = if input.is_empty() {
            -1
        } else {
            input.len().checked_div(in_el_size).unwrap_or(0) as c_int
        };

        let mut in_ptr = self.pcm.as_mut_ptr().cast::<c_void>();
        let mut in_id: c_int = IN_AUDIO_DATA;
        let mut in_size = input.len() as c_int;
        let mut in_el = in_el_size as c_int;
        let in_desc = sys::AACENC_BufDesc {
            numBufs: 1,
            bufs: &mut in_ptr as *mut *mut c_void as *mut _,
            bufferIdentifiers: &mut in_id as *mut c_int as *mut _,
            bufSizes: &mut in_size as *mut c_int as *mut _,
            bufElSizes: &mut in_el as *mut c_int as *mut _,
        };

        let mut out_ptr = output.as_mut_ptr().cast::<c_void>();
        let mut out_id: c_int = OUT_BITSTREAM_DATA;
        let mut out_size = output.len().checked_div(out_el_size).unwrap_or(0) as c_int;
        let mut out_el = out_el_size as c_int;
        let out_desc = sys::AACENC_BufDesc {
            numBufs: 1,
            bufs: &mut out_ptr as *mut *mut c_void as *mut _,
            bufferIdentifiers: &mut out_id as *mut c_int as *mut _,
            bufSizes: &mut out_size as *mut c_int as *mut _,
            bufElSizes: &mut out_el as *mut c_int as *mut _,
        };

        let mut in_args: sys::AACENC_InArgs = unsafe { mem::zeroed() };
        in_args.numInSamples = num_in_samples as _;
        in_args.numAncBytes = 0;
        let mut out_args: sys::AACENC_OutArgs = unsafe { mem::zeroed() };

        let err = unsafe {
            sys::aacEncEncode(self.handle, &in_desc, &out_desc, &in_args, &mut out_args)
        } as Status;
        if err != AACENC_OK {
            return Err(err);
        }

        Ok(EncodeOutcome {
            out_bytes: out_args.numOutBytes.max(0) as usize,
            in_samples: out_args.numInSamples.max(0) as usize,
        })
    }

    fn close(&mut self) -> Result<(), Status> {
        if self.handle.is_null() {
            return Ok(());
        }
        let err = unsafe { sys::aacEncClose(&mut self.handle) } as Status;
        self.handle = ptr::null_mut();
        if err != AACENC_OK {
            return Err(err);
        }
        Ok(())
    }
}

/// FDK AAC decoder instance.
pub struct FdkDecoder {
    handle: sys::HANDLE_AACDECODER,
}

// Safety: The decoder handle is owned by exactly one FdkDecoder and never shared.
unsafe impl Send for FdkDecoder {}

impl FdkDecoder {
    /// Opens a decoder for the native transport type with `layers` sub-streams.
    pub fn open(transport: i32, layers: u32) -> Result<Self, Status> {
        let handle = unsafe { sys::aacDecoder_Open(transport as _, layers as _) };
        if handle.is_null() {
            return Err(AAC_DEC_OUT_OF_MEMORY);
        }
        Ok(Self { handle })
    }
}

impl Drop for FdkDecoder {
    fn drop(&mut self) {
        if !self.handle.is_null() {
            unsafe { sys::aacDecoder_Close(self.handle) };
            self.handle = ptr::null_mut();
        }
    }
}

impl DecoderEngine for FdkDecoder {
    fn config_raw(&mut self, asc: &[u8]) -> Result<(), Status> {
        if self.handle.is_null() {
            return Err(AAC_DEC_INVALID_HANDLE);
        }
        // One entry per layer; only the base layer carries a config.
        let mut confs: [*mut u8; DECODER_LAYERS as usize] = [ptr::null_mut(); DECODER_LAYERS as usize];
        let mut lens: [u32; DECODER_LAYERS as usize] = [0; DECODER_LAYERS as usize];
        confs[0] = asc.as_ptr() as *mut u8;
        lens[0] = asc.len() as u32;

        let err = unsafe {
            sys::aacDecoder_ConfigRaw(self.handle, confs.as_mut_ptr().cast(), lens.as_ptr().cast())
        } as Status;
        if err != AAC_DEC_OK {
            return Err(err);
        }
        Ok(())
    }

    fn fill(&mut self, data: &[u8]) -> Result<usize, Status> {
        if self.handle.is_null() {
            return Err(AAC_DEC_INVALID_HANDLE);
        }
        let mut buf = data.as_ptr() as *mut u8;
        let size = data.len() as u32;
        let mut valid = size;

        let err = unsafe {
            sys::aacDecoder_Fill(
                self.handle,
                (&mut buf as *mut *mut u8).cast(),
                (&size as *const u32).cast(),
                (&mut valid as *mut u32).cast(),
            )
        } as Status;
        if err != AAC_DEC_OK {
            return Err(err);
        }
        Ok(valid as usize)
    }

    fn decode_frame(&mut self, pcm: &mut [Pcm]) -> Result<(), Status> {
        if self.handle.is_null() {
            return Err(AAC_DEC_INVALID_HANDLE);
        }
        let err = unsafe {
            sys::aacDecoder_DecodeFrame(self.handle, pcm.as_mut_ptr().cast(), pcm.len() as _, 0)
        } as Status;
        if err != AAC_DEC_OK {
            return Err(err);
        }
        Ok(())
    }

    fn stream_info(&self) -> Option<StreamInfo> {
        if self.handle.is_null() {
            return None;
        }
        let info = unsafe { sys::aacDecoder_GetStreamInfo(self.handle) };
        if info.is_null() {
            return None;
        }
        let info = unsafe { &*info };
        Some(StreamInfo {
            sample_rate: info.sampleRate as i32,
            frame_size: info.frameSize as i32,
            num_channels: info.numChannels as i32,
            aot: info.aot as i32,
        })
    }

    fn close(&mut self) {
        if !self.handle.is_null() {
            unsafe { sys::aacDecoder_Close(self.handle) };
            self.handle = ptr::null_mut();
        }
    }
}
