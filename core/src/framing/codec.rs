//! framing/codec.rs
//!
//! Per-connection convenience: both directional zlib contexts plus the config.
//!
//! Design notes:
//! - Owned by the session layer, one per connection. Every method takes
//!   `&mut self`: each direction's stream state only makes sense in wire order,
//!   so share it across tasks only behind a lock.
//! - Once either direction reports an error that `is_fatal_to_context`, the
//!   codec keeps failing and the connection should be torn down.

use crate::compression::{Deflater, Inflater};
use crate::config::CodecConfig;
use crate::constants::FRAME_HEAD_LEN;
use crate::framing::decode::unpack_frame;
use crate::framing::encode::pack_frame;
use crate::framing::types::Frame;
use crate::headers::unpack_header;
use crate::types::FrameError;

pub struct FrameCodec {
    config: CodecConfig,
    deflater: Deflater,
    inflater: Inflater,
}

impl FrameCodec {
    pub fn new(config: CodecConfig) -> Result<Self, FrameError> {
        config.validate()?;
        Ok(Self {
            deflater: Deflater::from_config(&config)?,
            inflater: Inflater::new(),
            config,
        })
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Pack a frame through the outbound context; sets the frame's header length.
    pub fn pack(&mut self, frame: &mut Frame) -> Result<Vec<u8>, FrameError> {
        pack_frame(frame, &mut self.deflater)
    }

    /// Unpack a frame whose header and payload were read separately.
    pub fn unpack(&mut self, head: &[u8], payload: &[u8]) -> Result<Frame, FrameError> {
        unpack_frame(head, payload, &mut self.inflater, self.config.max_decompressed_len)
    }

    /// Unpack the first frame of a contiguous buffer.
    ///
    /// # Returns
    /// - `Ok((frame, consumed))` where `consumed` is header + payload length.
    /// - `Err(FrameError::InvalidLength)` if the buffer ends before the declared payload does.
    pub fn unpack_wire(&mut self, wire: &[u8]) -> Result<(Frame, usize), FrameError> {
        let hd = unpack_header(wire)?;
        let total = FRAME_HEAD_LEN + hd.length as usize;
        if wire.len() < total {
            return Err(FrameError::InvalidLength { have: wire.len(), need: total });
        }

        let frame = self.unpack(&wire[..FRAME_HEAD_LEN], &wire[FRAME_HEAD_LEN..total])?;
        Ok((frame, total))
    }

    /// True once either direction has failed and the connection must close.
    pub fn is_poisoned(&self) -> bool {
        self.deflater.is_poisoned() || self.inflater.is_poisoned()
    }
}
