use num_enum::TryFromPrimitive;

use crate::constants::{
    status_codes, MAX_PRIORITY, RST_STREAM_PAYLOAD_LEN, STREAM_ID_MASK,
};
use crate::headers::{ControlFlags, FrameHeader, FrameType};
use crate::nv::NameValueBlock;

/// RST_STREAM status registry.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
pub enum RstStatusCode {
    ProtocolError     = status_codes::PROTOCOL_ERROR,
    InvalidStream     = status_codes::INVALID_STREAM,
    RefusedStream     = status_codes::REFUSED_STREAM,
    UnsupportedVersion = status_codes::UNSUPPORTED_VERSION,
    Cancel            = status_codes::CANCEL,
    InternalError     = status_codes::INTERNAL_ERROR,
    FlowControlError  = status_codes::FLOW_CONTROL_ERROR,
}

/// SYN_STREAM: opens a stream and carries its request headers.
///
/// The frame owns its `NameValueBlock`; dropping the frame releases it.
/// `hd.length` is filled in by `pack_syn_stream`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynStream {
    pub hd: FrameHeader,
    pub stream_id: u32,
    pub assoc_stream_id: u32,
    /// 0 (highest) ..= 7 (lowest).
    pub pri: u8,
    pub nv: NameValueBlock,
}

impl SynStream {
    /// Take ownership of `nv`. A stream id not assigned yet is 0.
    pub fn new(
        flags: ControlFlags,
        stream_id: u32,
        assoc_stream_id: u32,
        pri: u8,
        nv: NameValueBlock,
    ) -> Self {
        debug_assert!(pri <= MAX_PRIORITY, "priority exceeds 3 bits");
        Self {
            hd: FrameHeader::control(FrameType::SynStream, flags, 0),
            stream_id: stream_id & STREAM_ID_MASK,
            assoc_stream_id: assoc_stream_id & STREAM_ID_MASK,
            pri: pri & MAX_PRIORITY,
            nv,
        }
    }

    pub fn flags(&self) -> ControlFlags {
        self.hd.control_flags()
    }

    /// Give the header list back, consuming the frame.
    pub fn into_nv_block(self) -> NameValueBlock {
        self.nv
    }
}

/// SYN_REPLY: accepts a stream and carries its response headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynReply {
    pub hd: FrameHeader,
    pub stream_id: u32,
    pub nv: NameValueBlock,
}

impl SynReply {
    /// Take ownership of `nv`.
    pub fn new(flags: ControlFlags, stream_id: u32, nv: NameValueBlock) -> Self {
        Self {
            hd: FrameHeader::control(FrameType::SynReply, flags, 0),
            stream_id: stream_id & STREAM_ID_MASK,
            nv,
        }
    }

    pub fn flags(&self) -> ControlFlags {
        self.hd.control_flags()
    }

    pub fn into_nv_block(self) -> NameValueBlock {
        self.nv
    }
}

/// RST_STREAM: aborts a stream. Always 16 bytes on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RstStream {
    pub hd: FrameHeader,
    pub stream_id: u32,
    pub status_code: u32,
}

impl RstStream {
    pub fn new(stream_id: u32, status_code: u32) -> Self {
        Self {
            hd: FrameHeader::control(
                FrameType::RstStream,
                ControlFlags::empty(),
                RST_STREAM_PAYLOAD_LEN as u32,
            ),
            stream_id: stream_id & STREAM_ID_MASK,
            status_code,
        }
    }

    /// Typed status, `None` for codes outside the registry.
    pub fn status(&self) -> Option<RstStatusCode> {
        RstStatusCode::try_from(self.status_code).ok()
    }
}

/// Any control frame this crate packs and unpacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    SynStream(SynStream),
    SynReply(SynReply),
    RstStream(RstStream),
}

impl Frame {
    pub fn header(&self) -> &FrameHeader {
        match self {
            Frame::SynStream(f) => &f.hd,
            Frame::SynReply(f) => &f.hd,
            Frame::RstStream(f) => &f.hd,
        }
    }

    pub fn frame_type(&self) -> FrameType {
        match self {
            Frame::SynStream(_) => FrameType::SynStream,
            Frame::SynReply(_) => FrameType::SynReply,
            Frame::RstStream(_) => FrameType::RstStream,
        }
    }

    pub fn stream_id(&self) -> u32 {
        match self {
            Frame::SynStream(f) => f.stream_id,
            Frame::SynReply(f) => f.stream_id,
            Frame::RstStream(f) => f.stream_id,
        }
    }
}

impl From<SynStream> for Frame {
    fn from(f: SynStream) -> Self {
        Frame::SynStream(f)
    }
}

impl From<SynReply> for Frame {
    fn from(f: SynReply) -> Self {
        Frame::SynReply(f)
    }
}

impl From<RstStream> for Frame {
    fn from(f: RstStream) -> Self {
        Frame::RstStream(f)
    }
}
