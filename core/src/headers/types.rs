//! headers/types.rs
//! Frame header struct, control-frame type registry and flags.

use num_enum::TryFromPrimitive;

use crate::constants::{frame_type_ids, FRAME_HEAD_LEN, LENGTH_MASK, SPDY_VERSION, VERSION_MASK};

/// Control frame types (header registry).
#[repr(u16)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, TryFromPrimitive)]
pub enum FrameType {
    SynStream = frame_type_ids::SYN_STREAM,
    SynReply  = frame_type_ids::SYN_REPLY,
    RstStream = frame_type_ids::RST_STREAM,
    Settings  = frame_type_ids::SETTINGS,
    Noop      = frame_type_ids::NOOP,
    Ping      = frame_type_ids::PING,
    Goaway    = frame_type_ids::GOAWAY,
    Headers   = frame_type_ids::HEADERS,
}

impl FrameType {
    /// Lowercase wire name, for logs.
    pub fn as_str(self) -> &'static str {
        match self {
            FrameType::SynStream => "syn_stream",
            FrameType::SynReply  => "syn_reply",
            FrameType::RstStream => "rst_stream",
            FrameType::Settings  => "settings",
            FrameType::Noop      => "noop",
            FrameType::Ping      => "ping",
            FrameType::Goaway    => "goaway",
            FrameType::Headers   => "headers",
        }
    }
}

bitflags::bitflags! {
    /// Control frame flags (byte 4 of the header).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ControlFlags: u8 {
        /// Sender half-closes the stream with this frame.
        const FIN = 0x01;

        /// Recipient may not send on this stream (SYN_STREAM only).
        const UNIDIRECTIONAL = 0x02;
    }
}

/// Common frame header.
///
/// `frame_type` keeps the raw 16-bit code so unknown types survive a
/// decode/encode cycle; use `frame_type_enum()` for the typed view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHeader {
    pub is_control: bool,
    /// 15-bit protocol version.
    pub version: u16,
    /// Raw type code (bytes 2..4).
    pub frame_type: u16,
    /// Raw flags byte; unknown bits are preserved.
    pub flags: u8,
    /// 24-bit payload length, excluding these 8 bytes.
    pub length: u32,
}

impl FrameHeader {
    pub const LEN: usize = FRAME_HEAD_LEN;

    /// Control header at the current protocol version.
    pub fn control(frame_type: FrameType, flags: ControlFlags, length: u32) -> Self {
        debug_assert!(length <= LENGTH_MASK, "length exceeds 24 bits");
        Self {
            is_control: true,
            version: SPDY_VERSION & VERSION_MASK,
            frame_type: frame_type as u16,
            flags: flags.bits(),
            length,
        }
    }

    /// Convert raw u16 → FrameType enum.
    pub fn frame_type_enum(&self) -> Option<FrameType> {
        FrameType::try_from(self.frame_type).ok()
    }

    /// Flags as known bits, unknown bits retained.
    pub fn control_flags(&self) -> ControlFlags {
        ControlFlags::from_bits_retain(self.flags)
    }

    /// Convenience: human-readable type name.
    pub fn frame_type_str(&self) -> &'static str {
        match self.frame_type_enum() {
            Some(t) => t.as_str(),
            None => "unknown",
        }
    }
}
