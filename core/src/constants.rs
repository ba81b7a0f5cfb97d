//! Wire-level constants shared by every codec layer.

/// Protocol version written into every control frame we pack.
pub const SPDY_VERSION: u16 = 2;

/// Low 31 bits of a stream-id slot; bit 31 is reserved and always zero.
pub const STREAM_ID_MASK: u32 = 0x7fff_ffff;
/// 24-bit payload length field.
pub const LENGTH_MASK: u32 = 0x00ff_ffff;
/// 15-bit version field (bit 15 of the first word is the control flag).
pub const VERSION_MASK: u16 = 0x7fff;
/// Control flag in the first 16-bit word of the header.
pub const CONTROL_BIT: u16 = 0x8000;

/// Common frame header size in bytes.
pub const FRAME_HEAD_LEN: usize = 8;
/// Largest payload the 24-bit length field can describe.
pub const MAX_FRAME_PAYLOAD_LEN: usize = LENGTH_MASK as usize;

/// SYN_STREAM fixed fields: stream id (4) + assoc id (4) + priority (1) + unused (1).
pub const SYN_STREAM_FIXED_LEN: usize = 10;
/// SYN_REPLY fixed fields: stream id (4) + unused (2).
pub const SYN_REPLY_FIXED_LEN: usize = 6;
/// RST_STREAM payload: stream id (4) + status code (4).
pub const RST_STREAM_PAYLOAD_LEN: usize = 8;
/// RST_STREAM frames are always this long on the wire.
pub const RST_STREAM_FRAME_LEN: usize = FRAME_HEAD_LEN + RST_STREAM_PAYLOAD_LEN;

/// Priority occupies the top 3 bits of its byte.
pub const PRIORITY_SHIFT: u8 = 5;
/// Largest priority value (lowest urgency is 7).
pub const MAX_PRIORITY: u8 = 0x07;

/// Name/value block: pair count, name length and value length are all u32.
pub const NV_COUNT_LEN: usize = 4;
pub const NV_LENGTH_LEN: usize = 4;
/// Smallest possible encoded pair (two empty length prefixes).
pub const NV_MIN_PAIR_LEN: usize = 2 * NV_LENGTH_LEN;
/// Separator joining values of a repeated header name.
pub const NV_VALUE_SEPARATOR: u8 = 0x00;

/// Default decompressed name/value block cap (16 MiB).
pub const DEFAULT_MAX_DECOMPRESSED_LEN: usize = 16 * 1024 * 1024;

/// Control frame type codes (u16 on the wire).
pub mod frame_type_ids {
    pub const SYN_STREAM: u16 = 0x0001;
    pub const SYN_REPLY: u16  = 0x0002;
    pub const RST_STREAM: u16 = 0x0003;
    pub const SETTINGS: u16   = 0x0004;
    pub const NOOP: u16       = 0x0005;
    pub const PING: u16       = 0x0006;
    pub const GOAWAY: u16     = 0x0007;
    pub const HEADERS: u16    = 0x0008;
}

/// RST_STREAM status codes.
pub mod status_codes {
    pub const PROTOCOL_ERROR: u32        = 1;
    pub const INVALID_STREAM: u32        = 2;
    pub const REFUSED_STREAM: u32        = 3;
    pub const UNSUPPORTED_VERSION: u32   = 4;
    pub const CANCEL: u32                = 5;
    pub const INTERNAL_ERROR: u32        = 6;
    pub const FLOW_CONTROL_ERROR: u32    = 7;
}
