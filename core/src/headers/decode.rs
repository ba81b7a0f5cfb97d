//! headers/decode.rs
//!
//! Header decoding. Any 8 bytes form a syntactically valid header.

use byteorder::{BigEndian, ByteOrder};

use crate::constants::{CONTROL_BIT, LENGTH_MASK, VERSION_MASK};
use crate::headers::types::FrameHeader;
use crate::types::FrameError;

/// Deserialize the first 8 bytes of `buf` into a `FrameHeader`.
///
/// # Errors
/// - `FrameError::InvalidLength` if fewer than 8 bytes are supplied.
#[inline]
pub fn unpack_header(buf: &[u8]) -> Result<FrameHeader, FrameError> {
    if buf.len() < FrameHeader::LEN {
        return Err(FrameError::InvalidLength { have: buf.len(), need: FrameHeader::LEN });
    }

    let first = BigEndian::read_u16(&buf[0..2]);
    let frame_type = BigEndian::read_u16(&buf[2..4]);
    let flags = buf[4];
    let length = BigEndian::read_u32(&buf[4..8]) & LENGTH_MASK;

    Ok(FrameHeader {
        is_control: first & CONTROL_BIT != 0,
        version: first & VERSION_MASK,
        frame_type,
        flags,
        length,
    })
}

/// True iff the most significant bit of the frame's first byte is set.
#[inline]
pub fn is_control_frame(first_byte: u8) -> bool {
    first_byte & 0x80 != 0
}
