//! headers/encode.rs
//!
//! Header encoding.
//!
//! Layout (big-endian):
//!
//! ```text
//! [ C(1) | version (15) ]   bytes 0..2
//! [ type (16) ]             bytes 2..4
//! [ flags (8) ]             byte  4
//! [ length (24) ]           bytes 5..8
//! ```

use byteorder::{BigEndian, ByteOrder};

use crate::constants::{CONTROL_BIT, FRAME_HEAD_LEN, LENGTH_MASK, VERSION_MASK};
use crate::headers::types::FrameHeader;

/// Serialize a `FrameHeader` into its fixed 8-byte wire form.
///
/// Out-of-range version/length bits are masked off; frame packers check
/// `length` against the 24-bit range before building the header.
#[inline]
pub fn pack_header(h: &FrameHeader) -> [u8; FRAME_HEAD_LEN] {
    debug_assert!(h.version <= VERSION_MASK, "version exceeds 15 bits");
    debug_assert!(h.length <= LENGTH_MASK, "length exceeds 24 bits");

    let mut out = [0u8; FRAME_HEAD_LEN];

    let mut first = h.version & VERSION_MASK;
    if h.is_control {
        first |= CONTROL_BIT;
    }
    BigEndian::write_u16(&mut out[0..2], first);        // 0..2 control bit + version
    BigEndian::write_u16(&mut out[2..4], h.frame_type); // 2..4 type
    // flags share a word with the length; write the length first, then overwrite byte 4
    BigEndian::write_u32(&mut out[4..8], h.length & LENGTH_MASK);
    out[4] = h.flags;                                   // 4    flags

    out
}
