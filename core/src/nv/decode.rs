//! nv/decode.rs
//!
//! Name/value block decoding with strict bounds checks.
//!
//! Every declared length is checked against the remaining input before it is
//! read, and the pair count is checked against the smallest possible pair
//! size before anything is allocated.

use byteorder::{BigEndian, ByteOrder};
use bytes::Bytes;

use crate::constants::{NV_COUNT_LEN, NV_LENGTH_LEN, NV_MIN_PAIR_LEN};
use crate::nv::types::{NameValue, NameValueBlock};
use crate::types::FrameError;

/// Parse an uncompressed name/value block, copying it once into shared storage.
pub fn unpack_nv(input: &[u8]) -> Result<NameValueBlock, FrameError> {
    unpack_nv_bytes(Bytes::copy_from_slice(input))
}

/// Parse an uncompressed name/value block. Names and values are zero-copy
/// slices of `buf`.
///
/// # Errors
/// - `FrameError::Parse` when a declared length runs past the end, the pair
///   count cannot fit in the remaining bytes, a name is empty, or bytes are
///   left over after the last pair.
pub fn unpack_nv_bytes(buf: Bytes) -> Result<NameValueBlock, FrameError> {
    if buf.len() < NV_COUNT_LEN {
        return Err(FrameError::Parse(format!(
            "block too short for pair count: {} < {}",
            buf.len(),
            NV_COUNT_LEN
        )));
    }

    let count = BigEndian::read_u32(&buf[0..NV_COUNT_LEN]) as usize;
    let mut off = NV_COUNT_LEN;

    let remaining = buf.len() - off;
    if count.checked_mul(NV_MIN_PAIR_LEN).map_or(true, |min| min > remaining) {
        return Err(FrameError::Parse(format!(
            "pair count {} inconsistent with {} remaining bytes",
            count, remaining
        )));
    }

    // Cursor helper: length-prefixed field as a slice of `buf`.
    fn take_field(buf: &Bytes, off: &mut usize, what: &str) -> Result<Bytes, FrameError> {
        if buf.len() - *off < NV_LENGTH_LEN {
            return Err(FrameError::Parse(format!("truncated {} length at offset {}", what, *off)));
        }
        let len = BigEndian::read_u32(&buf[*off..*off + NV_LENGTH_LEN]) as usize;
        *off += NV_LENGTH_LEN;

        if buf.len() - *off < len {
            return Err(FrameError::Parse(format!(
                "{} length {} runs past end of block at offset {}",
                what, len, *off
            )));
        }
        let field = buf.slice(*off..*off + len);
        *off += len;
        Ok(field)
    }

    let mut pairs = Vec::with_capacity(count);
    for _ in 0..count {
        let name = take_field(&buf, &mut off, "name")?;
        if name.is_empty() {
            return Err(FrameError::Parse(format!("empty name at offset {}", off)));
        }
        let value = take_field(&buf, &mut off, "value")?;
        pairs.push(NameValue { name, value });
    }

    if off != buf.len() {
        return Err(FrameError::Parse(format!(
            "{} trailing bytes after {} pairs",
            buf.len() - off,
            count
        )));
    }

    Ok(NameValueBlock::from_wire(pairs))
}
