//! nv/encode.rs
//!
//! Name/value block encoding.
//!
//! Layout (big-endian):
//!
//! ```text
//! [ pair count (4) ]
//! repeated: [ name len (4) ][ name ][ value len (4) ][ value ]
//! ```

use bytes::BufMut;

use crate::constants::{NV_COUNT_LEN, NV_LENGTH_LEN};
use crate::nv::types::NameValueBlock;
use crate::types::FrameError;

/// Exact number of bytes `pack_nv` writes for `block`.
///
/// Defined for any block, including one read off the wire with repeated or
/// unordered names. An empty block is 4 bytes.
pub fn count_nv_space(block: &NameValueBlock) -> usize {
    block.iter().fold(NV_COUNT_LEN, |acc, p| {
        acc + NV_LENGTH_LEN + p.name.len() + NV_LENGTH_LEN + p.value.len()
    })
}

/// Serialize `block` into a freshly allocated buffer of exactly
/// `count_nv_space(block)` bytes.
///
/// # Errors
/// - `FrameError::Parse` if a name is empty; peers reject such a block.
/// - `FrameError::FrameTooLarge` if the pair count or a name/value length does not fit u32.
/// - `FrameError::AllocationFailure` if the buffer cannot be reserved.
pub fn pack_nv(block: &NameValueBlock) -> Result<Vec<u8>, FrameError> {
    let need = count_nv_space(block);
    let mut out = Vec::new();
    out.try_reserve_exact(need).map_err(FrameError::alloc(need))?;
    pack_nv_into(block, &mut out)?;

    debug_assert_eq!(out.len(), need, "pack_nv wrote incorrect length");
    tracing::trace!(pairs = block.len(), bytes = out.len(), "packed name/value block");
    Ok(out)
}

/// Append the encoded block to `out`. Callers reserve space themselves.
///
/// Names are checked before anything is written, so `out` is untouched on
/// `FrameError::Parse`.
pub fn pack_nv_into(block: &NameValueBlock, out: &mut Vec<u8>) -> Result<(), FrameError> {
    if let Some(i) = block.iter().position(|p| p.name.is_empty()) {
        return Err(FrameError::Parse(format!("empty name in pair {}", i)));
    }

    fn put_len(out: &mut Vec<u8>, len: usize) -> Result<(), FrameError> {
        let v = u32::try_from(len)
            .map_err(|_| FrameError::FrameTooLarge { have: len, max: u32::MAX as usize })?;
        out.put_u32(v);
        Ok(())
    }

    put_len(out, block.len())?;
    for p in block {
        put_len(out, p.name.len())?;
        out.extend_from_slice(&p.name);
        put_len(out, p.value.len())?;
        out.extend_from_slice(&p.value);
    }
    Ok(())
}
