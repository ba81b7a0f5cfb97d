use byteorder::{BigEndian, ByteOrder};
use bytes::Bytes;

use crate::compression::Decompressor;
use crate::constants::{
    PRIORITY_SHIFT, RST_STREAM_PAYLOAD_LEN, STREAM_ID_MASK, SYN_REPLY_FIXED_LEN,
    SYN_STREAM_FIXED_LEN,
};
use crate::framing::types::{Frame, RstStream, SynReply, SynStream};
use crate::headers::{unpack_header, FrameHeader, FrameType};
use crate::nv::{unpack_nv_bytes, NameValueBlock};
use crate::types::FrameError;

/// Unpack a SYN_STREAM frame.
///
/// `head` holds the 8-byte common header, `payload` the `hd.length` bytes
/// after it. The name/value block is inflated through `inflater`, producing
/// at most `max_output` bytes.
///
/// # Errors
/// Decompression failures (including `OutputLimitExceeded`) poison
/// `inflater`; the connection must be closed.
pub fn unpack_syn_stream<D: Decompressor + ?Sized>(
    head: &[u8],
    payload: &[u8],
    inflater: &mut D,
    max_output: usize,
) -> Result<SynStream, FrameError> {
    let hd = unpack_header(head)?;
    expect_type(&hd, FrameType::SynStream)?;
    check_payload(&hd, payload, SYN_STREAM_FIXED_LEN)?;

    let stream_id = BigEndian::read_u32(&payload[0..4]) & STREAM_ID_MASK;
    let assoc_stream_id = BigEndian::read_u32(&payload[4..8]) & STREAM_ID_MASK;
    let pri = payload[8] >> PRIORITY_SHIFT;

    let nv = inflate_nv(&payload[SYN_STREAM_FIXED_LEN..], inflater, max_output)?;

    tracing::debug!(stream_id, assoc_stream_id, pri, pairs = nv.len(), length = hd.length, "unpacked syn_stream");
    Ok(SynStream { hd, stream_id, assoc_stream_id, pri, nv })
}

/// Unpack a SYN_REPLY frame. See `unpack_syn_stream` for the argument contract.
pub fn unpack_syn_reply<D: Decompressor + ?Sized>(
    head: &[u8],
    payload: &[u8],
    inflater: &mut D,
    max_output: usize,
) -> Result<SynReply, FrameError> {
    let hd = unpack_header(head)?;
    expect_type(&hd, FrameType::SynReply)?;
    check_payload(&hd, payload, SYN_REPLY_FIXED_LEN)?;

    let stream_id = BigEndian::read_u32(&payload[0..4]) & STREAM_ID_MASK;
    let nv = inflate_nv(&payload[SYN_REPLY_FIXED_LEN..], inflater, max_output)?;

    tracing::debug!(stream_id, pairs = nv.len(), length = hd.length, "unpacked syn_reply");
    Ok(SynReply { hd, stream_id, nv })
}

/// Unpack a RST_STREAM frame. The payload must be exactly 8 bytes.
pub fn unpack_rst_stream(head: &[u8], payload: &[u8]) -> Result<RstStream, FrameError> {
    let hd = unpack_header(head)?;
    expect_type(&hd, FrameType::RstStream)?;
    check_payload(&hd, payload, RST_STREAM_PAYLOAD_LEN)?;
    if payload.len() != RST_STREAM_PAYLOAD_LEN {
        return Err(FrameError::InvalidLength { have: payload.len(), need: RST_STREAM_PAYLOAD_LEN });
    }

    let stream_id = BigEndian::read_u32(&payload[0..4]) & STREAM_ID_MASK;
    let status_code = BigEndian::read_u32(&payload[4..8]);

    tracing::debug!(stream_id, status_code, "unpacked rst_stream");
    Ok(RstStream { hd, stream_id, status_code })
}

/// Unpack whichever supported control frame `head` announces.
///
/// # Errors
/// - `FrameError::UnsupportedFrameType` for data frames and control types
///   without an unpacker here.
pub fn unpack_frame<D: Decompressor + ?Sized>(
    head: &[u8],
    payload: &[u8],
    inflater: &mut D,
    max_output: usize,
) -> Result<Frame, FrameError> {
    let hd = unpack_header(head)?;
    if !hd.is_control {
        return Err(FrameError::UnsupportedFrameType(hd.frame_type));
    }

    match hd.frame_type_enum() {
        Some(FrameType::SynStream) => {
            unpack_syn_stream(head, payload, inflater, max_output).map(Frame::SynStream)
        }
        Some(FrameType::SynReply) => {
            unpack_syn_reply(head, payload, inflater, max_output).map(Frame::SynReply)
        }
        Some(FrameType::RstStream) => unpack_rst_stream(head, payload).map(Frame::RstStream),
        _ => Err(FrameError::UnsupportedFrameType(hd.frame_type)),
    }
}

fn expect_type(hd: &FrameHeader, expected: FrameType) -> Result<(), FrameError> {
    if !hd.is_control || hd.frame_type != expected as u16 {
        return Err(FrameError::UnexpectedFrameType {
            expected: expected as u16,
            actual: hd.frame_type,
        });
    }
    Ok(())
}

/// Payload must match the declared length and hold the fixed fields.
fn check_payload(hd: &FrameHeader, payload: &[u8], fixed_len: usize) -> Result<(), FrameError> {
    if payload.len() < fixed_len {
        return Err(FrameError::InvalidLength { have: payload.len(), need: fixed_len });
    }
    if payload.len() != hd.length as usize {
        return Err(FrameError::InvalidLength { have: payload.len(), need: hd.length as usize });
    }
    Ok(())
}

fn inflate_nv<D: Decompressor + ?Sized>(
    compressed: &[u8],
    inflater: &mut D,
    max_output: usize,
) -> Result<NameValueBlock, FrameError> {
    let raw = inflater.decompress(compressed, max_output)?;
    unpack_nv_bytes(Bytes::from(raw))
}
