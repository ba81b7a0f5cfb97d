use bytes::BufMut;

use crate::compression::Compressor;
use crate::constants::{
    FRAME_HEAD_LEN, MAX_FRAME_PAYLOAD_LEN, MAX_PRIORITY, PRIORITY_SHIFT, RST_STREAM_FRAME_LEN,
    RST_STREAM_PAYLOAD_LEN, STREAM_ID_MASK, SYN_REPLY_FIXED_LEN, SYN_STREAM_FIXED_LEN,
};
use crate::framing::types::{Frame, RstStream, SynReply, SynStream};
use crate::headers::{pack_header, FrameHeader};
use crate::nv::{count_nv_space, pack_nv, NameValueBlock};
use crate::types::FrameError;

/// Pack a SYN_STREAM frame into a freshly allocated buffer.
///
/// Layout:
///
/// ```text
/// [ header (8) ]
/// [ R | stream id (31) ]
/// [ R | assoc stream id (31) ]
/// [ pri (3) | unused (5) ][ unused (8) ]
/// [ compressed name/value block ]
/// ```
///
/// `frame.hd.length` is set to the final payload length.
///
/// # Errors
/// Any error after the block reached `deflater` (including `FrameTooLarge`)
/// leaves the outbound zlib stream ahead of the peer's; the connection must
/// be closed.
pub fn pack_syn_stream<C: Compressor + ?Sized>(
    frame: &mut SynStream,
    deflater: &mut C,
) -> Result<Vec<u8>, FrameError> {
    let mut fixed = [0u8; SYN_STREAM_FIXED_LEN];
    let mut cursor = &mut fixed[..];
    cursor.put_u32(frame.stream_id & STREAM_ID_MASK);
    cursor.put_u32(frame.assoc_stream_id & STREAM_ID_MASK);
    cursor.put_u8((frame.pri & MAX_PRIORITY) << PRIORITY_SHIFT);
    cursor.put_u8(0);

    let out = pack_compressed(&mut frame.hd, &fixed, &frame.nv, deflater)?;
    tracing::debug!(
        stream_id = frame.stream_id,
        assoc_stream_id = frame.assoc_stream_id,
        pri = frame.pri,
        pairs = frame.nv.len(),
        length = frame.hd.length,
        "packed syn_stream"
    );
    Ok(out)
}

/// Pack a SYN_REPLY frame into a freshly allocated buffer.
///
/// Layout:
///
/// ```text
/// [ header (8) ]
/// [ R | stream id (31) ]
/// [ unused (16) ]
/// [ compressed name/value block ]
/// ```
pub fn pack_syn_reply<C: Compressor + ?Sized>(
    frame: &mut SynReply,
    deflater: &mut C,
) -> Result<Vec<u8>, FrameError> {
    let mut fixed = [0u8; SYN_REPLY_FIXED_LEN];
    let mut cursor = &mut fixed[..];
    cursor.put_u32(frame.stream_id & STREAM_ID_MASK);
    cursor.put_u16(0);

    let out = pack_compressed(&mut frame.hd, &fixed, &frame.nv, deflater)?;
    tracing::debug!(
        stream_id = frame.stream_id,
        pairs = frame.nv.len(),
        length = frame.hd.length,
        "packed syn_reply"
    );
    Ok(out)
}

/// Pack a RST_STREAM frame. Always 16 bytes; no compression involved.
pub fn pack_rst_stream(frame: &mut RstStream) -> Result<Vec<u8>, FrameError> {
    frame.hd.length = RST_STREAM_PAYLOAD_LEN as u32;

    let mut out = Vec::new();
    out.try_reserve_exact(RST_STREAM_FRAME_LEN)
        .map_err(FrameError::alloc(RST_STREAM_FRAME_LEN))?;
    out.extend_from_slice(&pack_header(&frame.hd));
    out.put_u32(frame.stream_id & STREAM_ID_MASK);
    out.put_u32(frame.status_code);

    debug_assert_eq!(out.len(), RST_STREAM_FRAME_LEN);
    tracing::debug!(stream_id = frame.stream_id, status_code = frame.status_code, "packed rst_stream");
    Ok(out)
}

/// Pack any supported control frame.
pub fn pack_frame<C: Compressor + ?Sized>(
    frame: &mut Frame,
    deflater: &mut C,
) -> Result<Vec<u8>, FrameError> {
    match frame {
        Frame::SynStream(f) => pack_syn_stream(f, deflater),
        Frame::SynReply(f) => pack_syn_reply(f, deflater),
        Frame::RstStream(f) => pack_rst_stream(f),
    }
}

/// Header placeholder + fixed fields + compressed block, then back-patch the
/// header once the payload length is known.
fn pack_compressed<C: Compressor + ?Sized>(
    hd: &mut FrameHeader,
    fixed: &[u8],
    nv: &NameValueBlock,
    deflater: &mut C,
) -> Result<Vec<u8>, FrameError> {
    let raw = pack_nv(nv)?;

    // Compressed headers are usually much smaller than raw; the deflater grows the rest.
    let guess = FRAME_HEAD_LEN + fixed.len() + count_nv_space(nv) / 2;
    let mut out = Vec::new();
    out.try_reserve(guess).map_err(FrameError::alloc(guess))?;
    out.extend_from_slice(&[0u8; FRAME_HEAD_LEN]);
    out.extend_from_slice(fixed);

    deflater.compress_chunk(&raw, &mut out)?;

    let payload_len = out.len() - FRAME_HEAD_LEN;
    if payload_len > MAX_FRAME_PAYLOAD_LEN {
        return Err(FrameError::FrameTooLarge { have: payload_len, max: MAX_FRAME_PAYLOAD_LEN });
    }

    hd.length = payload_len as u32;
    out[..FRAME_HEAD_LEN].copy_from_slice(&pack_header(hd));
    Ok(out)
}
