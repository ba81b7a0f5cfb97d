use std::collections::TryReserveError;

use thiserror::Error;

use crate::compression::CompressionError;
use crate::headers::FrameType;
use crate::utils::enum_name_or_hex;

/// Unified codec error covering header, name/value block, compression and frame layers.
/// - `From<T>` impls enable `?` across the layers.
/// - Compression and decompression failures are fatal for that connection direction:
///   the shared zlib context cannot be rewound.
#[derive(Debug, Error)]
pub enum FrameError {
    /// Not enough bytes for a fixed-size field, or declared length disagrees with the buffer.
    #[error("invalid length: have {have} bytes, need {need}")]
    InvalidLength { have: usize, need: usize },

    /// Malformed name/value block (truncated, inconsistent count, empty name).
    #[error("name/value block parse error: {0}")]
    Parse(String),

    /// Outbound compressor fault.
    #[error("compression error: {0}")]
    Compression(String),

    /// Malformed inbound stream or desynchronized inflater.
    #[error("decompression error: {0}")]
    Decompression(String),

    /// Decompressed block would exceed the caller's cap.
    #[error("decompressed output exceeds limit of {limit} bytes")]
    OutputLimitExceeded { limit: usize },

    /// Payload does not fit the 24-bit length field.
    #[error("frame too large: payload {have} > {max}")]
    FrameTooLarge { have: usize, max: usize },

    /// Memory exhaustion while sizing an output buffer.
    #[error("allocation of {requested} bytes failed")]
    AllocationFailure { requested: usize },

    /// Header type does not match the unpacker it was handed to.
    #[error("unexpected frame type: expected {}, got {}", frame_type_name(.expected), frame_type_name(.actual))]
    UnexpectedFrameType { expected: u16, actual: u16 },

    /// Control frame type this codec has no unpacker for.
    #[error("unsupported frame type: {}", frame_type_name(.0))]
    UnsupportedFrameType(u16),

    /// Invalid codec configuration.
    #[error("invalid config: {0}")]
    Config(String),
}

fn frame_type_name(raw: &u16) -> String {
    enum_name_or_hex::<FrameType>(*raw)
}

impl FrameError {
    /// Map a failed `try_reserve` into `AllocationFailure`.
    pub(crate) fn alloc(requested: usize) -> impl FnOnce(TryReserveError) -> Self {
        move |_| FrameError::AllocationFailure { requested }
    }

    /// True when the error leaves a compression context unusable.
    pub fn is_fatal_to_context(&self) -> bool {
        matches!(
            self,
            FrameError::Compression(_)
                | FrameError::Decompression(_)
                | FrameError::OutputLimitExceeded { .. }
        )
    }
}

impl From<CompressionError> for FrameError {
    fn from(e: CompressionError) -> Self {
        match e {
            CompressionError::OutputLimitExceeded { limit } => FrameError::OutputLimitExceeded { limit },
            CompressionError::AllocationFailure { requested } => FrameError::AllocationFailure { requested },
            e @ (CompressionError::CodecInitFailed { .. } | CompressionError::CompressFailed(_)) => {
                FrameError::Compression(e.to_string())
            }
            e @ (CompressionError::DecompressFailed(_) | CompressionError::Desynchronized) => {
                FrameError::Decompression(e.to_string())
            }
        }
    }
}
