//! compression/types.rs
//! Compressor/decompressor seams and their error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompressionError {
    #[error("codec {codec} init failed: {msg}")]
    CodecInitFailed { codec: &'static str, msg: String },

    #[error("deflate failed: {0}")]
    CompressFailed(String),

    #[error("inflate failed: {0}")]
    DecompressFailed(String),

    #[error("inflated output exceeds {limit} bytes")]
    OutputLimitExceeded { limit: usize },

    #[error("allocation of {requested} bytes failed")]
    AllocationFailure { requested: usize },

    /// A previous call failed; the shared stream state is no longer meaningful.
    #[error("compression context desynchronized by an earlier failure")]
    Desynchronized,
}

// Require Send so a context can move with its connection across threads.
pub trait Compressor: Send {
    /// Compress one block, appending a sync-flushed segment to `out`.
    fn compress_chunk(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError>;

    /// Compress one block into a fresh buffer.
    fn compress(&mut self, input: &[u8]) -> Result<Vec<u8>, CompressionError> {
        let mut out = Vec::new();
        self.compress_chunk(input, &mut out)?;
        Ok(out)
    }
}

pub trait Decompressor: Send {
    /// Inflate one block, appending at most `max_output` bytes to `out`.
    fn decompress_chunk(
        &mut self,
        input: &[u8],
        max_output: usize,
        out: &mut Vec<u8>,
    ) -> Result<(), CompressionError>;

    /// Inflate one block into a fresh buffer.
    fn decompress(&mut self, input: &[u8], max_output: usize) -> Result<Vec<u8>, CompressionError> {
        let mut out = Vec::new();
        self.decompress_chunk(input, max_output, &mut out)?;
        Ok(out)
    }
}
