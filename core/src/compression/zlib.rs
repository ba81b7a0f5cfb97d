//! compression/zlib.rs
//!
//! Persistent zlib contexts seeded with `NV_DICTIONARY`.
//!
//! Design notes:
//! - Wraps flate2's raw `Compress`/`Decompress` so state carries across blocks.
//! - The deflater sets the dictionary right after init; the inflater sets it
//!   when the stream asks for it (FDICT in the zlib header of the first block).
//! - Any error poisons the context; later calls fail with `Desynchronized`.

use flate2::{Compress, Compression, Decompress, FlushCompress, FlushDecompress, Status};

use crate::compression::constants::{DEFLATE_SLACK, INFLATE_STEP, MAX_LEVEL_DEFLATE, NV_DICTIONARY};
use crate::compression::types::{CompressionError, Compressor, Decompressor};
use crate::config::CodecConfig;

/// Outbound header-block compressor for one connection.
pub struct Deflater {
    inner: Compress,
    poisoned: bool,
}

impl Deflater {
    /// Begin a zlib stream at `level` and load the preset dictionary.
    ///
    /// # Errors
    /// - `CompressionError::CodecInitFailed` for a level above 9 or a rejected dictionary.
    pub fn new(level: u32) -> Result<Self, CompressionError> {
        if level > MAX_LEVEL_DEFLATE {
            return Err(CompressionError::CodecInitFailed {
                codec: "deflate",
                msg: format!("level {} > {}", level, MAX_LEVEL_DEFLATE),
            });
        }

        let mut inner = Compress::new(Compression::new(level), true);
        inner
            .set_dictionary(NV_DICTIONARY)
            .map_err(|e| CompressionError::CodecInitFailed { codec: "deflate", msg: e.to_string() })?;

        Ok(Self { inner, poisoned: false })
    }

    pub fn from_config(config: &CodecConfig) -> Result<Self, CompressionError> {
        Self::new(config.compression_level)
    }

    /// Uncompressed bytes consumed over the life of the stream.
    pub fn total_in(&self) -> u64 {
        self.inner.total_in()
    }

    /// Compressed bytes produced over the life of the stream.
    pub fn total_out(&self) -> u64 {
        self.inner.total_out()
    }

    pub fn is_poisoned(&self) -> bool {
        self.poisoned
    }

    fn deflate_sync(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError> {
        let start = self.inner.total_in();
        loop {
            let consumed = (self.inner.total_in() - start) as usize;
            let want = input.len() - consumed + DEFLATE_SLACK;
            out.try_reserve(want)
                .map_err(|_| CompressionError::AllocationFailure { requested: want })?;

            self.inner
                .compress_vec(&input[consumed..], out, FlushCompress::Sync)
                .map_err(|e| CompressionError::CompressFailed(e.to_string()))?;

            // Done once all input is in and zlib stopped short of filling the buffer.
            let consumed = (self.inner.total_in() - start) as usize;
            if consumed == input.len() && out.len() < out.capacity() {
                return Ok(());
            }
        }
    }
}

impl Compressor for Deflater {
    fn compress_chunk(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError> {
        if self.poisoned {
            return Err(CompressionError::Desynchronized);
        }

        let before = out.len();
        let result = self.deflate_sync(input, out);
        match &result {
            Ok(()) => tracing::trace!(raw = input.len(), compressed = out.len() - before, "deflated block"),
            Err(e) => {
                self.poisoned = true;
                tracing::warn!(error = %e, "deflater poisoned; outbound header stream is unusable");
            }
        }
        result
    }
}

/// Inbound header-block decompressor for one connection.
pub struct Inflater {
    inner: Decompress,
    poisoned: bool,
}

impl Default for Inflater {
    fn default() -> Self {
        Self::new()
    }
}

impl Inflater {
    /// Begin a zlib stream. The dictionary is supplied on demand.
    pub fn new() -> Self {
        Self { inner: Decompress::new(true), poisoned: false }
    }

    /// Compressed bytes consumed over the life of the stream.
    pub fn total_in(&self) -> u64 {
        self.inner.total_in()
    }

    /// Uncompressed bytes produced over the life of the stream.
    pub fn total_out(&self) -> u64 {
        self.inner.total_out()
    }

    pub fn is_poisoned(&self) -> bool {
        self.poisoned
    }

    fn inflate_bounded(
        &mut self,
        input: &[u8],
        max_output: usize,
        out: &mut Vec<u8>,
    ) -> Result<(), CompressionError> {
        let start = self.inner.total_in();
        let base = out.len();

        loop {
            let consumed_before = (self.inner.total_in() - start) as usize;
            let produced_before = out.len() - base;

            // Grow in steps, never past one byte over the cap; that byte is
            // how an overflowing block is detected.
            if out.len() == out.capacity() {
                let budget = max_output.saturating_add(1).saturating_sub(produced_before);
                let step = budget.min(INFLATE_STEP);
                out.try_reserve_exact(step)
                    .map_err(|_| CompressionError::AllocationFailure { requested: step })?;
            }

            let status = match self.inner.decompress_vec(
                &input[consumed_before..],
                out,
                FlushDecompress::Sync,
            ) {
                Ok(status) => status,
                Err(e) => match e.needs_dictionary() {
                    Some(_) => {
                        self.inner
                            .set_dictionary(NV_DICTIONARY)
                            .map_err(|e| CompressionError::DecompressFailed(e.to_string()))?;
                        continue;
                    }
                    None => return Err(CompressionError::DecompressFailed(e.to_string())),
                },
            };

            let consumed = (self.inner.total_in() - start) as usize;
            let produced = out.len() - base;
            if produced > max_output {
                return Err(CompressionError::OutputLimitExceeded { limit: max_output });
            }

            match status {
                Status::StreamEnd => {
                    if consumed != input.len() {
                        return Err(CompressionError::DecompressFailed(format!(
                            "{} bytes after end of zlib stream",
                            input.len() - consumed
                        )));
                    }
                    return Ok(());
                }
                Status::Ok | Status::BufError => {
                    if consumed == input.len() && out.len() < out.capacity() {
                        return Ok(());
                    }
                    if consumed == consumed_before && produced == produced_before {
                        if consumed == input.len() {
                            return Ok(());
                        }
                        return Err(CompressionError::DecompressFailed(
                            "inflate made no progress".into(),
                        ));
                    }
                }
            }
        }
    }
}

impl Decompressor for Inflater {
    fn decompress_chunk(
        &mut self,
        input: &[u8],
        max_output: usize,
        out: &mut Vec<u8>,
    ) -> Result<(), CompressionError> {
        if self.poisoned {
            return Err(CompressionError::Desynchronized);
        }

        let before = out.len();
        let result = self.inflate_bounded(input, max_output, out);
        match &result {
            Ok(()) => tracing::trace!(compressed = input.len(), raw = out.len() - before, "inflated block"),
            Err(e) => {
                self.poisoned = true;
                tracing::warn!(error = %e, "inflater poisoned; inbound header stream is unusable");
            }
        }
        result
    }
}
