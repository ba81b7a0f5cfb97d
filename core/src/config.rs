//! config.rs
//! Codec tuning knobs.
//!
//! Design notes:
//! - One config per connection; both directional contexts are built from it.
//! - Serializable so a session layer can load it alongside its own settings.

use serde::{Deserialize, Serialize};

use crate::compression::constants::{DEFAULT_LEVEL_DEFLATE, MAX_LEVEL_DEFLATE};
use crate::constants::DEFAULT_MAX_DECOMPRESSED_LEN;
use crate::types::FrameError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// zlib level for the outbound name/value stream (0..=9).
    pub compression_level: u32,
    /// Cap on the decompressed size of one inbound name/value block.
    pub max_decompressed_len: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            compression_level: DEFAULT_LEVEL_DEFLATE,
            max_decompressed_len: DEFAULT_MAX_DECOMPRESSED_LEN,
        }
    }
}

impl CodecConfig {
    pub fn validate(&self) -> Result<(), FrameError> {
        if self.compression_level > MAX_LEVEL_DEFLATE {
            return Err(FrameError::Config(format!(
                "compression_level {} > {}",
                self.compression_level, MAX_LEVEL_DEFLATE
            )));
        }
        if self.max_decompressed_len == 0 {
            return Err(FrameError::Config("max_decompressed_len must be non-zero".into()));
        }
        Ok(())
    }
}
