//! headers/mod.rs
//! Common 8-byte frame header shared by every frame type.
//!
//! Notes:
//! - Big-endian throughout.
//! - Every bit pattern decodes; type and length are checked by the frame layer.

pub mod types;
pub mod encode;
pub mod decode;

pub use types::*;
pub use encode::*;
pub use decode::*;
