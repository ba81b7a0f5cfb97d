//! nv/mod.rs
//! Name/value header block: the uncompressed wire form of a frame's headers.
//!
//! Notes:
//! - Wire form is a u32 pair count followed by (u32 len, name, u32 len, value) tuples.
//! - The codec expects keys sorted ascending and unique; `normalize` builds such a block.
//! - Values of a repeated key are joined with a single NUL before packing.

pub mod types;
pub mod normalize;
pub mod encode;
pub mod decode;

pub use types::*;
pub use normalize::*;
pub use encode::*;
pub use decode::*;
