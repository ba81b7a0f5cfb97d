//! spdy-frame-core
//!
//! Wire codec for the control plane of a SPDY-style framed protocol:
//! SYN_STREAM, SYN_REPLY and RST_STREAM frames, their 8-byte common header,
//! and the zlib-compressed name/value header block.
//! No sockets, no session state, no flow control.

#![forbid(unsafe_code)]

// Shared and top level
pub mod config;
pub mod constants;
pub mod types;
pub mod utils;

// Codec layers, leaves first
pub mod headers;
pub mod nv;
pub mod compression;
pub mod framing;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::compression::{Deflater, Inflater};
    pub use crate::config::CodecConfig;
    pub use crate::framing::{Frame, FrameCodec, RstStream, SynReply, SynStream};
    pub use crate::headers::{ControlFlags, FrameHeader, FrameType};
    pub use crate::nv::{NameValue, NameValueBlock};
    pub use crate::types::FrameError;
}
