//! Control frame codecs.
//!
//! Responsibilities:
//! - Own the SYN_STREAM / SYN_REPLY / RST_STREAM structs and their header lists
//! - Pack frames: fixed fields + compressed name/value block + back-patched header
//! - Unpack frames with strict length checks
//!
//! Non-responsibilities:
//! - Session state, stream bookkeeping, flow control
//! - IO

pub mod types;
pub mod encode;
pub mod decode;
pub mod codec;

pub use types::*;
pub use encode::*;
pub use decode::*;
pub use codec::FrameCodec;
