//! compression/mod.rs
//! Header block compression over a persistent, dictionary-seeded zlib stream.
//!
//! Notes:
//! - One `Deflater` per outbound direction and one `Inflater` per inbound
//!   direction, each living as long as the connection.
//! - Every block is sync-flushed so the peer can inflate it without waiting
//!   for more input.
//! - Contexts are never reset. After any failure the context is poisoned and
//!   the owning connection must be torn down.

pub mod constants;
pub mod types;
pub mod zlib;

pub use constants::*;
pub use types::*;
pub use zlib::*;
