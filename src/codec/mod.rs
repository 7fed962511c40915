//! Codec Module
//!
//! Whole-collection serialization for the storage file.
//!
//! ## File Format
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ Header (22 bytes)                                       │
//! │   Magic: "STDB" (4) | Version: u16 (2)                  │
//! │   RecordCount: u64 (8) | PayloadLen: u64 (8)            │
//! ├─────────────────────────────────────────────────────────┤
//! │ Payload (PayloadLen bytes)                              │
//! │   bincode Vec<Student>, in store insertion order        │
//! │   dates as ISO-8601 strings ("1990-05-14")              │
//! │   grades / attendance as ordered (key, value) pairs     │
//! ├─────────────────────────────────────────────────────────┤
//! │ Footer (4 bytes)                                        │
//! │   PayloadCRC: u32                                       │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! All integers are little-endian. A zero-length image decodes to an empty
//! collection; anything else that does not match this layout exactly is
//! reported as `CorruptStore`.

mod reader;
mod writer;

pub use reader::{decode, read_from};
pub use writer::{encode, write_to};

// =============================================================================
// Shared Constants (used by writer and reader)
// =============================================================================

/// Magic bytes identifying a studentdb storage file
pub(crate) const MAGIC: &[u8; 4] = b"STDB";

/// Current storage format version
pub(crate) const VERSION: u16 = 1;

/// Header size: Magic (4) + Version (2) + RecordCount (8) + PayloadLen (8) = 22 bytes
pub(crate) const HEADER_SIZE: usize = 22;

/// Footer size: PayloadCRC (4)
pub(crate) const FOOTER_SIZE: usize = 4;
