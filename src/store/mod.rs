//! Store Module
//!
//! The authoritative student collection and its storage file.
//!
//! ## Responsibilities
//! - Keyed CRUD over students (unique, case-sensitive ids)
//! - Case-insensitive substring search and sorted listing
//! - Load once on open, flush the whole collection on every mutation
//!
//! ## Write Path
//! ```text
//!   add / update / remove / edit
//!              │
//!              ▼
//!   ┌──────────────────────┐   staged view (borrowed, no clone)
//!   │  write lock held     │──────────────────────────────┐
//!   └──────────┬───────────┘                              ▼
//!              │                             ┌────────────────────────┐
//!              │                             │ codec::encode          │
//!              │                             │ write {file}.tmp, sync │
//!              │                             │ rename over {file}     │
//!              │                             └───────────┬────────────┘
//!              ▼                                         │
//!   ┌──────────────────────┐      Ok / Err + policy      │
//!   │ apply to OrderedMap  │◄────────────────────────────┘
//!   └──────────────────────┘
//! ```

mod file;
mod records;

pub use records::RecordStore;
