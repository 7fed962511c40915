//! # studentdb
//!
//! A single-user student record store with:
//! - Unique, immutable roll-number ids
//! - Grades and attendance kept in insertion order
//! - Whole-collection persistence, flushed on every mutation
//! - Atomic file replacement (write temp, rename)
//! - Interactive console and one-shot CLI front ends
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │             Console menu / one-shot CLI                      │
//! │        (prompting, validation, report formatting)            │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                    RecordStore                               │
//! │      (RwLock<OrderedMap<id, Student>>, search, list)         │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │  every mutation
//!                       ▼
//!               ┌───────────────┐          ┌─────────────┐
//!               │     Codec     │─────────►│ Storage file│
//!               │ (bincode+CRC) │          │ (tmp+rename)│
//!               └───────────────┘          └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod student;
pub mod codec;
pub mod store;
pub mod console;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{StudentDbError, Result};
pub use config::{Config, FlushFailurePolicy};
pub use student::Student;
pub use store::RecordStore;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of studentdb
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
