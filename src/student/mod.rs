//! Student Module
//!
//! The student entity and the ordered map it is built on.
//!
//! ## Responsibilities
//! - Immutable identity (roll number) with mutable descriptive fields
//! - Grades keyed by subject, attendance keyed by date
//! - Derived statistics (average grade, attendance percentage)
//!
//! ## Data Structure Choice
//! Grades and attendance use `OrderedMap` rather than `HashMap`:
//! - Insertion order is what reports display
//! - Re-setting a key updates in place and keeps its position
//! - O(1) lookup through a side index

mod ordered;
mod record;

pub use ordered::OrderedMap;
pub use record::Student;
