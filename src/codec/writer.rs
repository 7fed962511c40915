//! Codec Writer
//!
//! Encodes a student collection into a complete storage image.

use std::borrow::Borrow;
use std::io::Write;

use serde::Serialize;

use crate::error::{Result, StudentDbError};
use crate::student::Student;

use super::{FOOTER_SIZE, HEADER_SIZE, MAGIC, VERSION};

/// Encode `students` into a full file image (header, payload, footer)
///
/// Accepts owned students or references, so callers can encode a staged view
/// of a collection without cloning it.
pub fn encode<S>(students: &[S]) -> Result<Vec<u8>>
where
    S: Borrow<Student> + Serialize,
{
    let payload = bincode::serialize(students)
        .map_err(|e| StudentDbError::Serialization(format!("Failed to encode students: {}", e)))?;

    let mut image = Vec::with_capacity(HEADER_SIZE + payload.len() + FOOTER_SIZE);

    // Header
    image.extend_from_slice(MAGIC);
    image.extend_from_slice(&VERSION.to_le_bytes());
    image.extend_from_slice(&(students.len() as u64).to_le_bytes());
    image.extend_from_slice(&(payload.len() as u64).to_le_bytes());

    // Payload
    image.extend_from_slice(&payload);

    // Footer
    let crc = crc32fast::hash(&payload);
    image.extend_from_slice(&crc.to_le_bytes());

    Ok(image)
}

/// Encode `students` and write the image to `writer`
///
/// Returns the number of bytes written. The writer is flushed but not synced.
pub fn write_to<W, S>(writer: &mut W, students: &[S]) -> Result<u64>
where
    W: Write,
    S: Borrow<Student> + Serialize,
{
    let image = encode(students)?;
    writer.write_all(&image)?;
    writer.flush()?;
    Ok(image.len() as u64)
}
