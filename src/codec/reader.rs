//! Codec Reader
//!
//! Validates and decodes a storage image back into students.

use std::collections::HashSet;
use std::io::Read;

use crate::error::{Result, StudentDbError};
use crate::student::Student;

use super::{FOOTER_SIZE, HEADER_SIZE, MAGIC, VERSION};

/// Decode a full file image
///
/// An empty image is an empty collection. Everything else must match the
/// layout exactly: magic, version, lengths, CRC, record count, unique ids.
pub fn decode(image: &[u8]) -> Result<Vec<Student>> {
    if image.is_empty() {
        return Ok(Vec::new());
    }

    if image.len() < HEADER_SIZE {
        return Err(corrupt(format!(
            "truncated header: {} bytes, need {}",
            image.len(),
            HEADER_SIZE
        )));
    }

    // Read and validate header
    if &image[0..4] != MAGIC {
        return Err(corrupt(format!(
            "invalid magic: expected STDB, got {:?}",
            &image[0..4]
        )));
    }

    let version = u16::from_le_bytes([image[4], image[5]]);
    if version != VERSION {
        return Err(corrupt(format!("unsupported version: {}", version)));
    }

    let record_count = read_u64(image, 6);
    let payload_len = read_u64(image, 14);

    // Sizes must line up exactly, no truncation and no trailing garbage
    let expected_len = usize::try_from(payload_len)
        .ok()
        .and_then(|len| len.checked_add(HEADER_SIZE + FOOTER_SIZE))
        .ok_or_else(|| corrupt(format!("payload length out of range: {}", payload_len)))?;

    if image.len() < expected_len {
        return Err(corrupt(format!(
            "truncated file: {} bytes, header declares {}",
            image.len(),
            expected_len
        )));
    }
    if image.len() > expected_len {
        return Err(corrupt(format!(
            "{} trailing bytes after footer",
            image.len() - expected_len
        )));
    }

    let payload_end = HEADER_SIZE + payload_len as usize;
    let payload = &image[HEADER_SIZE..payload_end];

    // Verify checksum before touching the payload
    let stored_crc = u32::from_le_bytes([
        image[payload_end],
        image[payload_end + 1],
        image[payload_end + 2],
        image[payload_end + 3],
    ]);
    let actual_crc = crc32fast::hash(payload);
    if stored_crc != actual_crc {
        return Err(corrupt(format!(
            "checksum mismatch: stored {:#010x}, computed {:#010x}",
            stored_crc, actual_crc
        )));
    }

    let students: Vec<Student> = bincode::deserialize(payload)
        .map_err(|e| corrupt(format!("failed to decode records: {}", e)))?;

    if students.len() as u64 != record_count {
        return Err(corrupt(format!(
            "record count mismatch: header {}, payload {}",
            record_count,
            students.len()
        )));
    }

    let mut seen = HashSet::with_capacity(students.len());
    for student in &students {
        if !seen.insert(student.id()) {
            return Err(corrupt(format!("duplicate id '{}'", student.id())));
        }
    }

    Ok(students)
}

/// Read the whole of `reader` and decode it
pub fn read_from<R: Read>(reader: &mut R) -> Result<Vec<Student>> {
    let mut image = Vec::new();
    reader.read_to_end(&mut image)?;
    decode(&image)
}

// =============================================================================
// Private Helpers
// =============================================================================

/// Little-endian u64 at `at` (caller guarantees bounds)
fn read_u64(bytes: &[u8], at: usize) -> u64 {
    let mut buf = [0u8; 8];
    buf.copy_from_slice(&bytes[at..at + 8]);
    u64::from_le_bytes(buf)
}

fn corrupt(reason: String) -> StudentDbError {
    StudentDbError::CorruptStore(reason)
}
