//! Storage File
//!
//! Reads and atomically replaces the on-disk image.

use std::borrow::Borrow;
use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufReader, BufWriter};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::codec;
use crate::error::Result;
use crate::student::Student;

/// Handle on the storage file and its temporary sibling
pub(crate) struct StorageFile {
    /// The storage file proper
    path: PathBuf,
    /// `{path}.tmp`, written then renamed over `path`
    tmp_path: PathBuf,
    /// fsync the temporary file before the rename
    sync: bool,
}

impl StorageFile {
    pub(crate) fn new(path: &Path, sync: bool) -> Self {
        Self {
            path: path.to_path_buf(),
            tmp_path: Self::tmp_path_for(path),
            sync,
        }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Read every student from disk
    ///
    /// A missing file is an empty collection. So is a zero-length file; the
    /// codec handles that case. Any other open failure is an `Io` error.
    pub(crate) fn load(&self) -> Result<Vec<Student>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        let mut reader = BufReader::new(file);
        codec::read_from(&mut reader)
    }

    /// Replace the on-disk image with `students`
    ///
    /// Returns bytes written. On failure the temporary file is removed and the
    /// previous image, if any, is left in place.
    pub(crate) fn write<S>(&self, students: &[S]) -> Result<u64>
    where
        S: Borrow<Student> + Serialize,
    {
        let result = self.write_and_rename(students);
        if result.is_err() {
            let _ = fs::remove_file(&self.tmp_path);
        }
        result
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    fn write_and_rename<S>(&self, students: &[S]) -> Result<u64>
    where
        S: Borrow<Student> + Serialize,
    {
        // Create the parent directory if it doesn't exist
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&self.tmp_path)?;

        let mut writer = BufWriter::new(file);
        let written = codec::write_to(&mut writer, students)?;

        let file = writer.into_inner().map_err(|e| e.into_error())?;
        if self.sync {
            file.sync_all()?;
        }
        drop(file);

        fs::rename(&self.tmp_path, &self.path)?;

        Ok(written)
    }

    /// "students.db" → "students.db.tmp", in the same directory
    fn tmp_path_for(path: &Path) -> PathBuf {
        let mut name: OsString = path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| OsString::from("students"));
        name.push(".tmp");
        path.with_file_name(name)
    }
}
