//! Record Store
//!
//! Keyed student collection with whole-file persistence.

use std::path::Path;

use parking_lot::RwLock;
use tracing::{debug, info, warn};

use crate::config::{Config, FlushFailurePolicy};
use crate::error::{Result, StudentDbError};
use crate::student::{OrderedMap, Student};

use super::file::StorageFile;

/// The authoritative student collection
///
/// ## Concurrency Model
///
/// - **Reads** (get/search/list): shared read lock, return owned clones
/// - **Writes** (add/update/remove/edit/flush): exclusive write lock held
///   across both the in-memory change and the disk write, so no other
///   operation can observe a mutation whose flush is still in progress
///
/// ## Durability
///
/// Every mutation encodes the collection as it would look afterwards and
/// rewrites the storage file before the change is applied in memory. What
/// happens when that write fails is decided by `FlushFailurePolicy`; the
/// caller gets the error either way.
pub struct RecordStore {
    /// Store configuration
    config: Config,

    /// On-disk image
    file: StorageFile,

    /// id → student, in insertion order
    students: RwLock<OrderedMap<String, Student>>,
}

impl RecordStore {
    /// Open the store, loading whatever the storage file holds
    ///
    /// On startup:
    /// 1. Validate config
    /// 2. Missing or zero-length file → empty collection
    /// 3. Anything unparseable → `CorruptStore` (fatal)
    pub fn open(config: Config) -> Result<Self> {
        config.validate()?;

        let file = StorageFile::new(&config.data_file, config.sync_on_flush);

        let mut students = OrderedMap::new();
        for student in file.load()? {
            students.insert(student.id().to_string(), student);
        }

        info!(
            "Opened student store at {} ({} records)",
            file.path().display(),
            students.len()
        );

        Ok(Self {
            config,
            file,
            students: RwLock::new(students),
        })
    }

    /// Open with a path (convenience method)
    ///
    /// Uses default config with the specified storage file
    pub fn open_path(path: impl AsRef<Path>) -> Result<Self> {
        let config = Config::builder().data_file(path.as_ref()).build();
        Self::open(config)
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Register a new student
    ///
    /// Fails with `Duplicate` if the id is taken; nothing is written then.
    pub fn add(&self, student: Student) -> Result<()> {
        let mut students = self.students.write();

        if students.contains_key(student.id()) {
            return Err(StudentDbError::Duplicate {
                id: student.id().to_string(),
            });
        }

        let staged: Vec<&Student> = students
            .values()
            .chain(std::iter::once(&student))
            .collect();
        let flushed = self.write_staged(&staged);

        if self.should_apply(&flushed, "add", student.id()) {
            students.insert(student.id().to_string(), student);
        }

        flushed
    }

    /// Replace a stored student entirely (no field-level merge)
    ///
    /// Fails with `NotFound` if no student has this id.
    pub fn update(&self, student: Student) -> Result<()> {
        let mut students = self.students.write();
        self.replace_locked(&mut students, student)
    }

    /// Fetch, modify and store a student in one step
    ///
    /// `f` works on a copy; the store only changes if the flush succeeds (or
    /// the policy keeps failed changes). Returns the stored result.
    pub fn edit<F>(&self, id: &str, f: F) -> Result<Student>
    where
        F: FnOnce(&mut Student),
    {
        let mut students = self.students.write();

        let mut edited = students
            .get(id)
            .cloned()
            .ok_or_else(|| StudentDbError::NotFound { id: id.to_string() })?;
        f(&mut edited);

        self.replace_locked(&mut students, edited.clone())?;
        Ok(edited)
    }

    /// Delete a student, returning it
    ///
    /// Fails with `NotFound` if no student has this id.
    pub fn remove(&self, id: &str) -> Result<Student> {
        let mut students = self.students.write();

        if !students.contains_key(id) {
            return Err(StudentDbError::NotFound { id: id.to_string() });
        }

        let staged: Vec<&Student> = students.values().filter(|s| s.id() != id).collect();
        let flushed = self.write_staged(&staged);

        let removed = if self.should_apply(&flushed, "remove", id) {
            students.remove(id)
        } else {
            None
        };

        flushed?;
        removed.ok_or_else(|| StudentDbError::NotFound { id: id.to_string() })
    }

    /// Rewrite the storage file from the current collection
    pub fn flush(&self) -> Result<()> {
        // Write lock: flushes must not interleave with each other or with mutations
        let students = self.students.write();
        let staged: Vec<&Student> = students.values().collect();
        self.write_staged(&staged)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Exact, case-sensitive lookup. Absence is not an error.
    pub fn get(&self, id: &str) -> Option<Student> {
        self.students.read().get(id).cloned()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.students.read().contains_key(id)
    }

    /// Case-insensitive substring match on name, sorted by name then id
    ///
    /// An empty query matches every student.
    pub fn search_by_name(&self, query: &str) -> Vec<Student> {
        let needle = query.to_lowercase();
        let mut matches: Vec<Student> = self
            .students
            .read()
            .values()
            .filter(|s| s.name().to_lowercase().contains(&needle))
            .cloned()
            .collect();

        matches.sort_by(|a, b| a.name().cmp(b.name()).then_with(|| a.id().cmp(b.id())));
        matches
    }

    /// Case-insensitive substring match on program, sorted by id
    pub fn search_by_program(&self, query: &str) -> Vec<Student> {
        let needle = query.to_lowercase();
        let mut matches: Vec<Student> = self
            .students
            .read()
            .values()
            .filter(|s| s.program().to_lowercase().contains(&needle))
            .cloned()
            .collect();

        matches.sort_by(|a, b| a.id().cmp(b.id()));
        matches
    }

    /// Every student, sorted by id
    pub fn list_all(&self) -> Vec<Student> {
        let mut all: Vec<Student> = self.students.read().values().cloned().collect();
        all.sort_by(|a, b| a.id().cmp(b.id()));
        all
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Number of students currently held
    pub fn len(&self) -> usize {
        self.students.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.read().is_empty()
    }

    /// Get the storage file path
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Full replace of an existing student (called with write lock held)
    fn replace_locked(
        &self,
        students: &mut OrderedMap<String, Student>,
        student: Student,
    ) -> Result<()> {
        if !students.contains_key(student.id()) {
            return Err(StudentDbError::NotFound {
                id: student.id().to_string(),
            });
        }

        let staged: Vec<&Student> = students
            .values()
            .map(|s| if s.id() == student.id() { &student } else { s })
            .collect();
        let flushed = self.write_staged(&staged);

        if self.should_apply(&flushed, "update", student.id()) {
            students.insert(student.id().to_string(), student);
        }

        flushed
    }

    /// Write a staged view of the collection to disk
    fn write_staged(&self, staged: &[&Student]) -> Result<()> {
        let bytes = self.file.write(staged)?;
        debug!(
            "Flushed {} records ({} bytes) to {}",
            staged.len(),
            bytes,
            self.file.path().display()
        );
        Ok(())
    }

    /// Decide whether a staged mutation lands in memory given its flush outcome
    fn should_apply(&self, flushed: &Result<()>, op: &str, id: &str) -> bool {
        let Err(e) = flushed else {
            return true;
        };

        match self.config.flush_failure_policy {
            FlushFailurePolicy::Rollback => {
                warn!("Flush failed during {} of '{}', change rolled back: {}", op, id, e);
                false
            }
            FlushFailurePolicy::KeepInMemory => {
                warn!(
                    "Flush failed during {} of '{}', change kept in memory only: {}",
                    op, id, e
                );
                true
            }
        }
    }
}
