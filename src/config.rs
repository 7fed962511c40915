//! Configuration for studentdb
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::error::{Result, StudentDbError};

/// Main configuration for a RecordStore instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Storage file holding the whole collection.
    /// Flushes write a sibling `{data_file}.tmp` first, then rename it over
    /// this path. Missing parent directories are created on flush.
    pub data_file: PathBuf,

    /// fsync the temporary file before renaming it into place
    pub sync_on_flush: bool,

    // -------------------------------------------------------------------------
    // Consistency Configuration
    // -------------------------------------------------------------------------
    /// What happens to a staged mutation when its flush fails
    pub flush_failure_policy: FlushFailurePolicy,
}

/// Flush failure policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlushFailurePolicy {
    /// Discard the staged change; memory always matches the last good flush
    Rollback,

    /// Keep the change in memory anyway (disk lags until the next good flush)
    KeepInMemory,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("./studentdb_data/students.db"),
            sync_on_flush: true,
            flush_failure_policy: FlushFailurePolicy::Rollback,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Reject configurations the store cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.data_file.as_os_str().is_empty() {
            return Err(StudentDbError::Config(
                "data_file must not be empty".to_string(),
            ));
        }
        if self.data_file.file_name().is_none() {
            return Err(StudentDbError::Config(format!(
                "data_file must name a file, got {}",
                self.data_file.display()
            )));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the storage file path
    pub fn data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_file = path.into();
        self
    }

    /// Enable or disable fsync before the rename
    pub fn sync_on_flush(mut self, sync: bool) -> Self {
        self.config.sync_on_flush = sync;
        self
    }

    /// Set the flush failure policy
    pub fn flush_failure_policy(mut self, policy: FlushFailurePolicy) -> Self {
        self.config.flush_failure_policy = policy;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
