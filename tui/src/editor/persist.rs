// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::PersistError;
use std::path::{Path, PathBuf};

/// Writes the serialized buffer somewhere durable on an explicit save.
///
/// Any `Fn(&str) -> Result<(), PersistError>` closure works.
pub trait Persist: Send + Sync {
    /// # Errors
    ///
    /// Returns a [`PersistError`] that is shown in the status bar.
    fn persist(&self, content: &str) -> Result<(), PersistError>;
}

impl<F> Persist for F
where
    F: Fn(&str) -> Result<(), PersistError> + Send + Sync,
{
    fn persist(&self, content: &str) -> Result<(), PersistError> { self(content) }
}

/// Overwrites one file with the buffer content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePersist {
    path: PathBuf,
}

impl FilePersist {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self { Self { path: path.into() } }

    #[must_use]
    pub fn path(&self) -> &Path { &self.path }
}

impl Persist for FilePersist {
    fn persist(&self, content: &str) -> Result<(), PersistError> {
        std::fs::write(&self.path, content).map_err(|source| PersistError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

/// Used for a scratch buffer opened without a path. Every save fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPersist;

impl Persist for NoPersist {
    fn persist(&self, _content: &str) -> Result<(), PersistError> { Err(PersistError::NoPath) }
}
