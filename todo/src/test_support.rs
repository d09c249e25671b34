//! Test-only helpers for building tasks and throwaway stores.

use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use tempfile::TempDir;

use crate::io::task_store::TaskStore;
use crate::task::{Task, TaskId};

/// Create a task with explicit completion state.
pub fn task(id: TaskId, description: &str, completed: bool) -> Task {
    Task {
        id,
        description: description.to_string(),
        completed,
    }
}

/// Task store backed by `tasks.json` in a temporary directory.
pub struct TestStore {
    temp: TempDir,
    store: TaskStore,
}

impl TestStore {
    pub fn new() -> Result<Self> {
        let temp = tempfile::tempdir().context("create tempdir")?;
        let store = TaskStore::new(temp.path().join("tasks.json"));
        Ok(Self { temp, store })
    }

    pub fn dir(&self) -> &Path {
        self.temp.path()
    }

    pub fn path(&self) -> &Path {
        self.store.path()
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Write `tasks` through the store, replacing any previous content.
    pub fn seed(&self, tasks: &[Task]) -> Result<()> {
        self.store.save(tasks).context("seed tasks")
    }

    /// Raw store bytes, or `None` if the file does not exist.
    pub fn raw(&self) -> Result<Option<Vec<u8>>> {
        match fs::read(self.path()) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err).with_context(|| format!("read {}", self.path().display())),
        }
    }
}
