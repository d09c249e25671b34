//! Task list load/save with schema validation and atomic replacement.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use jsonschema::validator_for;
use serde::Serialize;
use serde_json::Value;
use serde_json::ser::PrettyFormatter;
use thiserror::Error;
use tracing::{debug, warn};

use crate::core::ids::MAX_TASK_ID;
use crate::core::invariants::duplicate_ids;
use crate::task::Task;

const TASKS_SCHEMA: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../schemas/tasks/v1.schema.json"
));

/// Failures reading or writing the task store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The store file exists but does not hold a well-formed task list.
    #[error("corrupt task store {}: {reason}", path.display())]
    Corrupt { path: PathBuf, reason: String },

    #[error("read task store {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The store could not be replaced; the previous file is left in place.
    #[error("write task store {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("serialize tasks")]
    Encode(#[from] serde_json::Error),

    #[error("invalid task store schema: {0}")]
    Schema(String),

    /// The next id under the configured policy would pass `MAX_TASK_ID`.
    #[error("no task id available after {}", MAX_TASK_ID)]
    IdsExhausted,
}

impl StoreError {
    fn write(path: &Path, source: io::Error) -> Self {
        Self::Write {
            path: path.to_path_buf(),
            source,
        }
    }

    fn corrupt(path: &Path, reason: impl Into<String>) -> Self {
        Self::Corrupt {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }
}

/// JSON file holding the full task list.
#[derive(Debug, Clone)]
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the task list. A missing file, or a parent that is not a
    /// directory, is an empty list.
    pub fn load(&self) -> Result<Vec<Task>, StoreError> {
        let path = self.path.as_path();
        debug!(path = %path.display(), "loading tasks");
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err)
                if matches!(
                    err.kind(),
                    io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
                ) =>
            {
                debug!(path = %path.display(), "task store missing, starting empty");
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let value: Value = serde_json::from_str(&contents)
            .map_err(|err| StoreError::corrupt(path, err.to_string()))?;
        validate_schema(path, &value)?;
        let tasks: Vec<Task> = serde_json::from_value(value)
            .map_err(|err| StoreError::corrupt(path, err.to_string()))?;

        let duplicates = duplicate_ids(&tasks);
        if !duplicates.is_empty() {
            warn!(path = %path.display(), ?duplicates, "task store has duplicate ids");
        }
        debug!(path = %path.display(), count = tasks.len(), "tasks loaded");
        Ok(tasks)
    }

    /// Replace the store with `tasks` (temp file + rename).
    pub fn save(&self, tasks: &[Task]) -> Result<(), StoreError> {
        debug!(path = %self.path.display(), count = tasks.len(), "writing tasks");
        let buf = encode(tasks)?;
        write_atomic(&self.path, &buf)
    }
}

/// Pretty JSON with 4-space indent and a trailing newline.
fn encode(tasks: &[Task]) -> Result<Vec<u8>, StoreError> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    tasks.serialize(&mut serializer)?;
    buf.push(b'\n');
    Ok(buf)
}

fn validate_schema(path: &Path, tasks: &Value) -> Result<(), StoreError> {
    let schema: Value = serde_json::from_str(TASKS_SCHEMA)
        .map_err(|err| StoreError::Schema(err.to_string()))?;
    let compiled = validator_for(&schema).map_err(|err| StoreError::Schema(err.to_string()))?;
    if compiled.is_valid(tasks) {
        return Ok(());
    }
    let messages = compiled
        .iter_errors(tasks)
        .map(|err| err.to_string())
        .collect::<Vec<_>>();
    Err(StoreError::corrupt(path, messages.join("; ")))
}

fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), StoreError> {
    let file_name = path.file_name().ok_or_else(|| {
        StoreError::write(
            path,
            io::Error::new(io::ErrorKind::InvalidInput, "store path has no file name"),
        )
    })?;
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| StoreError::write(path, source))?;
    }

    let mut tmp_name = file_name.to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);

    let result = fs::write(&tmp_path, contents).and_then(|()| fs::rename(&tmp_path, path));
    if let Err(source) = result {
        let _ = fs::remove_file(&tmp_path);
        return Err(StoreError::write(path, source));
    }
    Ok(())
}
