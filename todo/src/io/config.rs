//! Tracker configuration read from an optional TOML file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::core::ids::IdPolicy;

/// Tracker configuration (TOML).
///
/// Missing fields fall back to the defaults: `tasks.json` in the
/// working directory and length-based ids.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TodoConfig {
    /// Task store file. Relative paths resolve against the working directory.
    pub store_path: PathBuf,

    /// Id assignment for `add`.
    pub id_policy: IdPolicy,
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from("tasks.json"),
            id_policy: IdPolicy::default(),
        }
    }
}

impl TodoConfig {
    pub fn validate(&self) -> Result<()> {
        if self.store_path.as_os_str().is_empty() {
            return Err(anyhow!("store_path must not be empty"));
        }
        if self.store_path.file_name().is_none() {
            return Err(anyhow!(
                "store_path must name a file, got {}",
                self.store_path.display()
            ));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `TodoConfig::default()`.
pub fn load_config(path: &Path) -> Result<TodoConfig> {
    if !path.exists() {
        let cfg = TodoConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: TodoConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, TodoConfig::default());
        assert_eq!(cfg.store_path, PathBuf::from("tasks.json"));
        assert_eq!(cfg.id_policy, IdPolicy::Length);
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_fields() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("todo.toml");
        fs::write(&path, "id_policy = \"max_plus_one\"\n").expect("write");
        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.id_policy, IdPolicy::MaxPlusOne);
        assert_eq!(cfg.store_path, PathBuf::from("tasks.json"));
    }

    #[test]
    fn reads_store_path() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("todo.toml");
        fs::write(&path, "store_path = \"data/my-tasks.json\"\n").expect("write");
        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.store_path, PathBuf::from("data/my-tasks.json"));
    }

    #[test]
    fn empty_store_path_is_rejected() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("todo.toml");
        fs::write(&path, "store_path = \"\"\n").expect("write");
        let err = load_config(&path).expect_err("load should fail");
        assert!(format!("{err:#}").contains("store_path must not be empty"));
    }

    #[test]
    fn unknown_policy_is_parse_error() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("todo.toml");
        fs::write(&path, "id_policy = \"random\"\n").expect("write");
        let err = load_config(&path).expect_err("load should fail");
        assert!(err.to_string().contains("parse"));
    }
}
