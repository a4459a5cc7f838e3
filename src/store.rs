use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

pub const TASKS_FILE: &str = "tasks.json";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Task {
    pub id: u64,
    pub name: String,
    pub status: TaskStatus,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Done,
}

impl TaskStatus {
    pub const VALID_OPTIONS: &'static str = "todo, in-progress, done";

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Done => "done",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = String;

    // Case-insensitive; the enum value itself is the lowercase normal form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "todo" => Ok(TaskStatus::Todo),
            "in-progress" => Ok(TaskStatus::InProgress),
            "done" => Ok(TaskStatus::Done),
            other => Err(format!(
                "'{}' is not a valid status (valid options: {})",
                other,
                TaskStatus::VALID_OPTIONS
            )),
        }
    }
}

pub struct Store {
    pub path: PathBuf,
}

impl Store {
    pub fn new(work_dir: PathBuf) -> Self {
        Self {
            path: work_dir.join(TASKS_FILE),
        }
    }

    /// Loads the full task collection from disk.
    ///
    /// A missing file or syntactically broken JSON is treated as an empty
    /// store. A record whose status is outside the fixed set is an error:
    /// that is data corruption, not a fresh start.
    pub fn load(&self) -> Result<Vec<Task>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        let value: serde_json::Value = match serde_json::from_str(&content) {
            Ok(value) => value,
            Err(_) => return Ok(Vec::new()),
        };
        let tasks = serde_json::from_value(value)
            .with_context(|| format!("invalid task record in {}", self.path.display()))?;
        Ok(tasks)
    }

    /// Overwrites the store with the given collection, 4-space indented.
    /// Not atomic: a crash mid-write can truncate the file.
    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        tasks.serialize(&mut ser)?;
        fs::write(&self.path, buf)
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn load_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let store = Store::new(dir.path().to_path_buf());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn load_malformed_json_is_empty() {
        let dir = tempdir().unwrap();
        let store = Store::new(dir.path().to_path_buf());
        fs::write(&store.path, "{not json [").unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn load_unknown_status_is_an_error() {
        let dir = tempdir().unwrap();
        let store = Store::new(dir.path().to_path_buf());
        fs::write(
            &store.path,
            r#"[{"id": 1, "name": "x", "status": "cancelled"}]"#,
        )
        .unwrap();
        assert!(store.load().is_err());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let store = Store::new(dir.path().to_path_buf());
        let tasks = vec![
            Task {
                id: 1,
                name: "Buy milk".to_string(),
                status: TaskStatus::Todo,
            },
            Task {
                id: 2,
                name: "Walk dog".to_string(),
                status: TaskStatus::InProgress,
            },
        ];
        store.save(&tasks).unwrap();
        assert_eq!(store.load().unwrap(), tasks);
    }

    #[test]
    fn save_uses_four_space_indent() {
        let dir = tempdir().unwrap();
        let store = Store::new(dir.path().to_path_buf());
        store
            .save(&[Task {
                id: 1,
                name: "x".to_string(),
                status: TaskStatus::Done,
            }])
            .unwrap();
        let content = fs::read_to_string(&store.path).unwrap();
        assert!(content.contains("\n        \"id\": 1"));
        assert!(content.contains("\"status\": \"done\""));
    }

    #[test]
    fn status_parsing_is_case_insensitive() {
        assert_eq!("TODO".parse::<TaskStatus>().unwrap(), TaskStatus::Todo);
        assert_eq!(
            "In-Progress".parse::<TaskStatus>().unwrap(),
            TaskStatus::InProgress
        );
        assert!("later".parse::<TaskStatus>().is_err());
    }
}
