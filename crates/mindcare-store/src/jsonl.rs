use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use mindcare_core::traits::{AppointmentStore, FaqStore};
use mindcare_core::types::{AppointmentRecord, FaqEntry};
use mindcare_core::{Error, Result};

fn store_err(action: &str, path: &Path, e: impl std::fmt::Display) -> Error {
    Error::Store(format!("{} {}: {}", action, path.display(), e))
}

fn read_jsonl<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let file = File::open(path).map_err(|e| store_err("open", path, e))?;
    let reader = BufReader::new(file);
    let mut items = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| store_err("read", path, e))?;
        if line.trim().is_empty() {
            continue;
        }
        let item = serde_json::from_str(&line)
            .map_err(|e| store_err(&format!("parse line {} of", index + 1), path, e))?;
        items.push(item);
    }

    Ok(items)
}

/// FAQ corpus stored as one JSON object per line. Every `list_all` re-reads
/// the file, so edits are picked up on the next turn.
#[derive(Debug, Clone)]
pub struct JsonlFaqStore {
    path: PathBuf,
}

impl JsonlFaqStore {
    pub fn new(path: impl Into<PathBuf>) -> Self { Self { path: path.into() } }
}

impl FaqStore for JsonlFaqStore {
    fn list_all(&self) -> Result<Vec<FaqEntry>> {
        let entries: Vec<FaqEntry> = read_jsonl(&self.path)?;
        tracing::debug!(path = %self.path.display(), entries = entries.len(), "faq corpus loaded");
        Ok(entries)
    }
}

/// Appointment log, one record per line. Writes append and never read first.
#[derive(Debug, Clone)]
pub struct JsonlAppointmentStore {
    path: PathBuf,
}

impl JsonlAppointmentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self { Self { path: path.into() } }

    /// All records written so far. A log that does not exist yet is empty.
    pub fn read_all(&self) -> Result<Vec<AppointmentRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        read_jsonl(&self.path)
    }
}

impl AppointmentStore for JsonlAppointmentStore {
    fn put(&self, record: &AppointmentRecord) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| store_err("create", parent, e))?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| store_err("open", &self.path, e))?;
        let line = serde_json::to_string(record).map_err(|e| store_err("serialize for", &self.path, e))?;

        let mut writer = BufWriter::new(file);
        writeln!(writer, "{}", line).map_err(|e| store_err("write", &self.path, e))?;
        writer.flush().map_err(|e| store_err("flush", &self.path, e))
    }
}
