//! JSONL file writer for finished matches.
//!
//! Each [`MatchResult`] is serialized as a single JSON line with a
//! `timestamp` field, appended to the file via a buffered writer.

use async_trait::async_trait;
use milhao_application::{MatchResultSink, SinkError};
use milhao_domain::MatchResult;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// JSONL match sink that appends one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes after every record and
/// on `Drop`.
pub struct JsonlMatchSink {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlMatchSink {
    /// Open (or create) the file in append mode.
    ///
    /// Creates parent directories if they don't exist. Returns `None` if the
    /// file cannot be opened.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create match log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open match log file {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    /// Get the path to the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn to_line(result: &MatchResult) -> Result<String, SinkError> {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
        let mut record =
            serde_json::to_value(result).map_err(|e| SinkError::Serialization(e.to_string()))?;
        if let serde_json::Value::Object(map) = &mut record {
            map.insert(
                "timestamp".to_string(),
                serde_json::Value::String(timestamp),
            );
        }
        serde_json::to_string(&record).map_err(|e| SinkError::Serialization(e.to_string()))
    }
}

#[async_trait]
impl MatchResultSink for JsonlMatchSink {
    fn name(&self) -> &str {
        "jsonl"
    }

    async fn record(&self, result: &MatchResult) -> Result<(), SinkError> {
        let line = Self::to_line(result)?;
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| SinkError::RequestFailed("match log writer poisoned".to_string()))?;
        writeln!(writer, "{}", line)?;
        writer.flush()?;
        Ok(())
    }
}

impl Drop for JsonlMatchSink {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}
