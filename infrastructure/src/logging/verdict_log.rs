//! JSONL file writer for verdict records.
//!
//! Each [`VerdictRecord`] is serialized as a single JSON line with a
//! `timestamp` field, appended to the file via a buffered writer.

use phishguard_application::{VerdictLogger, VerdictRecord};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// JSONL verdict log that writes one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes after every record
/// and on `Drop`.
pub struct JsonlVerdictLog {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlVerdictLog {
    /// Create a new log writing to the given path.
    ///
    /// Creates the file (and parent directories) if they don't exist.
    /// Returns `None` if the file cannot be created.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create verdict log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match File::create(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not create verdict log file {}: {}", path.display(), e);
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
}

impl VerdictLogger for JsonlVerdictLog {
    fn record(&self, record: VerdictRecord) {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        let Ok(serde_json::Value::Object(mut map)) = serde_json::to_value(&record) else {
            return;
        };
        map.insert(
            "timestamp".to_string(),
            serde_json::Value::String(timestamp),
        );

        let Ok(line) = serde_json::to_string(&serde_json::Value::Object(map)) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            // Verdicts are few; flush each one for crash safety
            let _ = writer.flush();
        }
    }
}

impl Drop for JsonlVerdictLog {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phishguard_domain::{Verdict, VerdictSource};
    use std::io::Read;

    #[test]
    fn test_log_writes_valid_jsonl() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("verdicts.jsonl");
        let log = JsonlVerdictLog::new(&path).unwrap();

        log.record(VerdictRecord::new(
            "https://example.com/login",
            &Verdict::not_safe(VerdictSource::Heuristic, "keyword match"),
        ));
        log.record(VerdictRecord::new(
            "https://example.com",
            &Verdict::safe(VerdictSource::ContentKeyword, "No malicious activity detected."),
        ));

        drop(log);

        let mut content = String::new();
        File::open(&path)
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();

        let lines: Vec<&str> = content.trim().lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["url"], "https://example.com/login");
        assert_eq!(first["safety"], "unsafe");
        assert_eq!(first["reason"], "keyword match");
        assert_eq!(first["source"], "heuristic");
        assert!(first.get("timestamp").is_some());

        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["safety"], "safe");
        assert_eq!(second["source"], "content_keyword");
    }

    #[test]
    fn test_new_returns_none_for_unwritable_path() {
        let result = JsonlVerdictLog::new("/proc/definitely/not/writable/verdicts.jsonl");
        assert!(result.is_none());
    }

    #[test]
    fn test_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("v.jsonl");
        let log = JsonlVerdictLog::new(&path).unwrap();
        assert_eq!(log.path(), path.as_path());
        assert!(path.exists());
    }
}
