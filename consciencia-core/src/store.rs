//! Report persistence.
//!
//! [`ReportStore`] is the seam between scoring and wherever reports end
//! up. [`JsonFileReportStore`] writes one pretty-printed JSON file per
//! report, named after the report's timestamp so a directory listing
//! sorts chronologically.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::{info, warn};

use crate::error::StoreError;
use crate::report::AssessmentReport;

const FILE_PREFIX: &str = "relatorio_";
const FILE_EXTENSION: &str = "json";
const FILE_TIMESTAMP: &str = "%Y-%m-%d_%H-%M-%S";

/// A report read back from storage, with the path it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredReport {
    pub path: PathBuf,
    pub report: AssessmentReport,
}

/// Report storage trait
pub trait ReportStore: Send + Sync {
    /// Persist a report and return where it was written.
    fn save(&self, report: &AssessmentReport) -> Result<PathBuf, StoreError>;

    /// All stored reports, oldest first.
    fn list(&self) -> Result<Vec<StoredReport>, StoreError>;

    fn load(&self, path: &Path) -> Result<AssessmentReport, StoreError>;
}

/// Directory of `relatorio_<timestamp>.json` files
#[derive(Debug, Clone)]
pub struct JsonFileReportStore {
    dir: PathBuf,
}

impl JsonFileReportStore {
    /// Store reports under `dir`. The directory is created on first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the next free file for `stem`, appending `_1`, `_2`, ... when
    /// reports share a timestamp.
    fn create_unique(&self, stem: &str) -> Result<(PathBuf, fs::File), StoreError> {
        let mut attempt = 0u32;
        loop {
            let name = if attempt == 0 {
                format!("{stem}.{FILE_EXTENSION}")
            } else {
                format!("{stem}_{attempt}.{FILE_EXTENSION}")
            };
            let path = self.dir.join(name);

            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(file) => return Ok((path, file)),
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => attempt += 1,
                Err(source) => return Err(StoreError::Io { path, source }),
            }
        }
    }
}

/// Write `buf` to a freshly created report file, removing the file if
/// the write fails so no truncated report is left behind.
fn write_or_remove(path: &Path, mut file: impl Write, buf: &[u8]) -> Result<(), StoreError> {
    let written = file.write_all(buf).and_then(|()| file.flush());
    if let Err(source) = written {
        if let Err(e) = fs::remove_file(path) {
            warn!(path = %path.display(), error = %e, "Failed to remove partial report");
        }
        return Err(StoreError::Io {
            path: path.to_path_buf(),
            source,
        });
    }
    Ok(())
}

/// Chronological order key: the timestamp stem, then the numeric
/// collision suffix (`_2` before `_10`).
fn list_order_key(path: &Path) -> (String, u32) {
    let stem = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let split = stem
        .rsplit_once('_')
        .and_then(|(base, suffix)| Some((base.to_string(), suffix.parse().ok()?)));
    split.unwrap_or((stem, 0))
}

fn is_report_file(path: &Path) -> bool {
    let has_prefix = path
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with(FILE_PREFIX));
    has_prefix && path.extension().is_some_and(|ext| ext == FILE_EXTENSION)
}

impl ReportStore for JsonFileReportStore {
    fn save(&self, report: &AssessmentReport) -> Result<PathBuf, StoreError> {
        fs::create_dir_all(&self.dir).map_err(|source| StoreError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let mut buf = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        report
            .serialize(&mut serializer)
            .map_err(|source| StoreError::Serialization {
                path: self.dir.clone(),
                source,
            })?;

        let stem = format!(
            "{FILE_PREFIX}{}",
            report.generated_at().format(FILE_TIMESTAMP)
        );
        let (path, file) = self.create_unique(&stem)?;
        write_or_remove(&path, file, &buf)?;

        info!(path = %path.display(), "Saved assessment report");
        Ok(path)
    }

    fn list(&self) -> Result<Vec<StoredReport>, StoreError> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.dir.clone(),
                    source,
                });
            }
        };

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| StoreError::Io {
                path: self.dir.clone(),
                source,
            })?;
            let path = entry.path();
            if path.is_file() && is_report_file(&path) {
                paths.push(path);
            }
        }
        paths.sort_by_cached_key(|path| list_order_key(path));

        let mut reports = Vec::with_capacity(paths.len());
        for path in paths {
            match self.load(&path) {
                Ok(report) => reports.push(StoredReport { path, report }),
                Err(e) => warn!(error = %e, "Skipping unreadable report"),
            }
        }
        Ok(reports)
    }

    fn load(&self, path: &Path) -> Result<AssessmentReport, StoreError> {
        let contents = fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| StoreError::Serialization {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_file_names_are_recognized() {
        assert!(is_report_file(Path::new("relatorio_2025-01-01_10-00-00.json")));
        assert!(is_report_file(Path::new("/x/relatorio_2025-01-01_10-00-00_2.json")));
        assert!(!is_report_file(Path::new("relatorio_2025-01-01_10-00-00.txt")));
        assert!(!is_report_file(Path::new("notes.json")));
    }

    #[test]
    fn collision_suffix_orders_numerically() {
        let mut names = vec![
            "relatorio_2025-01-01_10-00-00_10.json",
            "relatorio_2025-01-01_10-00-01.json",
            "relatorio_2025-01-01_10-00-00_2.json",
            "relatorio_2025-01-01_10-00-00.json",
            "relatorio_2025-01-01_10-00-00_1.json",
        ];
        names.sort_by_cached_key(|name| list_order_key(Path::new(name)));
        assert_eq!(
            names,
            [
                "relatorio_2025-01-01_10-00-00.json",
                "relatorio_2025-01-01_10-00-00_1.json",
                "relatorio_2025-01-01_10-00-00_2.json",
                "relatorio_2025-01-01_10-00-00_10.json",
                "relatorio_2025-01-01_10-00-01.json",
            ]
        );
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::StorageFull, "disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn failed_write_removes_the_new_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("relatorio_2025-01-01_10-00-00.json");
        fs::write(&path, b"").unwrap();

        let err = write_or_remove(&path, FailingWriter, b"{}").unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn successful_write_keeps_contents() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("relatorio_2025-01-01_10-00-00.json");
        let file = fs::File::create(&path).unwrap();

        write_or_remove(&path, file, b"{}").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn store_trait_is_object_safe() {
        let store: Box<dyn ReportStore> = Box::new(JsonFileReportStore::new("relatorios"));
        let _ = store;
    }
}
