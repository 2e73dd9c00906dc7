//! Game-log import orchestration
//!
//! Imports are best-effort: a record that fails to decode or parse is
//! logged at `warn` and counted as skipped, and the rest of the file is
//! still loaded. Only failing to open a file or list a directory aborts.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::Instant;

use baseball_core::{log_op_end, log_op_error, log_op_start, Store};
use csv::ReaderBuilder;
use serde::Serialize;

use crate::errors::{from_csv, io_error, Result};
use crate::gamelog::parser::parse_record;

/// Outcome of an import
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub files: usize,
    pub imported: usize,
    pub skipped: usize,
}

impl ImportSummary {
    /// Fold another summary into this one
    pub fn absorb(&mut self, other: ImportSummary) {
        self.files += other.files;
        self.imported += other.imported;
        self.skipped += other.skipped;
    }
}

/// Import one game-log file into the store
///
/// # Errors
///
/// Returns an `Io` error when the file cannot be opened. Malformed
/// records never fail the import.
pub fn import_gamelog_file(path: &Path, store: &mut Store) -> Result<ImportSummary> {
    let start = Instant::now();
    let file_label = path.display().to_string();
    log_op_start!("import_gamelog", file = file_label.as_str());

    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) => {
            let err = io_error("gamelog_open", err).with_entity_id(file_label.as_str());
            log_op_error!(
                "import_gamelog",
                err.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                file = file_label.as_str()
            );
            return Err(err);
        }
    };

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut summary = ImportSummary {
        files: 1,
        ..ImportSummary::default()
    };
    for (index, result) in reader.records().enumerate() {
        let parsed = result
            .map_err(from_csv)
            .and_then(|record| parse_record(&record.iter().collect::<Vec<_>>()));
        match parsed {
            Ok(record) => {
                record.apply_to(store);
                summary.imported += 1;
            }
            Err(err) => {
                tracing::warn!(
                    op = "import_gamelog",
                    file = file_label.as_str(),
                    record = index + 1,
                    err.code = err.code(),
                    "skipping record: {}",
                    err.message()
                );
                summary.skipped += 1;
            }
        }
    }

    log_op_end!(
        "import_gamelog",
        duration_ms = start.elapsed().as_millis() as u64,
        file = file_label.as_str(),
        imported = summary.imported,
        skipped = summary.skipped
    );
    Ok(summary)
}

/// Import every regular file in a directory, in sorted path order
///
/// # Errors
///
/// Returns an `Io` error when the directory cannot be listed or one of its
/// files cannot be opened.
pub fn import_gamelog_dir(dir: &Path, store: &mut Store) -> Result<ImportSummary> {
    let entries = std::fs::read_dir(dir).map_err(|e| io_error("gamelog_read_dir", e))?;
    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| io_error("gamelog_read_dir", e))?.path();
        if path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();

    let mut summary = ImportSummary::default();
    for path in &paths {
        summary.absorb(import_gamelog_file(path, store)?);
    }
    Ok(summary)
}

/// Import a path that is either a game-log file or a directory of them
///
/// # Errors
///
/// See [`import_gamelog_file`] and [`import_gamelog_dir`].
pub fn import_gamelogs(path: &Path, store: &mut Store) -> Result<ImportSummary> {
    if path.is_dir() {
        import_gamelog_dir(path, store)
    } else {
        import_gamelog_file(path, store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absorb_adds_counts() {
        let mut total = ImportSummary::default();
        total.absorb(ImportSummary {
            files: 1,
            imported: 10,
            skipped: 2,
        });
        total.absorb(ImportSummary {
            files: 1,
            imported: 5,
            skipped: 0,
        });
        assert_eq!(
            total,
            ImportSummary {
                files: 2,
                imported: 15,
                skipped: 2,
            }
        );
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let mut store = Store::new();
        let err = import_gamelog_file(Path::new("/nonexistent/GL1904.TXT"), &mut store)
            .unwrap_err();
        assert_eq!(err.code(), "ERR_IO");
        assert_eq!(err.entity_id(), Some("/nonexistent/GL1904.TXT"));
    }
}
