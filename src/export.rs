//! CSV export of harvested records.
//!
//! The exporter consumes a fully materialized record sequence once and
//! writes a single UTF-8, comma-delimited file. Unlike the harvest loop,
//! any failure here is fatal and surfaced to the caller.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use csv::WriterBuilder;
use thiserror::Error;
use tracing::info;

use crate::model::PokemonRecord;

/// Fixed column order of the exported dataset.
pub const CSV_HEADER: [&str; 9] = [
    "id", "name", "type_1", "type_2", "img_url", "hp", "attack", "defense", "speed",
];

/// Errors that can occur while writing the CSV export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Filesystem error creating or flushing the output file.
    #[error("IO error writing to {path}: {source}")]
    Io {
        /// The output path where the error occurred.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: io::Error,
    },

    /// CSV serialization or write error.
    #[error("CSV error writing to {path}: {source}")]
    Csv {
        /// The output path where the error occurred.
        path: PathBuf,
        /// The underlying CSV error.
        #[source]
        source: csv::Error,
    },
}

/// Writes the records to `path` as comma-delimited UTF-8.
///
/// The header row is always written, so an empty harvest still produces a
/// header-only file. Data rows appear in input order, one per record, with
/// no index column. The parent directory is created when missing.
///
/// # Errors
///
/// Returns [`ExportError`] on any filesystem or serialization failure.
/// Export failures are fatal to the pipeline; no partial-file cleanup is
/// attempted.
pub fn write_csv(records: &[PokemonRecord], path: &Path) -> Result<(), ExportError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| ExportError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    }

    // Header is written explicitly so it exists even with zero records;
    // `serialize` below must therefore not emit its own.
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|source| csv_error(path, source))?;

    writer
        .write_record(CSV_HEADER)
        .map_err(|source| csv_error(path, source))?;

    for record in records {
        writer
            .serialize(record)
            .map_err(|source| csv_error(path, source))?;
    }

    writer.flush().map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), rows = records.len(), "CSV written");
    Ok(())
}

fn csv_error(path: &Path, source: csv::Error) -> ExportError {
    ExportError::Csv {
        path: path.to_path_buf(),
        source,
    }
}
