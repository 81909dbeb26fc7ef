use std::{
    io,
    path::{Path, PathBuf},
};

use thiserror::Error;

/// Errors that abort a conversion or QC run
///
/// None of these are recoverable at the row level: a single bad line
/// invalidates the whole batch, as downstream tools rely on every record
/// having the same column layout.
#[derive(Debug, Error)]
pub enum PedError {
    #[error("No variant files found in {}", .location.display())]
    NoInputFilesFound { location: PathBuf },

    #[error(
        "Malformed variant line {line} in {}: expected at least {expected} tab separated fields, found {found}",
        .path.display()
    )]
    MalformedRecord {
        path: PathBuf,
        line: usize,
        found: usize,
        expected: usize,
    },

    #[error("Malformed report row {line} in {}: {detail}", .path.display())]
    MalformedRow {
        path: PathBuf,
        line: usize,
        detail: String,
    },

    #[error("I/O error for {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl PedError {
    pub fn io<P: AsRef<Path>>(path: P, source: io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_owned(),
            source,
        }
    }
}
