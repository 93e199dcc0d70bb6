use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Which input file a record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Node,
    Edge,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Node => f.write_str("node"),
            RecordKind::Edge => f.write_str("edge"),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("No such file: {}", .0.display())]
    NotFound(PathBuf),
    #[error("I/O error reading {}: {source}", path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{} is not valid UTF-8 (invalid byte at offset {valid_up_to})", path.display())]
    EncodingError { path: PathBuf, valid_up_to: usize },
    #[error("CSV error in {}: {source}", path.display())]
    CsvError {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("{kind} row {row} is missing mandatory field `{field}`")]
    MissingField {
        kind: RecordKind,
        row: usize,
        field: &'static str,
    },
    #[error("JSON serialization error: {0}")]
    SerializeError(#[from] serde_json::Error),
    #[error("Cannot write {}: {source}", path.display())]
    OutputError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
