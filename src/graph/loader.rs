//! CSV loading: header row + data rows into ordered column→cell mappings.
//!
//! Dialect: comma delimiter, `"` quoting with doubled-quote escapes. Spaces
//! (U+0020 only) at the start of a field are skipped before quote detection,
//! so `a, "b,c"` yields `b,c`. Text inside quotes is never trimmed.
//!
//! Ragged rows are accepted. A short row simply lacks its trailing columns;
//! cells beyond the header width are dropped. Both cases log a warning.

use rustc_hash::FxHashMap;
use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::Path;

use crate::core::error::ConvertError;
use crate::core::telemetry::TRACING_TARGET_LOADER;

/// One data row of a CSV file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvRecord {
    /// 1-based data-row ordinal; the header is not counted.
    pub row: usize,
    fields: FxHashMap<String, String>,
}

impl CsvRecord {
    pub fn new(row: usize) -> Self {
        Self {
            row,
            fields: FxHashMap::default(),
        }
    }

    pub fn with_field(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(column.into(), value.into());
        self
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Reads `path` as UTF-8 CSV and returns its data rows in file order.
pub fn load_records(path: &Path) -> Result<Vec<CsvRecord>, ConvertError> {
    let bytes = fs::read(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ConvertError::NotFound(path.to_path_buf()),
        _ => ConvertError::IoError {
            path: path.to_path_buf(),
            source,
        },
    })?;
    let text = String::from_utf8(bytes).map_err(|e| ConvertError::EncodingError {
        path: path.to_path_buf(),
        valid_up_to: e.utf8_error().valid_up_to(),
    })?;

    let records = parse_records(path, &text)?;
    tracing::info!(
        target: TRACING_TARGET_LOADER,
        path = %path.display(),
        rows = records.len(),
        "loaded csv"
    );
    Ok(records)
}

#[derive(Clone, Copy)]
enum Scan {
    FieldStart,
    Unquoted,
    Quoted,
    QuoteInQuoted,
}

/// Drops spaces that open a field, tracking quote state so that spaces and
/// delimiters inside a quoted cell survive untouched.
fn skip_initial_spaces(text: &str) -> Cow<'_, str> {
    if !text.contains(' ') {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut state = Scan::FieldStart;
    for ch in text.chars() {
        state = match (state, ch) {
            (Scan::FieldStart, ' ') => continue,
            (Scan::FieldStart, '"') => Scan::Quoted,
            (Scan::FieldStart | Scan::Unquoted | Scan::QuoteInQuoted, ',' | '\n' | '\r') => {
                Scan::FieldStart
            }
            (Scan::FieldStart | Scan::Unquoted, _) => Scan::Unquoted,
            (Scan::Quoted, '"') => Scan::QuoteInQuoted,
            (Scan::Quoted, _) => Scan::Quoted,
            (Scan::QuoteInQuoted, '"') => Scan::Quoted,
            (Scan::QuoteInQuoted, _) => Scan::Unquoted,
        };
        out.push(ch);
    }
    Cow::Owned(out)
}

/// Parses CSV text already in memory. `path` only labels errors and logs.
pub fn parse_records(path: &Path, text: &str) -> Result<Vec<CsvRecord>, ConvertError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let text = skip_initial_spaces(text);
    let csv_err = |source| ConvertError::CsvError {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b',')
        .quote(b'"')
        .double_quote(true)
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(csv_err)?
        .iter()
        .map(str::to_string)
        .collect();

    let mut records = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let raw = result.map_err(csv_err)?;
        let row = idx + 1;

        if raw.len() != headers.len() {
            tracing::warn!(
                target: TRACING_TARGET_LOADER,
                path = %path.display(),
                row,
                expected = headers.len(),
                found = raw.len(),
                "ragged csv row"
            );
        }

        let record = headers
            .iter()
            .zip(raw.iter())
            .fold(CsvRecord::new(row), |rec, (column, cell)| {
                rec.with_field(column.as_str(), cell)
            });
        records.push(record);
    }

    Ok(records)
}
