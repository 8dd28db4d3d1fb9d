//! Delimited table input and output
//!
//! Reads the identifier column from an uploaded table and writes annotation
//! records back out as CSV, TSV or JSON.
//!
//! Identifier cells are trimmed on read, so classification and the InputID
//! column see `"NM_1"` for a cell holding `" NM_1 "`.

use crate::error::{LocusError, Result};
use crate::types::{AnnotationRecord, OUTPUT_COLUMNS};
use csv::{ReaderBuilder, Trim, WriterBuilder};
use std::collections::HashSet;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tracing::debug;

/// Column holding the identifiers when none is given
pub const DEFAULT_ID_COLUMN: &str = "GeneID";

/// Serialization format of the output table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableFormat {
    #[default]
    Csv,
    Tsv,
    Json,
}

impl TableFormat {
    /// Guess the format from a file extension, defaulting to CSV
    pub fn from_path(path: &Path) -> Self {
        match extension(path).as_deref() {
            Some("tsv" | "tab" | "txt") => TableFormat::Tsv,
            Some("json") => TableFormat::Json,
            _ => TableFormat::Csv,
        }
    }

    /// Field delimiter for the delimited formats
    pub fn delimiter(self) -> Option<u8> {
        match self {
            TableFormat::Csv => Some(b','),
            TableFormat::Tsv => Some(b'\t'),
            TableFormat::Json => None,
        }
    }
}

impl std::str::FromStr for TableFormat {
    type Err = LocusError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(TableFormat::Csv),
            "tsv" | "tab" => Ok(TableFormat::Tsv),
            "json" => Ok(TableFormat::Json),
            _ => Err(LocusError::Parse(format!(
                "Unknown table format: '{}'. Use csv, tsv, or json",
                s
            ))),
        }
    }
}

impl std::fmt::Display for TableFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableFormat::Csv => write!(f, "csv"),
            TableFormat::Tsv => write!(f, "tsv"),
            TableFormat::Json => write!(f, "json"),
        }
    }
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
}

/// Drop blank values and repeated identifiers, keeping first-seen order
pub fn collect_identifiers<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut ids = Vec::new();

    for value in values {
        let value = value.as_ref().trim();
        if value.is_empty() || !seen.insert(value.to_string()) {
            continue;
        }
        ids.push(value.to_string());
    }

    ids
}

/// Read the distinct, non-blank identifiers of `column` from a delimited table.
///
/// Values come back trimmed; duplicates are compared after trimming.
pub fn read_identifiers<R: Read>(reader: R, delimiter: u8, column: &str) -> Result<Vec<String>> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let index = reader
        .headers()?
        .iter()
        .position(|header| header.trim_start_matches('\u{feff}') == column)
        .ok_or_else(|| LocusError::MissingColumn(column.to_string()))?;

    let mut values = Vec::new();
    for row in reader.records() {
        let row = row?;
        values.push(row.get(index).unwrap_or_default().to_string());
    }

    let ids = collect_identifiers(&values);
    debug!(rows = values.len(), distinct = ids.len(), column, "Read identifier column");

    Ok(ids)
}

/// Read identifiers from a file; `.tsv`, `.tab` and `.txt` are tab-separated
pub fn read_identifiers_from_path(path: &Path, column: &str) -> Result<Vec<String>> {
    let delimiter = match TableFormat::from_path(path) {
        TableFormat::Tsv => b'\t',
        TableFormat::Csv => b',',
        TableFormat::Json => {
            return Err(LocusError::Parse(format!(
                "'{}' is JSON; input must be a delimited table",
                path.display()
            )))
        },
    };

    let file = File::open(path)?;
    read_identifiers(file, delimiter, column)
}

/// Write records with the standard nine-column header
pub fn write_records<W: Write>(
    mut writer: W,
    records: &[AnnotationRecord],
    format: TableFormat,
) -> Result<()> {
    let Some(delimiter) = format.delimiter() else {
        serde_json::to_writer_pretty(&mut writer, records)?;
        writeln!(writer)?;
        return Ok(());
    };

    let mut writer = WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(writer);

    writer.write_record(OUTPUT_COLUMNS)?;
    for record in records {
        writer.write_record(record.cells())?;
    }
    writer.flush()?;

    Ok(())
}

/// Render records to a string in the given format
pub fn render_records(records: &[AnnotationRecord], format: TableFormat) -> Result<String> {
    let mut buffer = Vec::new();
    write_records(&mut buffer, records, format)?;
    String::from_utf8(buffer).map_err(|e| LocusError::Parse(e.to_string()))
}
