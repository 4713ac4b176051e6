//! Table data files: one row per line, `;`-separated, no header. Null cells
//! are written as empty fields and empty fields are read back as null.

use {
    crate::error::{
        CsvSnafu, FieldCountSnafu, FieldSnafu, RemoveFileSnafu, Result, WriteFileSnafu,
    },
    common::log::LogError,
    csv::{ReaderBuilder, WriterBuilder},
    def::{Row, Schema, Value},
    snafu::prelude::*,
    std::{fs, path::Path},
    tracing::debug,
};

pub const EXTENSION: &str = "csv";
pub const DELIMITER: u8 = b';';
pub const QUOTE: u8 = b'"';

/// Streams the rows of `path`, parsing every field with its column's type.
pub fn read_rows(path: &Path, schema: &Schema) -> Result<Vec<Row>> {
    let mut reader = ReaderBuilder::new()
        .delimiter(DELIMITER)
        .quote(QUOTE)
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .context(CsvSnafu { path })
        .log_error()?;

    let mut rows = vec![];
    for record in reader.records() {
        let record = record.context(CsvSnafu { path }).log_error()?;
        let line = record.position().map_or(0, |pos| pos.line());

        if record.len() != schema.len() {
            return FieldCountSnafu {
                path,
                line,
                expected: schema.len(),
                found: record.len(),
            }
            .fail()
            .log_error();
        }

        let row = record
            .iter()
            .zip(schema.columns())
            .map(|(field, col)| match field {
                "" => Ok(Value::Null),
                field => col.data_type.parse(field),
            })
            .collect::<def::Result<Row>>()
            .context(FieldSnafu { path, line })
            .log_error()?;

        rows.push(row);
    }

    debug!("loaded {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Replaces the content of `path` with `rows`.
pub fn write_rows(path: &Path, rows: &[Row]) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .delimiter(DELIMITER)
        .quote(QUOTE)
        .has_headers(false)
        .from_path(path)
        .context(CsvSnafu { path })
        .log_error()?;

    for row in rows {
        writer
            .write_record(row.iter().map(|value| match value {
                Value::Null => String::new(),
                value => value.to_string(),
            }))
            .context(CsvSnafu { path })
            .log_error()?;
    }

    writer
        .flush()
        .context(WriteFileSnafu { path })
        .log_error()?;
    debug!("saved {} rows to {}", rows.len(), path.display());

    Ok(())
}

/// Leaves an empty file at `path`.
pub fn truncate(path: &Path) -> Result<()> {
    fs::write(path, b"")
        .context(WriteFileSnafu { path })
        .log_error()
}

pub fn remove(path: &Path) -> Result<()> {
    fs::remove_file(path)
        .context(RemoveFileSnafu { path })
        .log_error()
}
