//! CSV read/write for tables
//!
//! Writes are staged: the table is serialized to a sibling temporary file
//! which is then renamed over the destination, so an aborted batch never
//! leaves a half-written CSV behind.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use csv::{ReaderBuilder, Writer};

use super::{Cell, Column, Table};

/// Read a headered CSV file into a table
pub fn read_csv(path: &Path) -> Result<Table> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("Failed to open CSV file: {}", path.display()))?;

    let headers = reader
        .headers()
        .with_context(|| format!("Failed to read CSV header: {}", path.display()))?;
    let mut columns: Vec<Column> = headers
        .iter()
        .map(|name| Column {
            name: name.to_string(),
            cells: Vec::new(),
        })
        .collect();

    for (row_idx, record) in reader.records().enumerate() {
        let record = record.with_context(|| {
            format!("Failed to read row {} of {}", row_idx + 2, path.display())
        })?;
        for (column, field) in columns.iter_mut().zip(record.iter()) {
            column.cells.push(Cell::parse(field));
        }
    }

    Table::from_columns(columns)
        .with_context(|| format!("Invalid column layout in {}", path.display()))
}

/// Write a table to a CSV file via a staged temporary file
pub fn write_csv(table: &Table, path: &Path) -> Result<()> {
    let staged = staging_path(path);

    if table.n_cols() == 0 {
        fs::write(&staged, "")
            .with_context(|| format!("Failed to write CSV file: {}", staged.display()))?;
    } else {
        let mut writer = Writer::from_path(&staged)
            .with_context(|| format!("Failed to create CSV file: {}", staged.display()))?;

        writer
            .write_record(table.columns().iter().map(|c| c.name.as_str()))
            .context("Failed to write CSV header")?;

        for row in 0..table.n_rows() {
            writer
                .write_record(table.columns().iter().map(|c| c.cells[row].to_string()))
                .with_context(|| format!("Failed to write row {}", row + 1))?;
        }

        writer.flush().context("Failed to flush CSV writer")?;
    }

    fs::rename(&staged, path).with_context(|| {
        format!(
            "Failed to move staged file into place: {}",
            path.display()
        )
    })?;
    log::debug!("Wrote {}", path.display());
    Ok(())
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
