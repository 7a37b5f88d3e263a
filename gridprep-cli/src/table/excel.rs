//! Workbook reading via calamine
//!
//! The first row of each sheet is the header; every following row is data.
//! Legacy `.xls` and `.xlsx` files are both accepted.

use std::path::Path;

use anyhow::{Context, Result};
use calamine::{Data, Range, Reader, open_workbook_auto};

use super::{Cell, Column, Table};

/// One sheet's name and contents
#[derive(Debug, Clone)]
pub struct Sheet {
    /// Sheet tab name
    pub name: String,
    /// Sheet contents
    pub table: Table,
}

/// Read every sheet of a workbook, in workbook order
pub fn read_workbook(path: &Path) -> Result<Vec<Sheet>> {
    let mut workbook = open_workbook_auto(path)
        .with_context(|| format!("Failed to open workbook: {}", path.display()))?;

    let names = workbook.sheet_names().to_owned();
    let mut sheets = Vec::with_capacity(names.len());
    for name in names {
        let range = workbook
            .worksheet_range(&name)
            .with_context(|| format!("Failed to read sheet '{}' in {}", name, path.display()))?;
        let table = table_from_range(&range)
            .with_context(|| format!("Invalid layout in sheet '{}' of {}", name, path.display()))?;
        sheets.push(Sheet { name, table });
    }
    Ok(sheets)
}

fn table_from_range(range: &Range<Data>) -> Result<Table> {
    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return Ok(Table::new());
    };

    let mut columns: Vec<Column> = header
        .iter()
        .map(|cell| Column {
            name: cell.to_string().trim().to_string(),
            cells: Vec::new(),
        })
        .collect();

    for row in rows {
        for (index, column) in columns.iter_mut().enumerate() {
            let cell = row.get(index).map_or(Cell::Empty, cell_value);
            column.cells.push(cell);
        }
    }

    Table::from_columns(columns)
}

fn cell_value(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Float(f) => Cell::Number(*f),
        Data::String(s) => Cell::Text(s.clone()),
        Data::Bool(b) => Cell::Text(b.to_string()),
        Data::DateTime(dt) => Cell::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
        Data::Error(e) => Cell::Text(e.to_string()),
    }
}
