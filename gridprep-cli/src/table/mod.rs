//! In-memory table of named columns
//!
//! Column-oriented because every job here works on whole columns: summing
//! them, renaming them, copying them between files, reordering them.

pub mod csv;
pub mod excel;
pub mod value;

pub use value::Cell;

use std::collections::HashMap;

use anyhow::{Result, bail};

/// One named column
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Column header
    pub name: String,
    /// Cell values, one per row
    pub cells: Vec<Cell>,
}

/// An ordered sequence of uniquely named, equally long columns
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    /// Create an empty table with no columns
    pub fn new() -> Table {
        Table::default()
    }

    /// Build a table from prepared columns, validating name uniqueness and
    /// equal lengths
    pub fn from_columns(columns: Vec<Column>) -> Result<Table> {
        let mut table = Table::new();
        for column in columns {
            table.push_column(column.name, column.cells)?;
        }
        Ok(table)
    }

    /// Number of rows (0 for a table with no columns)
    pub fn n_rows(&self) -> usize {
        self.columns.first().map_or(0, |c| c.cells.len())
    }

    /// Number of columns
    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    /// All columns in order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Column names in order
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Check whether a column exists
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }

    /// Look up a column by name
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Append a column at the end
    pub fn push_column(&mut self, name: String, cells: Vec<Cell>) -> Result<()> {
        let index = self.columns.len();
        self.insert_column(index, name, cells)
    }

    /// Insert a column at a position, shifting later columns right
    ///
    /// The first column inserted into an empty table fixes the row count.
    pub fn insert_column(&mut self, index: usize, name: String, cells: Vec<Cell>) -> Result<()> {
        if self.has_column(&name) {
            bail!("Column '{}' already exists", name);
        }
        if index > self.columns.len() {
            bail!(
                "Column index {} out of bounds ({} columns)",
                index,
                self.columns.len()
            );
        }
        if !self.columns.is_empty() && cells.len() != self.n_rows() {
            bail!(
                "Column '{}' has {} rows, table has {}",
                name,
                cells.len(),
                self.n_rows()
            );
        }
        self.columns.insert(index, Column { name, cells });
        Ok(())
    }

    /// Overwrite an existing column's values, keeping its position
    pub fn set_column(&mut self, name: &str, cells: Vec<Cell>) -> Result<()> {
        let n_rows = self.n_rows();
        let Some(column) = self.columns.iter_mut().find(|c| c.name == name) else {
            bail!("Column '{}' does not exist", name);
        };
        if cells.len() != n_rows {
            bail!(
                "Column '{}' replacement has {} rows, table has {}",
                name,
                cells.len(),
                n_rows
            );
        }
        column.cells = cells;
        Ok(())
    }

    /// Rename columns per the mapping; keys absent from the table are
    /// skipped. Returns how many columns were renamed.
    pub fn rename_columns(&mut self, mapping: &HashMap<String, String>) -> Result<usize> {
        let mut renamed = 0;
        for index in 0..self.columns.len() {
            let Some(new_name) = mapping.get(&self.columns[index].name) else {
                continue;
            };
            if self.has_column(new_name) {
                bail!(
                    "Renaming '{}' to '{}' would duplicate an existing column",
                    self.columns[index].name,
                    new_name
                );
            }
            self.columns[index].name = new_name.clone();
            renamed += 1;
        }
        Ok(renamed)
    }

    /// Build a new table holding the named columns in the given order.
    /// Columns not listed are dropped; a listed column that is missing is an
    /// error.
    pub fn select(&self, names: &[String]) -> Result<Table> {
        let mut columns = Vec::with_capacity(names.len());
        for name in names {
            let Some(column) = self.column(name) else {
                bail!("Column '{}' does not exist", name);
            };
            columns.push(column.clone());
        }
        Table::from_columns(columns)
    }

    /// Append another table's rows; the column layout must match exactly
    pub fn append_rows(&mut self, other: Table) -> Result<()> {
        if self.column_names() != other.column_names() {
            bail!(
                "Column layout mismatch: {:?} vs {:?}",
                self.column_names(),
                other.column_names()
            );
        }
        for (column, incoming) in self.columns.iter_mut().zip(other.columns) {
            column.cells.extend(incoming.cells);
        }
        Ok(())
    }

    /// Arithmetic sum of one column; non-numeric cells are skipped
    pub fn column_sum(&self, name: &str) -> Result<f64> {
        let Some(column) = self.column(name) else {
            bail!("Column '{}' does not exist", name);
        };
        Ok(column.cells.iter().filter_map(Cell::as_number).sum())
    }

    /// Row-wise sums over the listed columns; every column must exist.
    /// Non-numeric cells contribute nothing to their row.
    pub fn row_sums(&self, names: &[String]) -> Result<Vec<f64>> {
        let mut selected = Vec::with_capacity(names.len());
        for name in names {
            let Some(column) = self.column(name) else {
                bail!("Column '{}' does not exist", name);
            };
            selected.push(column);
        }
        let mut sums = vec![0.0; self.n_rows()];
        for column in selected {
            for (sum, cell) in sums.iter_mut().zip(&column.cells) {
                if let Some(n) = cell.as_number() {
                    *sum += n;
                }
            }
        }
        Ok(sums)
    }
}
