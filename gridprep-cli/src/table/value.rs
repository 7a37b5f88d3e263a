//! Cell scalar used by table columns

use std::fmt;

/// A single cell in a table column
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Blank field
    Empty,
    /// Numeric value (load MW, capacity factor, ...)
    Number(f64),
    /// Anything that does not parse as a number
    Text(String),
}

impl Cell {
    /// Parse a raw CSV field into a cell
    pub fn parse(field: &str) -> Cell {
        let trimmed = field.trim();
        if trimmed.is_empty() {
            return Cell::Empty;
        }
        match trimmed.parse::<f64>() {
            Ok(n) => Cell::Number(n),
            Err(_) => Cell::Text(field.to_string()),
        }
    }

    /// Try to get as a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Check if this cell is blank
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Number(n) => write!(f, "{}", n),
            Cell::Text(s) => write!(f, "{}", s),
        }
    }
}
