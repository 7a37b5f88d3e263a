//! Per-sheet column sums across a directory of workbooks
//!
//! Produces one `<name>_sum.csv` per workbook with one row per sheet: the
//! arithmetic sum of each target column plus a `Sheet` column. A workbook
//! that fails to parse is reported and skipped; a sheet missing any target
//! column is reported and left out entirely rather than partially summed.

use std::fs;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::cli::SumSheetsArgs;
use crate::files::{WORKBOOK_EXTENSIONS, display_name, files_with_extension};
use crate::table::excel::read_workbook;
use crate::table::{Cell, Table, csv::write_csv};

pub fn run(args: &SumSheetsArgs) -> Result<()> {
    fs::create_dir_all(&args.output_dir).with_context(|| {
        format!("Failed to create output directory: {}", args.output_dir.display())
    })?;

    let workbooks = files_with_extension(&args.input_dir, WORKBOOK_EXTENSIONS)?;
    log::info!(
        "Summing {:?} over {} workbook(s) in {}",
        args.columns,
        workbooks.len(),
        args.input_dir.display()
    );

    for path in &workbooks {
        let file_name = display_name(path);

        let sheets = match read_workbook(path) {
            Ok(sheets) => sheets,
            Err(e) => {
                println!("{} {}: {:#}", "Error reading".red(), file_name, e);
                continue;
            }
        };

        let mut sums: Vec<Vec<Cell>> = vec![Vec::new(); args.columns.len()];
        let mut sheet_names: Vec<Cell> = Vec::new();

        for sheet in &sheets {
            if !args.columns.iter().all(|c| sheet.table.has_column(c)) {
                println!(
                    "Skipping sheet '{}' in file '{}' because it doesn't have the required columns.",
                    sheet.name.yellow(),
                    file_name
                );
                continue;
            }
            for (cells, column) in sums.iter_mut().zip(&args.columns) {
                cells.push(Cell::Number(sheet.table.column_sum(column)?));
            }
            sheet_names.push(Cell::Text(sheet.name.clone()));
        }

        let mut summary = Table::new();
        for (name, cells) in args.columns.iter().zip(sums) {
            summary.push_column(name.clone(), cells)?;
        }
        summary.push_column("Sheet".to_string(), sheet_names)?;

        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| file_name.clone());
        let output = args.output_dir.join(format!("{}_sum.csv", stem));
        write_csv(&summary, &output)?;
        println!(
            "Sum of specified columns from '{}' written to '{}'",
            file_name,
            output.display().to_string().cyan()
        );
    }

    println!("Processing complete.");
    Ok(())
}
