//! Row-wise Total column with concatenated output
//!
//! Every sheet of every workbook gets a `Total` column equal to the
//! row-wise sum of the listed columns, then all sheets are concatenated
//! into one CSV. The listed columns must exist everywhere and every sheet
//! must share the first sheet's column layout; this job assumes a
//! homogeneous schema and fails the batch otherwise.

use anyhow::{Context, Result};
use colored::Colorize;

use crate::cli::RowTotalArgs;
use crate::files::{display_name, files_with_extension};
use crate::table::excel::read_workbook;
use crate::table::{Cell, Table, csv::write_csv};

pub fn run(args: &RowTotalArgs) -> Result<()> {
    let workbooks = files_with_extension(&args.input_dir, &["xlsx"])?;
    log::info!(
        "Totalling {:?} over {} workbook(s) in {}",
        args.columns,
        workbooks.len(),
        args.input_dir.display()
    );

    let mut combined: Option<Table> = None;

    for path in &workbooks {
        let sheets = read_workbook(path)?;
        for sheet in sheets {
            let mut table = sheet.table;
            let totals = table.row_sums(&args.columns).with_context(|| {
                format!("Sheet '{}' in {}", sheet.name, display_name(path))
            })?;
            table.push_column(
                "Total".to_string(),
                totals.into_iter().map(Cell::Number).collect(),
            )?;
            log::debug!("Totalled sheet '{}' of {}", sheet.name, display_name(path));

            match combined.as_mut() {
                None => combined = Some(table),
                Some(acc) => acc.append_rows(table).with_context(|| {
                    format!(
                        "Sheet '{}' in {} does not match the first sheet's columns",
                        sheet.name,
                        display_name(path)
                    )
                })?,
            }
        }
    }

    let Some(combined) = combined else {
        println!("No workbooks found in '{}'.", args.input_dir.display());
        return Ok(());
    };

    write_csv(&combined, &args.output)?;
    println!(
        "Combined totals written to '{}'",
        args.output.display().to_string().cyan()
    );
    Ok(())
}
