//! Zone-group load derivation
//!
//! Reads the first sheet of each workbook, sums each configured zone
//! group's member columns row-wise, and writes a CSV holding only the
//! derived columns, one output per workbook. Member columns must exist.

use std::fs;

use anyhow::{Context, Result, bail};
use colored::Colorize;

use crate::cli::DeriveZonesArgs;
use crate::config::Settings;
use crate::files::{WORKBOOK_EXTENSIONS, display_name, files_with_extension};
use crate::table::excel::read_workbook;
use crate::table::{Cell, Table, csv::write_csv};

pub fn run(args: &DeriveZonesArgs, settings: &Settings) -> Result<()> {
    if settings.zones.is_empty() {
        bail!("No zone groups configured");
    }

    fs::create_dir_all(&args.output_dir).with_context(|| {
        format!("Failed to create output directory: {}", args.output_dir.display())
    })?;

    let workbooks = files_with_extension(&args.input_dir, WORKBOOK_EXTENSIONS)?;
    log::info!(
        "Deriving {} zone group(s) over {} workbook(s) in {}",
        settings.zones.len(),
        workbooks.len(),
        args.input_dir.display()
    );

    for path in &workbooks {
        let sheets = read_workbook(path)?;
        let Some(first) = sheets.into_iter().next() else {
            bail!("Workbook has no sheets: {}", path.display());
        };

        let mut derived = Table::new();
        for group in &settings.zones {
            let sums = first.table.row_sums(&group.members).with_context(|| {
                format!("{}: cannot derive '{}'", display_name(path), group.name)
            })?;
            derived.push_column(
                group.name.clone(),
                sums.into_iter().map(Cell::Number).collect(),
            )?;
        }

        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| display_name(path));
        let output = args.output_dir.join(format!("{}.csv", stem));
        write_csv(&derived, &output)?;
        log::debug!("Derived zones for {} -> {}", display_name(path), output.display());
    }

    println!(
        "{}",
        "Results have been written to CSV files in the folder.".green()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::Workbook;
    use tempfile::tempdir;

    use crate::table::csv::read_csv;

    #[test]
    fn test_derives_zone_columns_from_first_sheet() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("xl");
        let output = dir.path().join("out");
        fs::create_dir(&input).unwrap();

        let zones = [
            "FAR_WEST", "NORTH", "WEST", "COAST", "EAST", "NORTH_C", "SOUTHERN", "SOUTH_C",
        ];
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        for (col, name) in zones.iter().enumerate() {
            sheet.write_string(0, col as u16, *name).unwrap();
            sheet.write_number(1, col as u16, col as f64).unwrap();
            sheet.write_number(2, col as u16, 1.0).unwrap();
        }
        workbook.save(input.join("hourly_2030.xlsx")).unwrap();

        run(
            &DeriveZonesArgs {
                input_dir: input,
                output_dir: output.clone(),
            },
            &Settings::default(),
        )
        .unwrap();

        let derived = read_csv(&output.join("hourly_2030.csv")).unwrap();
        assert_eq!(derived.column_names(), vec!["TRE_WEST", "TRE"]);
        // FAR_WEST+NORTH+WEST = 0+1+2, COAST+EAST+NORTH_C+SOUTHERN+SOUTH_C = 3+4+5+6+7
        assert_eq!(
            derived.column("TRE_WEST").unwrap().cells,
            vec![Cell::Number(3.0), Cell::Number(3.0)]
        );
        assert_eq!(
            derived.column("TRE").unwrap().cells,
            vec![Cell::Number(25.0), Cell::Number(5.0)]
        );
    }

    #[test]
    fn test_missing_member_column_aborts() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("xl");
        let output = dir.path().join("out");
        fs::create_dir(&input).unwrap();

        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, "FAR_WEST").unwrap();
        sheet.write_number(1, 0, 1.0).unwrap();
        workbook.save(input.join("partial.xlsx")).unwrap();

        let result = run(
            &DeriveZonesArgs {
                input_dir: input,
                output_dir: output,
            },
            &Settings::default(),
        );
        assert!(result.is_err());
    }
}
