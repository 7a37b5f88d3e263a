//! Schema alignment against a reference CSV
//!
//! Every CSV in the target folder ends up with exactly the reference
//! file's column set, in the reference's order. Missing columns are filled
//! with the reference file's own values, which is only meaningful when the
//! files share one row index; a row-count mismatch aborts the batch.
//! Columns the reference does not have are dropped.

use anyhow::{Context, Result};
use colored::Colorize;

use crate::cli::ReconcileArgs;
use crate::files::{display_name, files_with_extension};
use crate::table::csv::{read_csv, write_csv};

pub fn run(args: &ReconcileArgs) -> Result<()> {
    let reference = read_csv(&args.reference)?;
    let reference_names: Vec<String> =
        reference.column_names().iter().map(|s| s.to_string()).collect();
    log::info!(
        "Reconciling against {} ({} columns)",
        args.reference.display(),
        reference_names.len()
    );

    let targets = files_with_extension(&args.target_dir, &["csv"])?;
    for path in &targets {
        let mut table = read_csv(path)?;

        let mut added = 0;
        for column in reference.columns() {
            if table.has_column(&column.name) {
                continue;
            }
            table
                .push_column(column.name.clone(), column.cells.clone())
                .with_context(|| {
                    format!(
                        "{}: cannot fill column '{}' from reference",
                        path.display(),
                        column.name
                    )
                })?;
            added += 1;
        }

        let dropped = table.n_cols() - reference_names.len();
        let aligned = table.select(&reference_names)?;
        write_csv(&aligned, path)?;

        println!(
            "Reconciled {} ({} column(s) added, {} dropped)",
            display_name(path).cyan(),
            added,
            dropped
        );
    }

    println!("All files processed.");
    Ok(())
}
