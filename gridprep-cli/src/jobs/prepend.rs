//! Positional column-range copier
//!
//! Takes a contiguous 0-indexed range of the source CSV's columns and
//! inserts the slice, in source order, at the front of every CSV in the
//! target folder. A name collision with an existing target column or a
//! row-count mismatch aborts the batch.

use anyhow::{Context, Result, bail};
use colored::Colorize;

use crate::cli::PrependColumnsArgs;
use crate::files::{display_name, files_with_extension};
use crate::table::csv::{read_csv, write_csv};

pub fn run(args: &PrependColumnsArgs) -> Result<()> {
    let source = read_csv(&args.source)?;

    if args.end < args.start || args.end >= source.n_cols() {
        bail!(
            "Column range {}..={} is out of bounds for '{}' ({} columns)",
            args.start,
            args.end,
            args.source.display(),
            source.n_cols()
        );
    }
    let slice = &source.columns()[args.start..=args.end];
    log::info!(
        "Copying columns {:?} from {}",
        slice.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(),
        args.source.display()
    );

    let targets = files_with_extension(&args.target_dir, &["csv"])?;
    for path in &targets {
        let mut table = read_csv(path)?;
        for (offset, column) in slice.iter().enumerate() {
            table
                .insert_column(offset, column.name.clone(), column.cells.clone())
                .with_context(|| format!("{}: cannot insert column", path.display()))?;
        }
        write_csv(&table, path)?;
        println!("Columns inserted into {}", display_name(path).cyan());
    }

    println!("All files processed.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    use tempfile::tempdir;

    use crate::table::Cell;

    #[test]
    fn test_slice_lands_at_front_in_source_order() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("source.csv");
        let targets = dir.path().join("targets");
        fs::create_dir(&targets).unwrap();

        fs::write(&source, "Time_Index,gen_1,gen_2,gen_3\n1,0.1,0.2,0.3\n2,0.4,0.5,0.6\n").unwrap();
        fs::write(targets.join("scenario.csv"), "price\n40\n55\n").unwrap();

        run(&PrependColumnsArgs {
            source,
            target_dir: targets.clone(),
            start: 1,
            end: 2,
        })
        .unwrap();

        let table = read_csv(&targets.join("scenario.csv")).unwrap();
        assert_eq!(table.column_names(), vec!["gen_1", "gen_2", "price"]);
        assert_eq!(
            table.column("gen_2").unwrap().cells,
            vec![Cell::Number(0.2), Cell::Number(0.5)]
        );
    }

    #[test]
    fn test_name_collision_aborts() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("source.csv");
        let targets = dir.path().join("targets");
        fs::create_dir(&targets).unwrap();

        fs::write(&source, "Time_Index,gen_1\n1,0.1\n").unwrap();
        fs::write(targets.join("scenario.csv"), "gen_1\n0.9\n").unwrap();

        let result = run(&PrependColumnsArgs {
            source,
            target_dir: targets,
            start: 1,
            end: 1,
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_row_count_mismatch_aborts() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("source.csv");
        let targets = dir.path().join("targets");
        fs::create_dir(&targets).unwrap();

        fs::write(&source, "Time_Index,gen_1\n1,0.1\n2,0.2\n").unwrap();
        fs::write(targets.join("scenario.csv"), "price\n40\n").unwrap();

        let result = run(&PrependColumnsArgs {
            source,
            target_dir: targets,
            start: 1,
            end: 1,
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_out_of_bounds_range_is_an_error() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("source.csv");
        fs::write(&source, "Time_Index,gen_1\n1,0.1\n").unwrap();

        let result = run(&PrependColumnsArgs {
            source,
            target_dir: dir.path().to_path_buf(),
            start: 1,
            end: 33,
        });
        assert!(result.is_err());
    }
}
