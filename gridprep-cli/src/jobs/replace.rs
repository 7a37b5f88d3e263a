//! Two-folder column sync
//!
//! For every CSV in the target folder, the same-named file in the source
//! folder supplies new values for the listed columns, aligned by row
//! position. A missing counterpart file, a missing column on either side,
//! or a row-count mismatch aborts the batch.

use anyhow::{Context, Result, bail};
use colored::Colorize;

use crate::cli::ReplaceColumnsArgs;
use crate::config::Settings;
use crate::files::{display_name, files_with_extension};
use crate::table::csv::{read_csv, write_csv};

pub fn run(args: &ReplaceColumnsArgs, settings: &Settings) -> Result<()> {
    let columns = match &args.columns {
        Some(columns) => columns.clone(),
        None => settings.renamed_columns(),
    };
    if columns.is_empty() {
        bail!("No columns to replace");
    }
    log::info!(
        "Replacing {} column(s) in {} from {}",
        columns.len(),
        args.target_dir.display(),
        args.source_dir.display()
    );

    let targets = files_with_extension(&args.target_dir, &["csv"])?;
    for path in &targets {
        let file_name = display_name(path);
        let source_path = args.source_dir.join(&file_name);

        let mut target = read_csv(path)?;
        let source = read_csv(&source_path).with_context(|| {
            format!("No readable counterpart for '{}' in {}", file_name, args.source_dir.display())
        })?;

        for name in &columns {
            let column = source
                .column(name)
                .with_context(|| format!("{}: missing column '{}'", source_path.display(), name))?;
            target
                .set_column(name, column.cells.clone())
                .with_context(|| format!("{}: cannot replace column '{}'", path.display(), name))?;
        }

        write_csv(&target, path)?;
        println!("Replaced columns in {}", file_name.cyan());
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

    fn args(target: &std::path::Path, source: &std::path::Path, columns: &[&str]) -> ReplaceColumnsArgs {
        ReplaceColumnsArgs {
            target_dir: target.to_path_buf(),
            source_dir: source.to_path_buf(),
            columns: Some(columns.iter().map(|c| c.to_string()).collect()),
        }
    }

    #[test]
    fn test_listed_columns_take_source_values() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("a");
        let source = dir.path().join("b");
        fs::create_dir(&target).unwrap();
        fs::create_dir(&source).unwrap();

        fs::write(target.join("x.csv"), "TRE,other\n10,1\n20,2\n").unwrap();
        fs::write(source.join("x.csv"), "TRE,other\n99,5\n98,6\n").unwrap();

        run(&args(&target, &source, &["TRE"]), &Settings::default()).unwrap();

        let table = read_csv(&target.join("x.csv")).unwrap();
        assert_eq!(
            table.column("TRE").unwrap().cells,
            vec![Cell::Number(99.0), Cell::Number(98.0)]
        );
        // Unlisted columns keep the target's own values
        assert_eq!(
            table.column("other").unwrap().cells,
            vec![Cell::Number(1.0), Cell::Number(2.0)]
        );
    }

    #[test]
    fn test_missing_counterpart_file_aborts() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("a");
        let source = dir.path().join("b");
        fs::create_dir(&target).unwrap();
        fs::create_dir(&source).unwrap();
        fs::write(target.join("x.csv"), "TRE\n10\n").unwrap();

        let result = run(&args(&target, &source, &["TRE"]), &Settings::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_row_count_mismatch_aborts_without_writing() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("a");
        let source = dir.path().join("b");
        fs::create_dir(&target).unwrap();
        fs::create_dir(&source).unwrap();

        fs::write(target.join("x.csv"), "TRE\n10\n20\n").unwrap();
        fs::write(source.join("x.csv"), "TRE\n99\n").unwrap();

        let result = run(&args(&target, &source, &["TRE"]), &Settings::default());
        assert!(result.is_err());
        // Aborted before the staged write, target untouched
        assert_eq!(
            fs::read_to_string(target.join("x.csv")).unwrap(),
            "TRE\n10\n20\n"
        );
    }

    #[test]
    fn test_default_column_list_comes_from_rename_mapping() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("a");
        let source = dir.path().join("b");
        fs::create_dir(&target).unwrap();
        fs::create_dir(&source).unwrap();

        let header: Vec<String> = Settings::default().renamed_columns();
        let row: Vec<String> = (0..header.len()).map(|i| i.to_string()).collect();
        let old = format!("{}\n{}\n", header.join(","), vec!["0"; header.len()].join(","));
        let new = format!("{}\n{}\n", header.join(","), row.join(","));
        fs::write(target.join("x.csv"), &old).unwrap();
        fs::write(source.join("x.csv"), &new).unwrap();

        run(
            &ReplaceColumnsArgs {
                target_dir: target.clone(),
                source_dir: source,
                columns: None,
            },
            &Settings::default(),
        )
        .unwrap();

        assert_eq!(fs::read_to_string(target.join("x.csv")).unwrap(), new);
    }
}
