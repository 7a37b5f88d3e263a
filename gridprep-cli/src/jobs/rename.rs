//! Fixed-mapping column renamer
//!
//! Renames columns per the configured mapping in every CSV of a folder.
//! Mapping keys absent from a file are ignored, so a second run over the
//! same folder is a no-op.

use anyhow::Result;

use crate::cli::RenameColumnsArgs;
use crate::config::Settings;
use crate::files::{display_name, files_with_extension};
use crate::table::csv::{read_csv, write_csv};

pub fn run(args: &RenameColumnsArgs, settings: &Settings) -> Result<()> {
    log::info!(
        "Renaming with {} mapping entries in {}",
        settings.rename.len(),
        args.target_dir.display()
    );

    let targets = files_with_extension(&args.target_dir, &["csv"])?;
    for path in &targets {
        let mut table = read_csv(path)?;
        let renamed = table.rename_columns(&settings.rename)?;
        write_csv(&table, path)?;
        log::debug!("{}: renamed {} column(s)", display_name(path), renamed);
    }

    println!("All files processed.");
    Ok(())
}
