//! Command-line interface definitions
//!
//! One subcommand per batch job. Argument defaults mirror the layout the
//! tool was built around (`Load_data_XL` workbooks, a
//! `Generators_variability` folder with a `test_folder` of scenario copies),
//! so a bare invocation runs the standard preparation step in place.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "gridprep",
    version,
    about = "Reshape ERCOT load and generator-variability tables into capacity-expansion model inputs"
)]
pub struct Cli {
    /// Path to a TOML settings file (rename mapping, zone groups)
    #[arg(long, global = true)]
    pub settings: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sum target columns per sheet across every workbook in a directory
    SumSheets(SumSheetsArgs),
    /// Append a row-wise Total column per sheet and concatenate every sheet
    /// into one CSV
    RowTotal(RowTotalArgs),
    /// Derive aggregated zone-load columns from per-zone workbooks
    DeriveZones(DeriveZonesArgs),
    /// Copy a positional column range from a source CSV into the front of
    /// every CSV in a folder
    PrependColumns(PrependColumnsArgs),
    /// Make every CSV's column set and order match a reference file
    Reconcile(ReconcileArgs),
    /// Rename columns per the configured mapping
    RenameColumns(RenameColumnsArgs),
    /// Overwrite listed columns with values from same-named files in
    /// another folder
    ReplaceColumns(ReplaceColumnsArgs),
}

#[derive(Args)]
pub struct SumSheetsArgs {
    /// Directory of input workbooks
    #[arg(long, default_value = "Load_data_XL")]
    pub input_dir: PathBuf,

    /// Directory for the per-workbook `<name>_sum.csv` outputs
    #[arg(long, default_value = "Load_data")]
    pub output_dir: PathBuf,

    /// Columns to sum; sheets missing any of them are skipped
    #[arg(long, value_delimiter = ',', default_value = "FAR_WEST,NORTH,WEST")]
    pub columns: Vec<String>,
}

#[derive(Args)]
pub struct RowTotalArgs {
    /// Directory of input workbooks
    pub input_dir: PathBuf,

    /// Columns summed row-wise into the Total column; all must exist
    #[arg(long, value_delimiter = ',', required = true)]
    pub columns: Vec<String>,

    /// Concatenated output CSV
    #[arg(long, default_value = "output.csv")]
    pub output: PathBuf,
}

#[derive(Args)]
pub struct DeriveZonesArgs {
    /// Directory of input workbooks (first sheet of each is read)
    #[arg(long, default_value = "Load_data_XL")]
    pub input_dir: PathBuf,

    /// Directory for the per-workbook derived-zone CSVs
    #[arg(long, default_value = "Load_data")]
    pub output_dir: PathBuf,
}

#[derive(Args)]
pub struct PrependColumnsArgs {
    /// Source CSV the column range is copied from
    #[arg(long, default_value = "Generators_variability.csv")]
    pub source: PathBuf,

    /// Folder of CSVs the columns are inserted into
    #[arg(long, default_value = "Generators_variability")]
    pub target_dir: PathBuf,

    /// First column of the range (0-indexed, inclusive)
    #[arg(long, default_value_t = 1)]
    pub start: usize,

    /// Last column of the range (0-indexed, inclusive)
    #[arg(long, default_value_t = 33)]
    pub end: usize,
}

#[derive(Args)]
pub struct ReconcileArgs {
    /// Reference CSV whose column set and order targets are aligned to
    #[arg(
        long,
        default_value = "Generators_variability/Generators_variability_scenario_1.csv"
    )]
    pub reference: PathBuf,

    /// Folder of CSVs to align
    #[arg(long, default_value = "Generators_variability/test_folder")]
    pub target_dir: PathBuf,
}

#[derive(Args)]
pub struct RenameColumnsArgs {
    /// Folder of CSVs to rename columns in
    #[arg(long, default_value = "Generators_variability")]
    pub target_dir: PathBuf,
}

#[derive(Args)]
pub struct ReplaceColumnsArgs {
    /// Folder of CSVs whose columns are overwritten
    #[arg(long, default_value = "Generators_variability/test_folder")]
    pub target_dir: PathBuf,

    /// Folder holding the same-named CSVs the values come from
    #[arg(long, default_value = "Generators_variability")]
    pub source_dir: PathBuf,

    /// Columns to overwrite; defaults to the rename mapping's target names
    #[arg(long, value_delimiter = ',')]
    pub columns: Option<Vec<String>>,
}
