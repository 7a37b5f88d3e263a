mod cli;
mod config;
mod files;
mod jobs;
mod table;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Commands};
use crate::config::Settings;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let settings = Settings::load(cli.settings.as_deref())?;

    match cli.command {
        Commands::SumSheets(args) => jobs::sum_sheets::run(&args),
        Commands::RowTotal(args) => jobs::row_total::run(&args),
        Commands::DeriveZones(args) => jobs::derive_zones::run(&args, &settings),
        Commands::PrependColumns(args) => jobs::prepend::run(&args),
        Commands::Reconcile(args) => jobs::reconcile::run(&args),
        Commands::RenameColumns(args) => jobs::rename::run(&args, &settings),
        Commands::ReplaceColumns(args) => jobs::replace::run(&args, &settings),
    }
}
