//! Batch jobs, one module per subcommand
//!
//! Every job follows the same shape: enumerate a directory, then for each
//! file read -> transform -> write. Jobs never depend on another file's
//! result, except for the reference/source tables the reconcile, prepend,
//! and replace jobs read up front.

pub mod derive_zones;
pub mod prepend;
pub mod reconcile;
pub mod rename;
pub mod replace;
pub mod row_total;
pub mod sum_sheets;
