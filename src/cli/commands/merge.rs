//! CLI command for merging mod tables into a mission table

use std::path::{Path, PathBuf};

use crate::formats::tables::TableKind;
use crate::merge::{merge_table_files, MergePolicy};

/// Merge the source files into the destination table and print a report.
pub fn run(
    destination: &Path,
    sources: &[PathBuf],
    table: TableKind,
    overwrite: bool,
    quiet: bool,
) -> anyhow::Result<()> {
    let policy = MergePolicy::from_overwrite(overwrite);
    let report = merge_table_files(destination, sources, table, policy)?;

    if quiet {
        println!("{}", report.summary());
    } else {
        println!("Merging into {} ({table}, {policy})", destination.display());
        for (path, stats) in &report.per_source {
            println!("  {}: {stats}", path.display());
        }
        for path in &report.failed_sources {
            println!("  {}: skipped (could not be read)", path.display());
        }
        println!();
        println!("{}", report.summary());
    }

    if !report.is_complete() {
        anyhow::bail!(
            "{} source file(s) could not be merged",
            report.failed_sources.len()
        );
    }
    Ok(())
}
