//! Merging a batch of source files into one destination table
//!
//! The destination document is loaded once, mutated by every source in turn,
//! and written back once at the end. A source that fails to parse is logged
//! and skipped; only a write failure aborts the destination.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::formats::tables::TableKind;
use crate::formats::xml::{read_document, write_document};

use super::resolver::merge_documents;
use super::types::{MergePolicy, MergeReport, MergeStats};

/// Merge every source file into the destination table and write the result.
///
/// A missing destination starts from an empty document of the table's root
/// kind. Sources are applied in the order given.
///
/// # Errors
/// Returns an error if the destination itself cannot be parsed or the merged
/// result cannot be written.
pub fn merge_table_files(
    dest_path: &Path,
    sources: &[PathBuf],
    kind: TableKind,
    policy: MergePolicy,
) -> Result<MergeReport> {
    let mut dest = match read_document(dest_path) {
        Ok(Some(doc)) => doc,
        Ok(None) => {
            tracing::info!(
                "destination {} not found, starting from empty <{}>",
                dest_path.display(),
                kind.root_tag()
            );
            kind.empty_document()
        }
        Err(err) => return Err(err),
    };

    let mut report = MergeReport::default();

    for source_path in sources {
        let source = match read_document(source_path) {
            Ok(Some(doc)) => doc,
            Ok(None) => {
                tracing::warn!("source {} not found, skipping", source_path.display());
                report.failed_sources.push(source_path.clone());
                continue;
            }
            Err(err @ Error::ParseFailed { .. }) => {
                tracing::warn!("{err}");
                report.failed_sources.push(source_path.clone());
                continue;
            }
            Err(err) => return Err(err),
        };

        let stats = merge_documents(&mut dest, source, kind.entry_tag(), policy);
        tracing::info!("merged {}: {stats}", source_path.display());
        report.totals += stats;
        report.per_source.push((source_path.clone(), stats));
    }

    write_document(&dest, dest_path)?;
    Ok(report)
}

/// Merge a single source file into a destination table.
///
/// # Errors
/// Returns an error if either file fails to load/parse or writing fails.
pub fn merge_table_file(
    dest_path: &Path,
    source_path: &Path,
    kind: TableKind,
    policy: MergePolicy,
) -> Result<MergeStats> {
    let mut dest = read_document(dest_path)?.unwrap_or_else(|| kind.empty_document());
    let source = read_document(source_path)?.ok_or_else(|| {
        Error::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("source not found: {}", source_path.display()),
        ))
    })?;

    let stats = merge_documents(&mut dest, source, kind.entry_tag(), policy);
    write_document(&dest, dest_path)?;
    Ok(stats)
}
