//! Core types for merge operations
//!

use std::fmt;
use std::ops::AddAssign;
use std::path::PathBuf;

/// Conflict rule applied when an incoming entry's name already exists in the
/// destination, uniform for the duration of one merge call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergePolicy {
    /// Leave the existing destination entry untouched.
    #[default]
    Skip,
    /// Replace the existing entry; the replacement moves to the end of the
    /// destination's child list.
    Overwrite,
}

impl MergePolicy {
    /// Build a policy from the `overwrite_existing` configuration flag.
    #[must_use]
    pub fn from_overwrite(overwrite: bool) -> Self {
        if overwrite {
            Self::Overwrite
        } else {
            Self::Skip
        }
    }
}

impl fmt::Display for MergePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Skip => write!(f, "skip"),
            Self::Overwrite => write!(f, "overwrite"),
        }
    }
}

/// Counts produced by one merge of a source document into a destination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Entries appended that did not exist in the destination.
    pub added: usize,
    /// Existing entries replaced under [`MergePolicy::Overwrite`].
    pub updated: usize,
    /// Incoming entries left unapplied under [`MergePolicy::Skip`].
    pub skipped: usize,
}

impl MergeStats {
    /// Total number of entries the merge looked at (named entries only).
    #[must_use]
    pub fn total(&self) -> usize {
        self.added + self.updated + self.skipped
    }

    /// Get a summary string.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{} added, {} updated, {} skipped",
            self.added, self.updated, self.skipped
        )
    }
}

impl AddAssign for MergeStats {
    fn add_assign(&mut self, rhs: Self) {
        self.added += rhs.added;
        self.updated += rhs.updated;
        self.skipped += rhs.skipped;
    }
}

impl fmt::Display for MergeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary())
    }
}

/// Result of merging several source files into one destination table.
#[derive(Debug, Clone, Default)]
pub struct MergeReport {
    /// Aggregated counts across all merged sources.
    pub totals: MergeStats,
    /// Per-source counts, in merge order.
    pub per_source: Vec<(PathBuf, MergeStats)>,
    /// Sources that could not be parsed and were skipped.
    pub failed_sources: Vec<PathBuf>,
}

impl MergeReport {
    /// Whether every source file was merged.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failed_sources.is_empty()
    }

    /// Get a summary of the whole run.
    #[must_use]
    pub fn summary(&self) -> String {
        if self.failed_sources.is_empty() {
            format!("{} from {} file(s)", self.totals, self.per_source.len())
        } else {
            format!(
                "{} from {} file(s), {} file(s) skipped",
                self.totals,
                self.per_source.len(),
                self.failed_sources.len()
            )
        }
    }
}

impl fmt::Display for MergeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.summary())?;
        for (path, stats) in &self.per_source {
            writeln!(f, "  {}: {stats}", path.display())?;
        }
        for path in &self.failed_sources {
            writeln!(f, "  {}: skipped (parse failure)", path.display())?;
        }
        Ok(())
    }
}
