//! # dayzmerge
//!
//! A pure-Rust library for maintaining DayZ server mission XML tables.
//!
//! DayZ mods ship their own `types.xml`, `cfgeventspawns.xml`, and
//! `spawnabletypes.xml` fragments; the server only reads the mission's
//! copies. This crate reconciles the two by merging mod tables into the
//! mission tables entry-by-entry, keyed on each entry's `name` attribute,
//! and can synthesize brand-new entries from default profiles.
//!
//! ## Merging mod tables
//!
//! ```no_run
//! use std::path::{Path, PathBuf};
//! use dayzmerge::formats::TableKind;
//! use dayzmerge::merge::{merge_table_files, MergePolicy};
//!
//! let sources = vec![PathBuf::from("mods/@Expansion/types.xml")];
//! let report = merge_table_files(
//!     Path::new("mpmissions/dayzOffline.chernarusplus/db/types.xml"),
//!     &sources,
//!     TableKind::Types,
//!     MergePolicy::Skip,
//! )?;
//! println!("{}", report.summary());
//! # Ok::<(), dayzmerge::Error>(())
//! ```
//!
//! ## Synthesizing entries
//!
//! ```
//! use dayzmerge::formats::TableKind;
//! use dayzmerge::synth::{add_type_entries, DefaultProfiles};
//!
//! let profiles = DefaultProfiles::default();
//! let mut doc = TableKind::Types.empty_document();
//! let added = add_type_entries(&mut doc, &["AKM".to_string()], &profiles.weapons);
//! assert_eq!(added, 1);
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `dayzmerge` command-line binary

pub mod config;
pub mod error;
pub mod formats;
pub mod merge;
pub mod synth;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::config::{MergeConfig, MissionPaths};
    pub use crate::error::{Error, Result};
    pub use crate::formats::tables::TableKind;
    pub use crate::formats::xml::{
        parse_document, read_document, serialize_document, write_document, XmlDocument, XmlNode,
    };
    pub use crate::merge::{
        merge_documents, merge_table_file, merge_table_files, MergePolicy, MergeReport, MergeStats,
    };
    pub use crate::synth::{
        add_event_entries, add_type_entries, synthesize_event_entry, synthesize_type_entry,
        DefaultProfiles, EventDefaults, TypeDefaults,
    };
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
