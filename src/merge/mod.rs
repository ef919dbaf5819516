//! Name-keyed merging of DayZ server table documents

pub mod batch;
pub mod resolver;
pub mod types;

pub use batch::{merge_table_file, merge_table_files};
pub use resolver::merge_documents;
pub use types::{MergePolicy, MergeReport, MergeStats};
