//! Name-keyed merge of one table document into another
//!
//! Incoming entries are reconciled against the destination's existing entries
//! by their `name` attribute: unknown names are appended, known names are
//! skipped or replaced according to the [`MergePolicy`]. A replaced entry
//! moves to the end of the destination's child list; consuming tooling
//! depends on that append-at-end ordering, so it is deliberate.

use std::collections::HashMap;

use crate::formats::xml::{XmlDocument, XmlNode};

use super::types::{MergePolicy, MergeStats};

/// Merge the source document's named entries into the destination.
///
/// Only direct children of the source root whose tag equals `entry_tag` are
/// considered; they are moved out of the source document, not copied. Entries
/// without a `name` attribute are ignored and count toward nothing. The
/// destination's name-uniqueness invariant (one entry per name) holds on
/// return.
pub fn merge_documents(
    dest: &mut XmlDocument,
    source: XmlDocument,
    entry_tag: &str,
    policy: MergePolicy,
) -> MergeStats {
    let mut index = EntryIndex::build(&dest.root, entry_tag);
    let mut stats = MergeStats::default();

    for entry in source.root.children {
        if entry.tag != entry_tag {
            continue;
        }
        let Some(name) = entry.attr("name").map(str::to_string) else {
            tracing::debug!("ignoring <{entry_tag}> entry without a name attribute");
            continue;
        };

        match index.position(&name) {
            None => {
                dest.root.children.push(entry);
                index.insert(name, dest.root.children.len() - 1);
                stats.added += 1;
            }
            Some(pos) if policy == MergePolicy::Overwrite => {
                dest.root.children.remove(pos);
                index.shift_after_removal(pos);
                dest.root.children.push(entry);
                index.insert(name, dest.root.children.len() - 1);
                stats.updated += 1;
            }
            Some(_) => {
                stats.skipped += 1;
            }
        }
    }

    stats
}

/// Positions of a root's named entries, keyed by their `name` attribute.
///
/// Built once per merge call and maintained incrementally so lookups stay
/// constant-time across a source's entries.
struct EntryIndex {
    positions: HashMap<String, usize>,
}

impl EntryIndex {
    /// Index the root's direct children with the given tag. If the
    /// destination already carries duplicate names the last occurrence wins.
    fn build(root: &XmlNode, entry_tag: &str) -> Self {
        let mut positions = HashMap::new();
        for (pos, child) in root.children.iter().enumerate() {
            if child.tag != entry_tag {
                continue;
            }
            if let Some(name) = child.attr("name") {
                positions.insert(name.to_string(), pos);
            }
        }
        EntryIndex { positions }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    fn insert(&mut self, name: String, pos: usize) {
        self.positions.insert(name, pos);
    }

    /// Account for the removal of the child at `removed`: every indexed entry
    /// past it slides down by one.
    fn shift_after_removal(&mut self, removed: usize) {
        for pos in self.positions.values_mut() {
            if *pos > removed {
                *pos -= 1;
            }
        }
    }
}
