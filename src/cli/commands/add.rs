//! CLI command for adding synthesized entries to mission tables

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::config::MergeConfig;
use crate::formats::tables::TableKind;
use crate::formats::xml::{read_document, write_document};
use crate::synth::{add_event_entries, add_type_entries};

/// Classname lists accepted by `dayzmerge add`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ItemList {
    weapons: Vec<String>,
    vehicles: Vec<String>,
    items: Vec<String>,
}

/// Synthesize entries for the listed classnames and write the tables.
pub fn run(
    items_path: &Path,
    types_path: &Path,
    events_path: Option<&Path>,
    config_path: Option<&Path>,
    quiet: bool,
) -> anyhow::Result<()> {
    let content = fs::read_to_string(items_path)
        .with_context(|| format!("reading item list {}", items_path.display()))?;
    let list: ItemList = serde_json::from_str(&content)
        .with_context(|| format!("parsing item list {}", items_path.display()))?;

    let config = match config_path {
        Some(path) => MergeConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => MergeConfig::default(),
    };
    let profiles = &config.default_values;

    let mut types_doc = read_document(types_path)?
        .unwrap_or_else(|| TableKind::Types.empty_document());

    let mut added = 0;
    added += add_type_entries(&mut types_doc, &list.weapons, &profiles.weapons);
    added += add_type_entries(&mut types_doc, &list.vehicles, &profiles.vehicles);
    added += add_type_entries(&mut types_doc, &list.items, &profiles.items);
    write_document(&types_doc, types_path)?;

    if !quiet {
        println!("{}: {added} entries added", types_path.display());
    }

    let mut events_added = 0;
    if let Some(events_path) = events_path {
        if !list.vehicles.is_empty() {
            let mut events_doc = read_document(events_path)?
                .unwrap_or_else(|| TableKind::Events.empty_document());
            events_added =
                add_event_entries(&mut events_doc, &list.vehicles, &config.vehicle_event);
            write_document(&events_doc, events_path)?;

            if !quiet {
                println!("{}: {events_added} events added", events_path.display());
            }
        }
    }

    if quiet {
        println!("{added} entries added, {events_added} events added");
    }
    Ok(())
}
