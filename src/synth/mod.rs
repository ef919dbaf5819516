//! Template-driven synthesis of new table entries
//!
//! Pure data transformation: given a classname and a default profile, build
//! one entry node with the fixed schema the server expects. No merge
//! semantics live here; insertion helpers skip names that already exist.

pub mod defaults;

pub use defaults::{DefaultProfiles, EventDefaults, TypeDefaults};

use std::collections::HashSet;

use crate::formats::xml::{XmlDocument, XmlNode};

/// The four counting flags a `type` entry carries, plus `crafted` and
/// `deloot` which synthesized entries always leave at `"0"`.
const COUNT_FLAGS: [&str; 4] = [
    "count_in_cargo",
    "count_in_hoarder",
    "count_in_map",
    "count_in_player",
];

/// Build a `type` entry for a classname from a default profile.
#[must_use]
pub fn synthesize_type_entry(classname: &str, defaults: &TypeDefaults) -> XmlNode {
    let mut entry = XmlNode::new("type");
    entry.set_attr("name", classname);

    entry.push_text_child("nominal", &defaults.nominal.to_string());
    entry.push_text_child("lifetime", &defaults.lifetime.to_string());
    entry.push_text_child("restock", &defaults.restock.to_string());
    entry.push_text_child("min", &defaults.min.to_string());
    entry.push_text_child("quantmin", &defaults.quantmin.to_string());
    entry.push_text_child("quantmax", &defaults.quantmax.to_string());
    entry.push_text_child("cost", &defaults.cost.to_string());

    let mut flags = XmlNode::new("flags");
    for flag in COUNT_FLAGS {
        let enabled = defaults.flags.iter().any(|f| f == flag);
        flags.set_attr(flag, if enabled { "1" } else { "0" });
    }
    flags.set_attr("crafted", "0");
    flags.set_attr("deloot", "0");
    entry.children.push(flags);

    let mut category = XmlNode::new("category");
    category.set_attr("name", &defaults.category);
    entry.children.push(category);

    for usage in &defaults.usage {
        let mut tag = XmlNode::new("usage");
        tag.set_attr("name", usage);
        entry.children.push(tag);
    }

    entry
}

/// Build an `event` entry for a vehicle classname.
///
/// The event is named `{classname}_Event` and carries one `child` spawn slot
/// referencing the classname.
#[must_use]
pub fn synthesize_event_entry(classname: &str, defaults: &EventDefaults) -> XmlNode {
    let mut entry = XmlNode::new("event");
    entry.set_attr("name", &format!("{classname}_Event"));

    entry.push_text_child("nominal", &defaults.nominal.to_string());
    entry.push_text_child("min", &defaults.min.to_string());
    entry.push_text_child("max", &defaults.max.to_string());
    entry.push_text_child("lifetime", &defaults.lifetime.to_string());
    entry.push_text_child("restock", &defaults.restock.to_string());
    entry.push_text_child("saferadius", &defaults.saferadius.to_string());
    entry.push_text_child("distanceradius", &defaults.distanceradius.to_string());
    entry.push_text_child("cleanupradius", &defaults.cleanupradius.to_string());

    let mut flags = XmlNode::new("flags");
    flags.set_attr("deletable", "1");
    entry.children.push(flags);

    entry.push_text_child("position", "fixed");
    entry.push_text_child("limit", "child");
    entry.push_text_child("active", "1");

    let mut children = XmlNode::new("children");
    let mut child = XmlNode::new("child");
    child.set_attr("lootmax", "0");
    child.set_attr("lootmin", "0");
    child.set_attr("max", "3");
    child.set_attr("min", "1");
    child.set_attr("type", classname);
    children.children.push(child);
    entry.children.push(children);

    entry
}

/// Insert synthesized `type` entries for each classname, skipping names the
/// document already contains. Returns the number of entries added.
pub fn add_type_entries(
    doc: &mut XmlDocument,
    classnames: &[String],
    defaults: &TypeDefaults,
) -> usize {
    let existing: HashSet<String> = doc
        .entry_names("type")
        .into_iter()
        .map(str::to_string)
        .collect();

    let mut added = 0;
    for classname in classnames {
        if existing.contains(classname) {
            tracing::debug!("type {classname} already present, skipping");
            continue;
        }
        doc.root
            .children
            .push(synthesize_type_entry(classname, defaults));
        added += 1;
    }
    added
}

/// Insert synthesized vehicle `event` entries for each classname, skipping
/// event names the document already contains. Returns the number added.
pub fn add_event_entries(
    doc: &mut XmlDocument,
    classnames: &[String],
    defaults: &EventDefaults,
) -> usize {
    let existing: HashSet<String> = doc
        .entry_names("event")
        .into_iter()
        .map(str::to_string)
        .collect();

    let mut added = 0;
    for classname in classnames {
        let event_name = format!("{classname}_Event");
        if existing.contains(&event_name) {
            tracing::debug!("event {event_name} already present, skipping");
            continue;
        }
        doc.root
            .children
            .push(synthesize_event_entry(classname, defaults));
        added += 1;
    }
    added
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_type_entry_schema() {
        let profiles = DefaultProfiles::default();
        let entry = synthesize_type_entry("AKM", &profiles.weapons);

        assert_eq!(entry.tag, "type");
        assert_eq!(entry.attr("name"), Some("AKM"));
        assert_eq!(entry.child_text("nominal"), Some("10"));
        assert_eq!(entry.child_text("lifetime"), Some("3600"));
        assert_eq!(entry.child_text("quantmin"), Some("-1"));
        assert_eq!(entry.child_text("cost"), Some("100"));

        let flags = entry.child("flags").unwrap();
        assert_eq!(flags.attr("count_in_cargo"), Some("1"));
        assert_eq!(flags.attr("count_in_player"), Some("1"));
        assert_eq!(flags.attr("crafted"), Some("0"));
        assert_eq!(flags.attr("deloot"), Some("0"));

        assert_eq!(entry.child("category").unwrap().attr("name"), Some("weapons"));
        let usages: Vec<_> = entry
            .children
            .iter()
            .filter(|c| c.tag == "usage")
            .filter_map(|c| c.attr("name"))
            .collect();
        assert_eq!(usages, vec!["Military", "Police"]);
    }

    #[test]
    fn test_vehicle_flags_disable_cargo_counting() {
        let profiles = DefaultProfiles::default();
        let entry = synthesize_type_entry("OffroadHatchback", &profiles.vehicles);
        let flags = entry.child("flags").unwrap();
        assert_eq!(flags.attr("count_in_cargo"), Some("0"));
        assert_eq!(flags.attr("count_in_map"), Some("1"));
    }

    #[test]
    fn test_event_entry_schema() {
        let entry = synthesize_event_entry("OffroadHatchback", &EventDefaults::default());

        assert_eq!(entry.tag, "event");
        assert_eq!(entry.attr("name"), Some("OffroadHatchback_Event"));
        assert_eq!(entry.child_text("nominal"), Some("2"));
        assert_eq!(entry.child_text("saferadius"), Some("500"));
        assert_eq!(entry.child_text("position"), Some("fixed"));
        assert_eq!(entry.child_text("limit"), Some("child"));
        assert_eq!(entry.child_text("active"), Some("1"));
        assert_eq!(entry.child("flags").unwrap().attr("deletable"), Some("1"));

        let children = entry.child("children").unwrap();
        assert_eq!(children.children.len(), 1);
        let child = &children.children[0];
        assert_eq!(child.tag, "child");
        assert_eq!(child.attr("type"), Some("OffroadHatchback"));
        assert_eq!(child.attr("max"), Some("3"));
        assert_eq!(child.attr("min"), Some("1"));
    }

    #[test]
    fn test_add_type_entries_skips_existing() {
        let profiles = DefaultProfiles::default();
        let mut doc = XmlDocument::with_root_tag("types");
        doc.root
            .children
            .push(synthesize_type_entry("AKM", &profiles.weapons));

        let added = add_type_entries(
            &mut doc,
            &["AKM".to_string(), "M4A1".to_string()],
            &profiles.weapons,
        );

        assert_eq!(added, 1);
        assert_eq!(doc.entry_names("type"), vec!["AKM", "M4A1"]);
    }

    #[test]
    fn test_add_event_entries_skips_existing() {
        let mut doc = XmlDocument::with_root_tag("eventposdef");
        let defaults = EventDefaults::default();
        add_event_entries(&mut doc, &["OffroadHatchback".to_string()], &defaults);
        let added = add_event_entries(
            &mut doc,
            &["OffroadHatchback".to_string(), "Sedan02".to_string()],
            &defaults,
        );

        assert_eq!(added, 1);
        assert_eq!(
            doc.entry_names("event"),
            vec!["OffroadHatchback_Event", "Sedan02_Event"]
        );
    }
}
