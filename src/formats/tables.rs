//! The three DayZ server table document kinds

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::xml::XmlDocument;

/// Which server table a document represents.
///
/// Each kind fixes the root tag and the tag of its mergeable entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableKind {
    /// Loot table (`types.xml`), root `types`, entries `type`.
    Types,
    /// Spawn event table (`cfgeventspawns.xml` / `events.xml`), root
    /// `eventposdef`, entries `event`.
    Events,
    /// Spawnable type table (`spawnabletypes.xml`), root `spawnabletypes`,
    /// entries `type`; entry bodies are merged opaquely by name.
    SpawnableTypes,
}

impl TableKind {
    /// Root tag for this table kind.
    #[must_use]
    pub fn root_tag(self) -> &'static str {
        match self {
            Self::Types => "types",
            Self::Events => "eventposdef",
            Self::SpawnableTypes => "spawnabletypes",
        }
    }

    /// Tag of the named entries this table is merged by.
    #[must_use]
    pub fn entry_tag(self) -> &'static str {
        match self {
            Self::Types | Self::SpawnableTypes => "type",
            Self::Events => "event",
        }
    }

    /// An empty document of this kind, used when the destination file is
    /// absent.
    #[must_use]
    pub fn empty_document(self) -> XmlDocument {
        XmlDocument::with_root_tag(self.root_tag())
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Types => write!(f, "types"),
            Self::Events => write!(f, "events"),
            Self::SpawnableTypes => write!(f, "spawnabletypes"),
        }
    }
}

impl FromStr for TableKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "types" => Ok(Self::Types),
            "events" | "eventposdef" | "cfgeventspawns" => Ok(Self::Events),
            "spawnabletypes" | "spawnable" => Ok(Self::SpawnableTypes),
            _ => Err(format!(
                "Invalid table '{s}'. Valid values: types, events, spawnabletypes"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags() {
        assert_eq!(TableKind::Types.root_tag(), "types");
        assert_eq!(TableKind::Types.entry_tag(), "type");
        assert_eq!(TableKind::Events.root_tag(), "eventposdef");
        assert_eq!(TableKind::Events.entry_tag(), "event");
        assert_eq!(TableKind::SpawnableTypes.root_tag(), "spawnabletypes");
        assert_eq!(TableKind::SpawnableTypes.entry_tag(), "type");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("types".parse::<TableKind>().unwrap(), TableKind::Types);
        assert_eq!(
            "cfgeventspawns".parse::<TableKind>().unwrap(),
            TableKind::Events
        );
        assert!("foo".parse::<TableKind>().is_err());
    }
}
