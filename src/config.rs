//! Merge configuration
//!
//! A plain serde value loaded and saved by the CLI and handed down as
//! concrete paths and policy flags. The merge core never reads this
//! ambiently.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::synth::{DefaultProfiles, EventDefaults};

/// Server-side table locations for one mission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissionPaths {
    /// Path to the mission's `types.xml`.
    pub types: PathBuf,
    /// Path to the mission's `cfgeventspawns.xml`.
    pub events: PathBuf,
    /// Path to the mission's `spawnabletypes.xml`.
    pub spawnabletypes: PathBuf,
}

impl MissionPaths {
    /// Conventional table locations under an `mpmissions` folder.
    #[must_use]
    pub fn for_mission(name: &str) -> Self {
        let base = PathBuf::from("./mpmissions").join(name);
        MissionPaths {
            types: base.join("db/types.xml"),
            events: base.join("cfgeventspawns.xml"),
            spawnabletypes: base.join("db/spawnabletypes.xml"),
        }
    }
}

/// Top-level configuration for merge and synthesis runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeConfig {
    /// The mission whose tables are the merge destinations.
    pub active_mission: String,
    /// Configured missions, in file order.
    pub missions: IndexMap<String, MissionPaths>,
    /// Replace existing entries instead of skipping them.
    pub overwrite_existing: bool,
    /// Default profiles for synthesized `type` entries.
    pub default_values: DefaultProfiles,
    /// Defaults for synthesized vehicle events.
    pub vehicle_event: EventDefaults,
}

impl Default for MergeConfig {
    fn default() -> Self {
        let mut missions = IndexMap::new();
        for name in ["dayzOffline.chernarusplus", "dayzOffline.enoch"] {
            missions.insert(name.to_string(), MissionPaths::for_mission(name));
        }
        MergeConfig {
            active_mission: "dayzOffline.chernarusplus".to_string(),
            missions,
            overwrite_existing: false,
            default_values: DefaultProfiles::default(),
            vehicle_event: EventDefaults::default(),
        }
    }
}

impl MergeConfig {
    /// Load configuration from a JSON file; a missing file yields the
    /// defaults.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration as pretty-printed JSON.
    ///
    /// # Errors
    /// Returns an error if serialization or writing fails.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Table paths of the active mission, if it is configured.
    #[must_use]
    pub fn mission_paths(&self) -> Option<&MissionPaths> {
        self.missions.get(&self.active_mission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config_resolves_active_mission() {
        let config = MergeConfig::default();
        let paths = config.mission_paths().unwrap();
        assert!(paths.types.ends_with("db/types.xml"));
        assert!(paths.events.ends_with("cfgeventspawns.xml"));
    }

    #[test]
    fn test_config_round_trip() {
        let config = MergeConfig {
            overwrite_existing: true,
            active_mission: "dayzOffline.enoch".to_string(),
            ..MergeConfig::default()
        };

        let json = serde_json::to_string(&config).unwrap();
        let back: MergeConfig = serde_json::from_str(&json).unwrap();

        assert!(back.overwrite_existing);
        assert_eq!(back.active_mission, "dayzOffline.enoch");
        // IndexMap keeps mission order
        let names: Vec<_> = back.missions.keys().collect();
        assert_eq!(names, vec!["dayzOffline.chernarusplus", "dayzOffline.enoch"]);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: MergeConfig =
            serde_json::from_str(r#"{"overwrite_existing": true}"#).unwrap();
        assert!(config.overwrite_existing);
        assert_eq!(config.default_values.weapons.nominal, 10);
    }
}
