//! Default-profile schema for synthesized entries
//!
//! This is a fixed configuration surface: exactly the profiles `weapons`,
//! `vehicles`, and `items`, each with exactly the fields below. Unknown
//! fields are rejected at deserialization.

use serde::{Deserialize, Serialize};

/// Defaults used to synthesize one `type` entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeDefaults {
    /// Target number of instances in the world.
    pub nominal: i32,
    /// Minimum number before restock kicks in.
    pub min: i32,
    /// Minimum stack quantity (-1 for n/a).
    pub quantmin: i32,
    /// Maximum stack quantity (-1 for n/a).
    pub quantmax: i32,
    /// Spawn priority cost.
    pub cost: i32,
    /// Seconds before an untouched instance despawns.
    pub lifetime: i32,
    /// Seconds between restock waves (0 disables).
    pub restock: i32,
    /// Which of the four counting flags are enabled
    /// (`count_in_cargo`, `count_in_hoarder`, `count_in_map`,
    /// `count_in_player`).
    pub flags: Vec<String>,
    /// Category label for the `category` element.
    pub category: String,
    /// Usage tags, one `usage` element each.
    pub usage: Vec<String>,
}

/// Defaults used to synthesize one vehicle `event` entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EventDefaults {
    /// Target number of active events.
    pub nominal: i32,
    /// Minimum simultaneous events.
    pub min: i32,
    /// Maximum simultaneous events.
    pub max: i32,
    /// Seconds before an event instance despawns.
    pub lifetime: i32,
    /// Seconds between respawn waves (0 disables).
    pub restock: i32,
    /// Minimum distance from players for a spawn.
    pub saferadius: i32,
    /// Minimum distance between event instances.
    pub distanceradius: i32,
    /// Radius within which leftovers are cleaned up.
    pub cleanupradius: i32,
}

/// The three named default profiles consumed by entry synthesis.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DefaultProfiles {
    /// Profile for weapon classnames.
    pub weapons: TypeDefaults,
    /// Profile for vehicle classnames.
    pub vehicles: TypeDefaults,
    /// Profile for everything else.
    pub items: TypeDefaults,
}

impl DefaultProfiles {
    /// Look up a profile by its configuration key, falling back to `items`
    /// for unknown kinds.
    #[must_use]
    pub fn get(&self, kind: &str) -> &TypeDefaults {
        match kind {
            "weapons" => &self.weapons,
            "vehicles" => &self.vehicles,
            _ => &self.items,
        }
    }
}

fn strings(names: &[&str]) -> Vec<String> {
    names.iter().map(ToString::to_string).collect()
}

impl Default for DefaultProfiles {
    fn default() -> Self {
        DefaultProfiles {
            weapons: TypeDefaults {
                nominal: 10,
                min: 5,
                quantmin: -1,
                quantmax: -1,
                cost: 100,
                lifetime: 3600,
                restock: 1800,
                flags: strings(&[
                    "count_in_cargo",
                    "count_in_hoarder",
                    "count_in_map",
                    "count_in_player",
                ]),
                category: "weapons".to_string(),
                usage: strings(&["Military", "Police"]),
            },
            vehicles: TypeDefaults {
                nominal: 3,
                min: 1,
                quantmin: -1,
                quantmax: -1,
                cost: 100,
                lifetime: 3_888_000,
                restock: 0,
                flags: strings(&["count_in_map", "count_in_player"]),
                category: "vehicles".to_string(),
                usage: strings(&["Industrial", "Farm"]),
            },
            items: TypeDefaults {
                nominal: 20,
                min: 10,
                quantmin: -1,
                quantmax: -1,
                cost: 100,
                lifetime: 3600,
                restock: 1800,
                flags: strings(&[
                    "count_in_cargo",
                    "count_in_hoarder",
                    "count_in_map",
                    "count_in_player",
                ]),
                category: "tools".to_string(),
                usage: strings(&["Town", "Village"]),
            },
        }
    }
}

impl Default for EventDefaults {
    fn default() -> Self {
        EventDefaults {
            nominal: 2,
            min: 1,
            max: 3,
            lifetime: 3_888_000,
            restock: 0,
            saferadius: 500,
            distanceradius: 500,
            cleanupradius: 200,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profiles_round_trip_json() {
        let profiles = DefaultProfiles::default();
        let json = serde_json::to_string_pretty(&profiles).unwrap();
        let back: DefaultProfiles = serde_json::from_str(&json).unwrap();
        assert_eq!(back.weapons.nominal, 10);
        assert_eq!(back.vehicles.lifetime, 3_888_000);
        assert_eq!(back.items.category, "tools");
    }

    #[test]
    fn test_unknown_profile_field_is_rejected() {
        let json = r#"{
            "nominal": 1, "min": 1, "quantmin": -1, "quantmax": -1,
            "cost": 100, "lifetime": 3600, "restock": 0,
            "flags": [], "category": "tools", "usage": [],
            "rarity": "legendary"
        }"#;
        assert!(serde_json::from_str::<TypeDefaults>(json).is_err());
    }
}
