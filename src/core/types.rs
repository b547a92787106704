//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for entities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub Uuid);

impl EntityId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

/// Game tick counter (simulation time unit)
pub type Tick = u64;

/// Playable races
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Race {
    Human,
    Orc,
}

impl Race {
    /// Lowercase name, used as the media directory for this race
    pub fn dir_name(&self) -> &'static str {
        match self {
            Race::Human => "human",
            Race::Orc => "orc",
        }
    }

    /// Parse a race name, ignoring case
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "human" => Some(Race::Human),
            "orc" => Some(Race::Orc),
            _ => None,
        }
    }
}

/// Resources paid to produce buildings and units
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cost {
    #[serde(default)]
    pub gold: u32,
    #[serde(default)]
    pub wood: u32,
}

impl Cost {
    pub fn new(gold: u32, wood: u32) -> Self {
        Self { gold, wood }
    }

    pub fn is_free(&self) -> bool {
        self.gold == 0 && self.wood == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_id_unique() {
        assert_ne!(EntityId::new(), EntityId::new());
    }

    #[test]
    fn test_race_dir_name_is_lowercase() {
        assert_eq!(Race::Orc.dir_name(), "orc");
        assert_eq!(Race::Human.dir_name(), "human");
    }

    #[test]
    fn test_race_parse_ignores_case() {
        assert_eq!(Race::parse("ORC"), Some(Race::Orc));
        assert_eq!(Race::parse("Human"), Some(Race::Human));
        assert_eq!(Race::parse("elf"), None);
    }

    #[test]
    fn test_cost_free() {
        assert!(Cost::default().is_free());
        assert!(!Cost::new(500, 0).is_free());
    }
}
