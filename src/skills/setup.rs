//! Skill setup data loaded from TOML
//!
//! A setup file looks like:
//!
//! ```toml
//! name = "Build Farm"
//! description = "Build Farm"
//! kind = "produce_building"
//! target = "FarmOrc"
//! level = 1
//!
//! [icon]
//! name = "icons/orc/build_farm"
//! tile_width = 27
//! tile_height = 19
//!
//! [cost]
//! gold = 500
//! wood = 300
//! ```

use crate::core::config::config;
use crate::core::error::{Result, WarbandError};
use crate::core::types::Cost;
use crate::renderer::SpriteTiled;
use crate::skills::SkillKind;
use crate::ui::slot::checked_slot_position;
use serde::Deserialize;
use std::path::Path;

/// Raw contents of a setup file, before validation
#[derive(Debug, Clone, Deserialize)]
pub struct SkillData {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub kind: SkillKind,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default = "default_level")]
    pub level: u32,
    #[serde(default)]
    pub priority: i64,
    pub icon: SpriteTiled,
    #[serde(default)]
    pub cost: Cost,
}

fn default_level() -> u32 {
    1
}

/// Validated skill definition shared by every instance of the skill
#[derive(Debug, Clone, PartialEq)]
pub struct SkillSetup {
    pub name: String,
    pub description: String,
    pub kind: SkillKind,
    pub target: Option<String>,
    pub level: u32,
    /// Slot used when the skill is registered without an explicit priority
    pub priority: u32,
    pub icon: SpriteTiled,
    pub cost: Cost,
}

impl SkillSetup {
    /// Check a raw setup and turn it into a definition
    pub fn from_data(data: SkillData) -> Result<Self> {
        if data.priority < 0 {
            return Err(WarbandError::NegativePriority(data.priority));
        }
        let priority = u32::try_from(data.priority).map_err(|_| {
            WarbandError::InvalidConfig(format!(
                "{}: priority {} out of range",
                data.name, data.priority
            ))
        })?;
        if data.level == 0 {
            return Err(WarbandError::InvalidLevel {
                skill: data.name,
                level: data.level,
            });
        }
        if data.icon.tile_width == 0 || data.icon.tile_height == 0 {
            return Err(WarbandError::InvalidIconSize {
                skill: data.name,
                width: data.icon.tile_width,
                height: data.icon.tile_height,
            });
        }
        let (width, height) = (data.icon.tile_width, data.icon.tile_height);
        if checked_slot_position(&config().panel, priority, width, height).is_none() {
            return Err(WarbandError::SlotOutOfRange {
                skill: data.name,
                priority,
            });
        }
        let has_target = data.target.as_deref().is_some_and(|t| !t.is_empty());
        if data.kind.needs_target() && !has_target {
            return Err(WarbandError::MissingTarget(data.name));
        }

        Ok(Self {
            description: data.description.unwrap_or_else(|| data.name.clone()),
            name: data.name,
            kind: data.kind,
            target: data.target,
            level: data.level,
            priority,
            icon: data.icon,
            cost: data.cost,
        })
    }

    /// Parse and validate a setup from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        let data: SkillData = toml::from_str(content)?;
        Self::from_data(data)
    }

    /// Load a setup file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Setup built in code, for skills that have no data file
    pub fn new(name: impl Into<String>, kind: SkillKind, icon: SpriteTiled) -> Self {
        let name = name.into();
        Self {
            description: name.clone(),
            name,
            kind,
            target: None,
            level: 1,
            priority: 0,
            icon,
            cost: Cost::default(),
        }
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn with_cost(mut self, gold: u32, wood: u32) -> Self {
        self.cost = Cost::new(gold, wood);
        self
    }

    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FARM: &str = r#"
        name = "Build Farm"
        kind = "produce_building"
        target = "FarmOrc"

        [icon]
        name = "icons/orc/build_farm"
        tile_width = 27
        tile_height = 19

        [cost]
        gold = 500
        wood = 300
    "#;

    #[test]
    fn test_parse_produce_setup() {
        let setup = SkillSetup::parse(FARM).unwrap();
        assert_eq!(setup.name, "Build Farm");
        assert_eq!(setup.description, "Build Farm");
        assert_eq!(setup.kind, SkillKind::ProduceBuilding);
        assert_eq!(setup.target.as_deref(), Some("FarmOrc"));
        assert_eq!(setup.level, 1);
        assert_eq!(setup.priority, 0);
        assert_eq!(setup.cost, Cost::new(500, 300));
        assert_eq!(setup.icon.frames, 1);
    }

    #[test]
    fn test_negative_priority_rejected() {
        let content = format!("priority = -1\n{}", FARM);
        assert!(matches!(
            SkillSetup::parse(&content),
            Err(WarbandError::NegativePriority(-1))
        ));
    }

    #[test]
    fn test_priority_beyond_screen_rejected() {
        let content = format!("priority = 200000000\n{}", FARM);
        assert!(matches!(
            SkillSetup::parse(&content),
            Err(WarbandError::SlotOutOfRange {
                priority: 200_000_000,
                ..
            })
        ));

        let content = format!("priority = 5\n{}", FARM);
        assert_eq!(SkillSetup::parse(&content).unwrap().priority, 5);
    }

    #[test]
    fn test_level_zero_rejected() {
        let content = format!("level = 0\n{}", FARM);
        assert!(matches!(
            SkillSetup::parse(&content),
            Err(WarbandError::InvalidLevel { level: 0, .. })
        ));
    }

    #[test]
    fn test_produce_without_target_rejected() {
        let content = FARM.replace("target = \"FarmOrc\"", "");
        assert!(matches!(
            SkillSetup::parse(&content),
            Err(WarbandError::MissingTarget(_))
        ));
    }

    #[test]
    fn test_zero_icon_rejected() {
        let content = FARM.replace("tile_width = 27", "tile_width = 0");
        assert!(matches!(
            SkillSetup::parse(&content),
            Err(WarbandError::InvalidIconSize { width: 0, .. })
        ));
    }

    #[test]
    fn test_unknown_kind_is_toml_error() {
        let content = FARM.replace("produce_building", "teleport");
        assert!(matches!(
            SkillSetup::parse(&content),
            Err(WarbandError::TomlError(_))
        ));
    }
}
