//! Panel and data layout configuration with documented constants
//!
//! All layout numbers of the control panel are collected here so a panel
//! resize only needs a new `PanelConfig` followed by a `prepare()` pass.

use crate::core::error::{Result, WarbandError};
use crate::renderer::{Sprite, SpriteTiled};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Layout of the skill area and tooltip line on the control panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Width of the panel column; the map view starts right of it
    pub width: i32,

    // === SKILL GRID ===
    /// Panel-relative x of the first skill column
    pub origin_x: i32,

    /// Panel-relative y of the first skill row
    pub origin_y: i32,

    /// Space between two icon cells, added to the icon size
    pub gutter: i32,

    /// Number of skill columns
    ///
    /// Slots fill left to right then top to bottom, so priority `p` lands in
    /// column `p % columns`, row `p / columns`.
    pub columns: u32,

    /// How far the background frame extends around an icon
    pub background_inset: i32,

    // === TOOLTIP ===
    /// Where the hovered skill's description is written
    pub tooltip_x: i32,
    pub tooltip_y: i32,

    /// Gap between the end of the description and the gold icon
    pub cost_gap: i32,

    /// Horizontal distance from the gold icon to the wood icon
    pub wood_offset: i32,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            width: 72,
            origin_x: 4,
            origin_y: 114,
            gutter: 5,
            columns: 2,
            background_inset: 2,
            tooltip_x: 72,
            tooltip_y: 191,
            cost_gap: 4,
            wood_offset: 40,
        }
    }
}

impl PanelConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.columns == 0 {
            return Err(WarbandError::InvalidConfig(
                "panel needs at least one skill column".into(),
            ));
        }
        if self.gutter < 0 || self.background_inset < 0 {
            return Err(WarbandError::InvalidConfig(format!(
                "gutter ({}) and background_inset ({}) must not be negative",
                self.gutter, self.background_inset
            )));
        }
        Ok(())
    }
}

/// Images shared by every skill slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelSprites {
    /// Slot background; frame 0 idle, frame 1 selected
    pub background: SpriteTiled,
    pub gold: Sprite,
    pub wood: Sprite,
}

impl Default for PanelSprites {
    fn default() -> Self {
        Self {
            background: SpriteTiled::new("skill_background", 31, 23, 2),
            gold: Sprite::new("gold", 10, 10),
            wood: Sprite::new("wood", 10, 10),
        }
    }
}

/// Where game data lives and how the panel is laid out
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Root directory of skill setup files (`<root>/<race>/<Type>.<ext>`)
    pub skills_dir: PathBuf,

    /// Root directory of entity setup files
    pub entities_dir: PathBuf,

    /// Root directory of launcher setup files
    pub launchers_dir: PathBuf,

    /// Extension of setup files
    pub data_extension: String,

    pub panel: PanelConfig,

    pub sprites: PanelSprites,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            skills_dir: PathBuf::from("data/skills"),
            entities_dir: PathBuf::from("data/entities"),
            launchers_dir: PathBuf::from("data/launchers"),
            data_extension: "toml".into(),
            panel: PanelConfig::default(),
            sprites: PanelSprites::default(),
        }
    }
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a config from a TOML file; missing keys keep their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: GameConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Rebase every data directory onto `root`
    pub fn with_data_root(mut self, root: &Path) -> Self {
        self.skills_dir = root.join("skills");
        self.entities_dir = root.join("entities");
        self.launchers_dir = root.join("launchers");
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.data_extension.is_empty() || self.data_extension.starts_with('.') {
            return Err(WarbandError::InvalidConfig(format!(
                "data_extension must be a bare extension, got {:?}",
                self.data_extension
            )));
        }
        if self.sprites.background.frames < 2 {
            return Err(WarbandError::InvalidConfig(
                "slot background needs an idle and a selected frame".into(),
            ));
        }
        self.panel.validate()
    }
}

// === GLOBAL CONFIG ACCESS ===

use std::sync::OnceLock;

static CONFIG: OnceLock<GameConfig> = OnceLock::new();

/// Get the global game config (initializes with defaults if not set)
pub fn config() -> &'static GameConfig {
    CONFIG.get_or_init(GameConfig::default)
}

/// Set the global game config (can only be called once)
///
/// Returns Err if config was already set.
pub fn set_config(config: GameConfig) -> std::result::Result<(), GameConfig> {
    CONFIG.set(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_panel_layout() {
        let panel = PanelConfig::default();
        assert_eq!((panel.origin_x, panel.origin_y), (4, 114));
        assert_eq!(panel.gutter, 5);
        assert_eq!((panel.tooltip_x, panel.tooltip_y), (72, 191));
        assert!(panel.validate().is_ok());
    }

    #[test]
    fn test_zero_columns_rejected() {
        let panel = PanelConfig {
            columns: 0,
            ..PanelConfig::default()
        };
        assert!(matches!(panel.validate(), Err(WarbandError::InvalidConfig(_))));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: GameConfig = toml::from_str(
            r#"
            skills_dir = "assets/skills"
            [panel]
            origin_y = 120
            "#,
        )
        .unwrap();
        assert_eq!(config.skills_dir, PathBuf::from("assets/skills"));
        assert_eq!(config.panel.origin_y, 120);
        assert_eq!(config.panel.origin_x, 4);
        assert_eq!(config.data_extension, "toml");
    }

    #[test]
    fn test_dotted_extension_rejected() {
        let config = GameConfig {
            data_extension: ".toml".into(),
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_with_data_root() {
        let config = GameConfig::new().with_data_root(Path::new("/game"));
        assert_eq!(config.skills_dir, PathBuf::from("/game/skills"));
        assert_eq!(config.launchers_dir, PathBuf::from("/game/launchers"));
    }
}
