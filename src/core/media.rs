//! Resolution of setup files by convention
//!
//! Every skill, entity and launcher type has one setup file located at
//! `<root>/<race>/<TypeName>.<ext>`.

use crate::core::config::GameConfig;
use crate::core::types::Race;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Handle to a setup file
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Media(PathBuf);

impl Media {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    /// Build `<root>/<race>/<type_name>.<extension>`
    pub fn for_type(root: &Path, race: Race, type_name: &str, extension: &str) -> Self {
        Self(
            root.join(race.dir_name())
                .join(format!("{}.{}", type_name, extension)),
        )
    }

    pub fn path(&self) -> &Path {
        &self.0
    }

    /// Type name the media was resolved from (file stem)
    pub fn type_name(&self) -> &str {
        self.0
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
    }
}

impl fmt::Display for Media {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// Media of a skill type under the config's skill directory
pub fn skill_media(config: &GameConfig, race: Race, type_name: &str) -> Media {
    Media::for_type(&config.skills_dir, race, type_name, &config.data_extension)
}

/// Media of an entity type under the config's entity directory
pub fn entity_media(config: &GameConfig, race: Race, type_name: &str) -> Media {
    Media::for_type(&config.entities_dir, race, type_name, &config.data_extension)
}
