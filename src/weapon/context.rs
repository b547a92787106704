//! Weapon services of a session

use crate::core::config::GameConfig;
use crate::weapon::FactoryLauncher;

/// Weapon-related services handed to entities at setup time
pub struct ContextWeapon {
    pub factory_launcher: FactoryLauncher,
}

impl ContextWeapon {
    pub fn new(factory_launcher: FactoryLauncher) -> Self {
        Self { factory_launcher }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(FactoryLauncher::new(
            config.launchers_dir.clone(),
            config.data_extension.clone(),
        ))
    }
}
