//! Projectile launchers and the factory that builds them

use crate::core::error::{Result, WarbandError};
use crate::core::media::Media;
use crate::core::types::Tick;
use ahash::AHashMap;
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Definition of a launcher, loaded from `<launchers_dir>/<name>.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LauncherSetup {
    pub name: String,
    /// Projectile type fired
    pub projectile: String,
    /// Minimum ticks between two launches
    pub rate: Tick,
    /// Maximum distance to the target in world units
    pub range: f32,
    pub damage_min: u32,
    pub damage_max: u32,
}

impl LauncherSetup {
    pub fn validate(&self) -> Result<()> {
        if self.damage_min > self.damage_max {
            return Err(WarbandError::InvalidConfig(format!(
                "{}: damage_min ({}) above damage_max ({})",
                self.name, self.damage_min, self.damage_max
            )));
        }
        if self.range <= 0.0 {
            return Err(WarbandError::InvalidConfig(format!(
                "{}: range must be positive",
                self.name
            )));
        }
        Ok(())
    }
}

/// A launched projectile, handed to the simulation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Projectile {
    pub kind: String,
    pub from: [f32; 2],
    pub to: [f32; 2],
    pub damage_min: u32,
    pub damage_max: u32,
    pub launched_at: Tick,
}

#[derive(Debug, Clone)]
pub struct Launcher {
    setup: Rc<LauncherSetup>,
    last_launch: Option<Tick>,
}

impl Launcher {
    pub fn new(setup: Rc<LauncherSetup>) -> Self {
        Self {
            setup,
            last_launch: None,
        }
    }

    pub fn setup(&self) -> &LauncherSetup {
        &self.setup
    }

    /// Whether the launcher has reloaded at `now`
    pub fn can_launch(&self, now: Tick) -> bool {
        match self.last_launch {
            None => true,
            Some(last) => now.saturating_sub(last) >= self.setup.rate,
        }
    }

    pub fn in_range(&self, from: Vec2, to: Vec2) -> bool {
        from.distance(to) <= self.setup.range
    }

    /// Fire at `to` if reloaded and in range
    pub fn launch(&mut self, now: Tick, from: Vec2, to: Vec2) -> Option<Projectile> {
        if !self.can_launch(now) || !self.in_range(from, to) {
            return None;
        }
        self.last_launch = Some(now);
        Some(Projectile {
            kind: self.setup.projectile.clone(),
            from: from.to_array(),
            to: to.to_array(),
            damage_min: self.setup.damage_min,
            damage_max: self.setup.damage_max,
            launched_at: now,
        })
    }
}

/// Launcher setups of a session, by name
pub struct FactoryLauncher {
    dir: PathBuf,
    extension: String,
    setups: AHashMap<String, Rc<LauncherSetup>>,
}

impl FactoryLauncher {
    pub fn new(dir: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            extension: extension.into(),
            setups: AHashMap::new(),
        }
    }

    pub fn register(&mut self, setup: LauncherSetup) -> Result<()> {
        setup.validate()?;
        tracing::debug!("Registered launcher {}", setup.name);
        self.setups.insert(setup.name.clone(), Rc::new(setup));
        Ok(())
    }

    pub fn media(&self, name: &str) -> Media {
        Media::new(self.dir.join(format!("{}.{}", name, self.extension)))
    }

    /// Load a launcher setup file and register it
    pub fn load(&mut self, path: &Path) -> Result<()> {
        let content = std::fs::read_to_string(path)?;
        let setup: LauncherSetup = toml::from_str(&content)?;
        self.register(setup)
    }

    /// New launcher of type `name`, loading its setup on first use
    pub fn create(&mut self, name: &str) -> Result<Launcher> {
        if !self.setups.contains_key(name) {
            let media = self.media(name);
            if !media.path().exists() {
                return Err(WarbandError::UnknownLauncher(name.to_string()));
            }
            self.load(media.path())?;
        }
        self.setups
            .get(name)
            .map(|setup| Launcher::new(Rc::clone(setup)))
            .ok_or_else(|| WarbandError::UnknownLauncher(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.setups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.setups.is_empty()
    }
}
