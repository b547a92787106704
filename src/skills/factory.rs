//! Creates skill instances from their setup media
//!
//! Setups are parsed once per session and shared between instances.

use crate::core::error::{Result, WarbandError};
use crate::core::media::Media;
use crate::skills::{Skill, SkillServices, SkillSetup};
use ahash::AHashMap;
use std::rc::Rc;

pub struct FactorySkill {
    services: SkillServices,
    setups: AHashMap<Media, Rc<SkillSetup>>,
    /// Only serve registered setups, never touch the filesystem
    offline: bool,
}

impl FactorySkill {
    pub fn new(services: SkillServices) -> Self {
        Self {
            services,
            setups: AHashMap::new(),
            offline: false,
        }
    }

    /// Factory that only knows setups registered in code
    pub fn offline(services: SkillServices) -> Self {
        Self {
            offline: true,
            ..Self::new(services)
        }
    }

    pub fn services(&self) -> &SkillServices {
        &self.services
    }

    /// Make a setup available under `media` without reading a file
    pub fn register(&mut self, media: Media, setup: SkillSetup) {
        tracing::debug!("Registered skill {} as {}", setup.name, media);
        self.setups.insert(media, Rc::new(setup));
    }

    /// Setup for `media`, loading and caching it on first use
    pub fn setup(&mut self, media: &Media) -> Result<Rc<SkillSetup>> {
        if let Some(setup) = self.setups.get(media) {
            return Ok(Rc::clone(setup));
        }
        if self.offline {
            return Err(WarbandError::UnknownSkill(media.to_string()));
        }
        if !media.path().exists() {
            return Err(WarbandError::UnknownSkill(media.to_string()));
        }

        let setup = Rc::new(SkillSetup::load(media.path())?);
        tracing::debug!("Loaded skill {} from {}", setup.name, media);
        self.setups.insert(media.clone(), Rc::clone(&setup));
        Ok(setup)
    }

    /// New, unprepared skill instance for `media`
    pub fn create(&mut self, media: &Media) -> Result<Skill> {
        let setup = self.setup(media)?;
        Ok(Skill::new(setup, self.services.clone()))
    }

    /// Number of setups held in the cache
    pub fn cached(&self) -> usize {
        self.setups.len()
    }
}
