//! Worker units: peasants for humans, peons for orcs
//!
//! Workers show movement and the build menu in their base group, and the
//! buildings they can raise in the build group.

use crate::core::config::GameConfig;
use crate::core::error::Result;
use crate::core::media::{entity_media, skill_media, Media};
use crate::core::types::Race;
use crate::entity::Unit;
use crate::skills::{FactorySkill, BASE_GROUP, BUILD_GROUP};

/// Skill registrations of a worker: (group, skill type without race suffix, priority)
pub const WORKER_SKILLS: [(usize, &str, u32); 6] = [
    (BASE_GROUP, "Move", 0),
    (BASE_GROUP, "Stop", 1),
    (BASE_GROUP, "BuildingStandard", 2),
    (BUILD_GROUP, "BuildFarm", 0),
    (BUILD_GROUP, "BuildBarracks", 1),
    (BUILD_GROUP, "Cancel", 2),
];

/// Type name of a race's worker
pub fn worker_type(race: Race) -> &'static str {
    match race {
        Race::Human => "Peasant",
        Race::Orc => "Peon",
    }
}

/// Race-specific type name of a skill, e.g. "Move" -> "MoveOrc"
pub fn race_skill_type(race: Race, skill: &str) -> String {
    let suffix = match race {
        Race::Human => "Human",
        Race::Orc => "Orc",
    };
    format!("{}{}", skill, suffix)
}

/// Media of one of a race's skills
pub fn race_skill_media(config: &GameConfig, race: Race, skill: &str) -> Media {
    skill_media(config, race, &race_skill_type(race, skill))
}

/// Create a worker of `race` with all its skills registered
pub fn spawn_worker(config: &GameConfig, race: Race, factory: &mut FactorySkill) -> Result<Unit> {
    let kind = worker_type(race);
    let mut unit = Unit::new(race, kind, entity_media(config, race, kind));

    for (group, skill, priority) in WORKER_SKILLS {
        let media = race_skill_media(config, race, skill);
        unit.add_skill(factory, group, &media, priority)?;
    }

    tracing::debug!("Spawned {} with {} skills", kind, unit.skill_count());
    Ok(unit)
}
