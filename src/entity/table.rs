//! Units of a session, addressed by id
//!
//! Skills refer to their owner through an [`EntityId`] resolved here.

use crate::core::types::EntityId;
use crate::entity::Unit;
use crate::skills::Skill;
use ahash::AHashMap;

#[derive(Debug, Default)]
pub struct UnitTable {
    units: AHashMap<EntityId, Unit>,
}

impl UnitTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, unit: Unit) -> EntityId {
        let id = unit.id;
        self.units.insert(id, unit);
        id
    }

    pub fn get(&self, id: EntityId) -> Option<&Unit> {
        self.units.get(&id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Unit> {
        self.units.get_mut(&id)
    }

    pub fn remove(&mut self, id: EntityId) -> Option<Unit> {
        self.units.remove(&id)
    }

    /// Unit owning `skill`, if it is still alive
    pub fn owner_of(&self, skill: &Skill) -> Option<&Unit> {
        skill.owner().and_then(|id| self.get(id))
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}
