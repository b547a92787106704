//! Units and the skill groups they register

use crate::core::error::{Result, WarbandError};
use crate::core::media::Media;
use crate::core::types::{EntityId, Race};
use crate::skills::{FactorySkill, Skill};
use glam::Vec2;
use std::collections::BTreeMap;

/// Skills shown together on the panel, keyed by their priority in the group
#[derive(Debug, Clone, Default)]
pub struct SkillGroup {
    skills: BTreeMap<u32, Skill>,
}

impl SkillGroup {
    pub fn get(&self, priority: u32) -> Option<&Skill> {
        self.skills.get(&priority)
    }

    pub fn contains(&self, priority: u32) -> bool {
        self.skills.contains_key(&priority)
    }

    /// Skills in priority order
    pub fn iter(&self) -> impl Iterator<Item = &Skill> {
        self.skills.values()
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct Unit {
    pub id: EntityId,
    pub race: Race,
    /// Type name, e.g. "Peon"
    pub kind: String,
    pub media: Media,
    pub position: Vec2,
    groups: Vec<SkillGroup>,
}

impl Unit {
    pub fn new(race: Race, kind: impl Into<String>, media: Media) -> Self {
        Self {
            id: EntityId::new(),
            race,
            kind: kind.into(),
            media,
            position: Vec2::ZERO,
            groups: Vec::new(),
        }
    }

    /// Resolve `media` through the factory and register it in `group` at `priority`
    pub fn add_skill(
        &mut self,
        factory: &mut FactorySkill,
        group: usize,
        media: &Media,
        priority: u32,
    ) -> Result<()> {
        self.check_free(group, priority)?;
        let skill = factory.create(media)?;
        self.insert_skill(group, skill, priority)
    }

    /// Register an already created skill in `group` at `priority`
    ///
    /// Sets the skill's priority and owner and computes its slot.
    pub fn insert_skill(&mut self, group: usize, mut skill: Skill, priority: u32) -> Result<()> {
        self.check_free(group, priority)?;
        if skill.slot_for(priority).is_none() {
            return Err(WarbandError::SlotOutOfRange {
                skill: skill.name().to_string(),
                priority,
            });
        }
        skill.set_priority(priority);
        skill.set_owner(self.id);
        skill.prepare();
        tracing::debug!(
            "{} registered skill {} in group {} at priority {}",
            self.kind,
            skill.name(),
            group,
            priority
        );

        if self.groups.len() <= group {
            self.groups.resize_with(group + 1, SkillGroup::default);
        }
        self.groups[group].skills.insert(priority, skill);
        Ok(())
    }

    fn check_free(&self, group: usize, priority: u32) -> Result<()> {
        if self.group(group).is_some_and(|g| g.contains(priority)) {
            return Err(WarbandError::DuplicatePriority {
                unit: self.kind.clone(),
                group,
                priority,
            });
        }
        Ok(())
    }

    pub fn group(&self, group: usize) -> Option<&SkillGroup> {
        self.groups.get(group)
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Skills of a group in priority order; empty for unknown groups
    pub fn skills(&self, group: usize) -> impl Iterator<Item = &Skill> {
        self.groups.get(group).into_iter().flat_map(|g| g.skills.values())
    }

    pub fn skills_mut(&mut self, group: usize) -> impl Iterator<Item = &mut Skill> {
        self.groups
            .get_mut(group)
            .into_iter()
            .flat_map(|g| g.skills.values_mut())
    }

    pub fn skill(&self, group: usize, priority: u32) -> Option<&Skill> {
        self.group(group).and_then(|g| g.get(priority))
    }

    pub fn skill_mut(&mut self, group: usize, priority: u32) -> Option<&mut Skill> {
        self.groups
            .get_mut(group)
            .and_then(|g| g.skills.get_mut(&priority))
    }

    pub fn skill_count(&self) -> usize {
        self.groups.iter().map(SkillGroup::len).sum()
    }

    /// Deselect every skill of every group
    pub fn clear_selection(&mut self) {
        for group in &mut self.groups {
            for skill in group.skills.values_mut() {
                skill.set_selected(false);
            }
        }
    }

    /// Recompute every skill's slot, e.g. after a panel resize
    pub fn prepare_skills(&mut self) {
        for group in &mut self.groups {
            for skill in group.skills.values_mut() {
                skill.prepare();
            }
        }
    }
}
