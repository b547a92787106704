//! Skill kinds and what clicking each one does

use crate::skills::Skill;
use crate::ui::panel::{ControlPanel, Order};
use serde::{Deserialize, Serialize};

/// Group a unit shows by default
pub const BASE_GROUP: usize = 0;

/// Group opened by the build menu skill
pub const BUILD_GROUP: usize = 1;

/// What a skill does when clicked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillKind {
    /// Move to a point picked on the map
    Move,
    /// Stop the current order
    Stop,
    /// Attack a point picked on the map
    Attack,
    /// Open the list of buildings the unit can raise
    BuildMenu,
    /// Leave a sub-menu and forget any armed order
    Cancel,
    /// Place a building on the map
    ProduceBuilding,
    /// Train a unit
    ProduceEntity,
    /// Shown on the panel but does nothing when clicked
    Passive,
}

impl SkillKind {
    /// Production skills show their cost in the tooltip
    pub fn is_produce(&self) -> bool {
        matches!(self, SkillKind::ProduceBuilding | SkillKind::ProduceEntity)
    }

    /// Whether the setup must name what is produced
    pub fn needs_target(&self) -> bool {
        self.is_produce()
    }

    /// Whether clicking waits for a map position before issuing an order
    pub fn is_targeted(&self) -> bool {
        matches!(
            self,
            SkillKind::Move | SkillKind::Attack | SkillKind::ProduceBuilding
        )
    }

    pub(crate) fn on_clicked(&self, skill: &Skill, panel: &mut ControlPanel) {
        match self {
            SkillKind::BuildMenu => {
                panel.disarm();
                panel.open_group(BUILD_GROUP);
            }
            SkillKind::Cancel => {
                panel.disarm();
                panel.open_group(BASE_GROUP);
            }
            SkillKind::Passive => {}
            SkillKind::Move
            | SkillKind::Stop
            | SkillKind::Attack
            | SkillKind::ProduceBuilding
            | SkillKind::ProduceEntity => {
                let Some(unit) = skill.owner() else {
                    tracing::warn!("Skill {} clicked without an owner", skill.name());
                    return;
                };
                let order = match self {
                    SkillKind::Move => Order::Move,
                    SkillKind::Attack => Order::Attack,
                    SkillKind::Stop => Order::Stop,
                    SkillKind::ProduceBuilding => Order::Build {
                        building: skill.target().unwrap_or_default().to_string(),
                    },
                    _ => Order::Train {
                        entity: skill.target().unwrap_or_default().to_string(),
                    },
                };
                if self.is_targeted() {
                    panel.arm(unit, order, skill.cost());
                } else {
                    panel.issue(unit, order, skill.cost());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_produce_kinds() {
        assert!(SkillKind::ProduceBuilding.is_produce());
        assert!(SkillKind::ProduceEntity.is_produce());
        assert!(!SkillKind::Move.is_produce());
        assert!(!SkillKind::Cancel.is_produce());
    }

    #[test]
    fn test_targeted_kinds() {
        assert!(SkillKind::Move.is_targeted());
        assert!(SkillKind::ProduceBuilding.is_targeted());
        assert!(!SkillKind::Stop.is_targeted());
        assert!(!SkillKind::ProduceEntity.is_targeted());
    }

    #[test]
    fn test_kind_names_in_data() {
        let kind: SkillKind = toml::Value::String("produce_building".into())
            .try_into()
            .unwrap();
        assert_eq!(kind, SkillKind::ProduceBuilding);
    }
}
