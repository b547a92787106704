//! Control panel skills
//!
//! A skill is an action a unit exposes on the control panel. Its definition
//! comes from a setup file; instances carry the per-unit state (priority,
//! level, selection, owner) and draw themselves into their panel slot.

pub mod factory;
pub mod kind;
pub mod services;
pub mod setup;
pub mod skill;

pub use factory::FactorySkill;
pub use kind::{SkillKind, BASE_GROUP, BUILD_GROUP};
pub use services::SkillServices;
pub use setup::{SkillData, SkillSetup};
pub use skill::Skill;
