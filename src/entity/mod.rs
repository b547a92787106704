//! Units and their skill registration

pub mod table;
pub mod unit;
pub mod worker;

pub use table::UnitTable;
pub use unit::{SkillGroup, Unit};
pub use worker::{spawn_worker, worker_type, WORKER_SKILLS};
