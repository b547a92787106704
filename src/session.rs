//! Game session: the services, units and panel living for one game
//!
//! Everything here is created once when the session starts and torn down
//! with it. Skills get their service handles explicitly at creation.

use crate::core::config::GameConfig;
use crate::core::error::{Result, WarbandError};
use crate::core::types::{EntityId, Race};
use crate::entity::{spawn_worker, UnitTable};
use crate::renderer::{Camera, Surface};
use crate::skills::{FactorySkill, SkillServices};
use crate::ui::{ControlPanel, Cursor, PanelOrder, TimedMessage};
use crate::weapon::ContextWeapon;
use std::cell::RefCell;
use std::rc::Rc;

/// How long messages posted through the session stay visible
pub const MESSAGE_DURATION_MS: f64 = 2000.0;

pub struct GameSession {
    config: GameConfig,
    message: Rc<RefCell<TimedMessage>>,
    pub skills: FactorySkill,
    pub weapons: ContextWeapon,
    pub units: UnitTable,
    pub panel: ControlPanel,
    pub camera: Camera,
    /// Unit whose skills the panel shows
    selected: Option<EntityId>,
}

impl GameSession {
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        let message = Rc::new(RefCell::new(TimedMessage::new()));
        let services = SkillServices::new(
            Rc::clone(&message),
            config.sprites.background.clone(),
            config.sprites.gold.clone(),
            config.sprites.wood.clone(),
            config.panel.clone(),
        );
        let camera = Camera::new(240.0, 200.0).with_screen_offset(config.panel.width as f32, 0.0);

        tracing::info!("Session started with skills from {}", config.skills_dir.display());
        Ok(Self {
            skills: FactorySkill::new(services),
            weapons: ContextWeapon::from_config(&config),
            units: UnitTable::new(),
            panel: ControlPanel::new(),
            camera,
            selected: None,
            message,
            config,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Spawn a worker of `race` and return its id
    pub fn spawn_worker(&mut self, race: Race) -> Result<EntityId> {
        let unit = spawn_worker(&self.config, race, &mut self.skills)?;
        Ok(self.units.insert(unit))
    }

    /// Show `unit`'s skills on the panel
    pub fn select(&mut self, unit: EntityId) -> Result<()> {
        if self.units.get(unit).is_none() {
            return Err(WarbandError::InvalidConfig(format!(
                "cannot select unknown unit {:?}",
                unit
            )));
        }
        self.selected = Some(unit);
        self.panel.reset();
        Ok(())
    }

    pub fn selected(&self) -> Option<EntityId> {
        self.selected
    }

    /// Show a transient message, hiding tooltips while it lasts
    pub fn post_message(&self, text: impl Into<String>) {
        let panel = &self.config.panel;
        self.message.borrow_mut().add_message(
            text,
            panel.tooltip_x,
            panel.tooltip_y,
            MESSAGE_DURATION_MS,
        );
    }

    pub fn has_message(&self) -> bool {
        self.message.borrow().has_message()
    }

    /// Advance one frame
    pub fn update(&mut self, elapsed_ms: f64, cursor: &Cursor) {
        self.message.borrow_mut().update(elapsed_ms);
        let Some(unit) = self.selected.and_then(|id| self.units.get_mut(id)) else {
            return;
        };
        self.panel.update(unit, cursor, &self.camera, elapsed_ms);
    }

    /// Draw the panel and messages for this frame
    pub fn render(&self, g: &mut dyn Surface, cursor: &Cursor) {
        if let Some(unit) = self.selected.and_then(|id| self.units.get(id)) {
            self.panel.render(unit, g, cursor, &self.camera);
        }
        self.message.borrow().render(g);
    }

    pub fn drain_orders(&mut self) -> Vec<PanelOrder> {
        self.panel.drain_orders()
    }
}
