//! Session services a skill needs to draw itself

use crate::core::config::{PanelConfig, PanelSprites};
use crate::renderer::{Sprite, SpriteTiled};
use crate::ui::message::TimedMessage;
use std::cell::RefCell;
use std::rc::Rc;

/// Handles shared by every skill of a session.
///
/// Cloning only clones the handles.
#[derive(Debug, Clone)]
pub struct SkillServices {
    pub message: Rc<RefCell<TimedMessage>>,
    /// Slot background, frame 0 idle and frame 1 selected
    pub background: Rc<SpriteTiled>,
    pub gold: Rc<Sprite>,
    pub wood: Rc<Sprite>,
    pub panel: Rc<PanelConfig>,
}

impl SkillServices {
    pub fn new(
        message: Rc<RefCell<TimedMessage>>,
        background: SpriteTiled,
        gold: Sprite,
        wood: Sprite,
        panel: PanelConfig,
    ) -> Self {
        Self {
            message,
            background: Rc::new(background),
            gold: Rc::new(gold),
            wood: Rc::new(wood),
            panel: Rc::new(panel),
        }
    }

    /// Whether a timed message currently covers the tooltip line
    pub fn has_message(&self) -> bool {
        self.message.borrow().has_message()
    }
}

impl Default for SkillServices {
    fn default() -> Self {
        let sprites = PanelSprites::default();
        Self::new(
            Rc::new(RefCell::new(TimedMessage::new())),
            sprites.background,
            sprites.gold,
            sprites.wood,
            PanelConfig::default(),
        )
    }
}
