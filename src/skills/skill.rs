//! A skill instance shown on a unit's control panel
//!
//! Geometry is computed by [`Skill::prepare`] from the priority and icon size
//! and stays fixed until `prepare` runs again. Hover is not stored: it is
//! derived from the cursor each time it is queried.

use crate::core::config::PanelConfig;
use crate::core::error::{Result, WarbandError};
use crate::core::types::{Cost, EntityId};
use crate::renderer::{Camera, Surface, Text};
use crate::skills::{SkillKind, SkillServices, SkillSetup};
use crate::ui::cursor::Cursor;
use crate::ui::panel::ControlPanel;
use crate::ui::slot::{checked_slot_position, compute_slot_position_in, SlotRect};
use std::rc::Rc;

#[derive(Debug, Clone)]
pub struct Skill {
    setup: Rc<SkillSetup>,
    services: SkillServices,
    text: Text,
    priority: u32,
    level: u32,
    selected: bool,
    /// Unit the skill belongs to; a handle, never keeps the unit alive
    owner: Option<EntityId>,
    x: i32,
    y: i32,
}

impl Skill {
    /// Create an instance from its definition; call [`Skill::prepare`] before drawing
    pub fn new(setup: Rc<SkillSetup>, services: SkillServices) -> Self {
        Self {
            priority: setup.priority,
            level: setup.level.max(1),
            setup,
            services,
            text: Text::panel(),
            selected: false,
            owner: None,
            x: 0,
            y: 0,
        }
    }

    pub fn set_owner(&mut self, owner: EntityId) {
        self.owner = Some(owner);
    }

    pub fn owner(&self) -> Option<EntityId> {
        self.owner
    }

    pub fn set_priority(&mut self, priority: u32) {
        self.priority = priority;
    }

    pub fn priority(&self) -> u32 {
        self.priority
    }

    /// Change the level, which picks the icon frame
    pub fn set_level(&mut self, level: u32) -> Result<()> {
        if level == 0 {
            return Err(WarbandError::InvalidLevel {
                skill: self.setup.name.clone(),
                level,
            });
        }
        self.level = level;
        Ok(())
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn name(&self) -> &str {
        &self.setup.name
    }

    pub fn description(&self) -> &str {
        &self.setup.description
    }

    pub fn kind(&self) -> SkillKind {
        self.setup.kind
    }

    pub fn target(&self) -> Option<&str> {
        self.setup.target.as_deref()
    }

    pub fn cost(&self) -> Cost {
        self.setup.cost
    }

    pub fn setup(&self) -> &SkillSetup {
        &self.setup
    }

    /// Compute the panel location from the priority
    pub fn prepare(&mut self) {
        let icon = &self.setup.icon;
        let (x, y) = compute_slot_position_in(
            &self.services.panel,
            self.priority,
            icon.tile_width,
            icon.tile_height,
        );
        self.x = x;
        self.y = y;
    }

    /// Location the skill would get at `priority`, if it fits on screen
    pub fn slot_for(&self, priority: u32) -> Option<(i32, i32)> {
        let icon = &self.setup.icon;
        checked_slot_position(&self.services.panel, priority, icon.tile_width, icon.tile_height)
    }

    /// Switch to another panel layout and recompute the location
    pub fn relayout(&mut self, panel: Rc<PanelConfig>) {
        self.services.panel = panel;
        self.prepare();
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn rect(&self) -> SlotRect {
        SlotRect::new(
            self.x,
            self.y,
            self.setup.icon.tile_width,
            self.setup.icon.tile_height,
        )
    }

    /// Whether a screen point lies on the icon, edges included
    pub fn is_over(&self, cursor_x: i32, cursor_y: i32) -> bool {
        self.rect().contains(cursor_x, cursor_y)
    }

    pub fn is_cursor_over(&self, cursor: &Cursor) -> bool {
        self.is_over(cursor.screen_x(), cursor.screen_y())
    }

    pub fn update_on_map(&mut self, _elapsed_ms: f64, _camera: &Camera, _cursor: &Cursor) {}

    pub fn render_on_map(&self, _g: &mut dyn Surface, _cursor: &Cursor, _camera: &Camera) {}

    /// Draw the slot background, the icon and, when hovered, the tooltip
    pub fn render_on_panel(&self, g: &mut dyn Surface, cursor: &Cursor) {
        let panel = &self.services.panel;
        let flag = i32::from(self.selected);
        let inset = panel.background_inset;

        self.services
            .background
            .render(g, flag as u32, self.x - inset, self.y - inset);
        self.setup.icon.render(g, self.level - 1, self.x, self.y + flag);

        if self.is_cursor_over(cursor) && !self.services.has_message() {
            self.render_tooltip(g);
        }
    }

    fn render_tooltip(&self, g: &mut dyn Surface) {
        let panel = &self.services.panel;
        let description = self.description();
        g.draw_text(&self.text, panel.tooltip_x, panel.tooltip_y, description);

        if self.kind().is_produce() {
            let x = panel.tooltip_x + g.text_width(&self.text, description) + panel.cost_gap;
            self.services.gold.render(g, x, panel.tooltip_y);
            self.services.wood.render(g, x + panel.wood_offset, panel.tooltip_y);
        }
    }

    pub fn on_clicked(&self, panel: &mut ControlPanel) {
        self.setup.kind.on_clicked(self, panel);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCall, RecordingSurface, SpriteTiled};

    fn icon() -> SpriteTiled {
        SpriteTiled::new("icons/orc/build_farm", 32, 32, 3)
    }

    fn farm(services: &SkillServices) -> Skill {
        let setup = SkillSetup::new("Build Farm", SkillKind::ProduceBuilding, icon())
            .with_target("FarmOrc")
            .with_cost(500, 300);
        let mut skill = Skill::new(Rc::new(setup), services.clone());
        skill.prepare();
        skill
    }

    #[test]
    fn test_prepare_uses_priority() {
        let services = SkillServices::default();
        let mut skill = farm(&services);
        assert_eq!((skill.x(), skill.y()), (4, 114));

        skill.set_priority(3);
        skill.prepare();
        assert_eq!((skill.x(), skill.y()), (41, 151));
    }

    #[test]
    fn test_is_over_closed_rect() {
        let skill = farm(&SkillServices::default());
        assert!(skill.is_over(4, 114));
        assert!(skill.is_over(36, 146));
        assert!(!skill.is_over(38, 114));
        assert!(!skill.is_over(3, 130));
    }

    #[test]
    fn test_idle_render() {
        let skill = farm(&SkillServices::default());
        let mut g = RecordingSurface::new();
        skill.render_on_panel(&mut g, &Cursor::at(300, 10));

        assert_eq!(
            g.calls(),
            &[
                DrawCall::Tile {
                    sheet: "skill_background".into(),
                    frame: 0,
                    x: 2,
                    y: 112
                },
                DrawCall::Tile {
                    sheet: "icons/orc/build_farm".into(),
                    frame: 0,
                    x: 4,
                    y: 114
                },
            ]
        );
    }

    #[test]
    fn test_selected_render_shifts_icon() {
        let mut skill = farm(&SkillServices::default());
        skill.set_selected(true);
        skill.set_level(2).unwrap();
        let mut g = RecordingSurface::new();
        skill.render_on_panel(&mut g, &Cursor::at(300, 10));

        assert_eq!(
            g.calls()[0],
            DrawCall::Tile {
                sheet: "skill_background".into(),
                frame: 1,
                x: 2,
                y: 112
            }
        );
        assert_eq!(
            g.calls()[1],
            DrawCall::Tile {
                sheet: "icons/orc/build_farm".into(),
                frame: 1,
                x: 4,
                y: 115
            }
        );
    }

    #[test]
    fn test_hover_shows_cost_after_description() {
        let skill = farm(&SkillServices::default());
        let mut g = RecordingSurface::new();
        skill.render_on_panel(&mut g, &Cursor::at(10, 120));

        // "Build Farm" is 10 glyphs of 6 px
        let gold_x = 72 + 60 + 4;
        assert_eq!(
            &g.calls()[2..],
            &[
                DrawCall::Text {
                    content: "Build Farm".into(),
                    size: 10,
                    x: 72,
                    y: 191
                },
                DrawCall::Image {
                    name: "gold".into(),
                    x: gold_x,
                    y: 191
                },
                DrawCall::Image {
                    name: "wood".into(),
                    x: gold_x + 40,
                    y: 191
                },
            ]
        );
    }

    #[test]
    fn test_hover_without_cost_for_plain_skill() {
        let setup = SkillSetup::new("Stop", SkillKind::Stop, icon());
        let mut skill = Skill::new(Rc::new(setup), SkillServices::default());
        skill.prepare();
        let mut g = RecordingSurface::new();
        skill.render_on_panel(&mut g, &Cursor::at(4, 114));

        assert_eq!(g.calls().len(), 3);
        assert!(matches!(g.calls()[2], DrawCall::Text { .. }));
    }

    #[test]
    fn test_message_hides_tooltip() {
        let services = SkillServices::default();
        let skill = farm(&services);
        services
            .message
            .borrow_mut()
            .add_message("Not enough wood", 72, 191, 2000.0);

        let mut g = RecordingSurface::new();
        skill.render_on_panel(&mut g, &Cursor::at(10, 120));
        assert_eq!(g.calls().len(), 2);
    }

    #[test]
    fn test_level_zero_rejected() {
        let mut skill = farm(&SkillServices::default());
        assert!(skill.set_level(0).is_err());
        assert_eq!(skill.level(), 1);
    }

    #[test]
    fn test_relayout_moves_slot() {
        let mut skill = farm(&SkillServices::default());
        skill.relayout(Rc::new(PanelConfig {
            origin_y: 120,
            ..PanelConfig::default()
        }));
        assert_eq!((skill.x(), skill.y()), (4, 120));
    }
}
