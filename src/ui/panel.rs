//! Control panel model for the selected unit
//!
//! The panel shows one skill group of one unit at a time. Each frame it
//! resolves which skill is under the cursor, forwards clicks to that skill
//! and collects the orders skills issue.

use crate::core::types::{Cost, EntityId};
use crate::entity::Unit;
use crate::renderer::{Camera, Surface};
use crate::skills::BASE_GROUP;
use crate::ui::cursor::{Cursor, MouseButton};
use glam::Vec2;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "order", rename_all = "snake_case")]
pub enum Order {
    Move,
    Attack,
    Stop,
    Build { building: String },
    Train { entity: String },
}

/// An order ready for the simulation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelOrder {
    pub unit: EntityId,
    pub order: Order,
    /// Map position for targeted orders
    pub target: Option<[f32; 2]>,
    pub cost: Cost,
}

/// Order waiting for the player to pick a map position
#[derive(Debug, Clone, PartialEq)]
pub struct ArmedOrder {
    pub unit: EntityId,
    pub order: Order,
    pub cost: Cost,
}

#[derive(Debug, Default)]
pub struct ControlPanel {
    active_group: usize,
    hovered: Option<u32>,
    armed: Option<ArmedOrder>,
    orders: Vec<PanelOrder>,
}

impl ControlPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_group(&self) -> usize {
        self.active_group
    }

    pub fn open_group(&mut self, group: usize) {
        self.active_group = group;
    }

    /// Priority of the skill under the cursor in the last update
    pub fn hovered(&self) -> Option<u32> {
        self.hovered
    }

    pub fn armed(&self) -> Option<&ArmedOrder> {
        self.armed.as_ref()
    }

    /// Wait for a map position before issuing `order`
    pub fn arm(&mut self, unit: EntityId, order: Order, cost: Cost) {
        self.armed = Some(ArmedOrder { unit, order, cost });
    }

    pub fn disarm(&mut self) {
        self.armed = None;
    }

    /// Issue an order that needs no target, dropping any armed one
    pub fn issue(&mut self, unit: EntityId, order: Order, cost: Cost) {
        self.armed = None;
        tracing::debug!("Order {:?} issued for {:?}", order, unit);
        self.orders.push(PanelOrder {
            unit,
            order,
            target: None,
            cost,
        });
    }

    /// Complete the armed order at `point`; false when nothing was armed
    pub fn apply_target(&mut self, point: Vec2) -> bool {
        let Some(armed) = self.armed.take() else {
            return false;
        };
        tracing::debug!("Order {:?} targeted at {}", armed.order, point);
        self.orders.push(PanelOrder {
            unit: armed.unit,
            order: armed.order,
            target: Some(point.to_array()),
            cost: armed.cost,
        });
        true
    }

    pub fn orders(&self) -> &[PanelOrder] {
        &self.orders
    }

    pub fn drain_orders(&mut self) -> Vec<PanelOrder> {
        std::mem::take(&mut self.orders)
    }

    /// Show a newly selected unit, starting from its base group
    pub fn reset(&mut self) {
        self.active_group = BASE_GROUP;
        self.hovered = None;
        self.armed = None;
    }

    /// Process one frame of cursor input for `unit`
    pub fn update(&mut self, unit: &mut Unit, cursor: &Cursor, camera: &Camera, elapsed_ms: f64) {
        self.hovered = unit
            .skills(self.active_group)
            .find(|skill| skill.is_cursor_over(cursor))
            .map(|skill| skill.priority());

        match cursor.click() {
            Some(MouseButton::Left) => match self.hovered {
                Some(priority) => self.click_skill(unit, priority),
                None if self.armed.is_some() => {
                    let screen = Vec2::new(cursor.screen_x() as f32, cursor.screen_y() as f32);
                    if camera.contains_screen(screen) && self.apply_target(cursor.world()) {
                        unit.clear_selection();
                    }
                }
                None => {}
            },
            Some(MouseButton::Right) => {
                if self.armed.take().is_some() {
                    unit.clear_selection();
                }
            }
            None => {}
        }

        for skill in unit.skills_mut(self.active_group) {
            skill.update_on_map(elapsed_ms, camera, cursor);
        }
    }

    fn click_skill(&mut self, unit: &mut Unit, priority: u32) {
        let group = self.active_group;
        unit.clear_selection();
        let Some(skill) = unit.skill_mut(group, priority) else {
            return;
        };
        skill.set_selected(true);
        skill.on_clicked(self);

        // Menu changes and immediate orders leave nothing selected
        if self.active_group != group || self.armed.is_none() {
            unit.clear_selection();
        }
    }

    /// Draw the active group's skills
    pub fn render(&self, unit: &Unit, g: &mut dyn Surface, cursor: &Cursor, camera: &Camera) {
        for skill in unit.skills(self.active_group) {
            skill.render_on_panel(g, cursor);
            skill.render_on_map(g, cursor, camera);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_and_drain() {
        let mut panel = ControlPanel::new();
        let unit = EntityId::new();
        panel.issue(unit, Order::Stop, Cost::default());
        assert_eq!(panel.orders().len(), 1);
        assert_eq!(panel.drain_orders()[0].order, Order::Stop);
        assert!(panel.orders().is_empty());
    }

    #[test]
    fn test_apply_target_needs_armed_order() {
        let mut panel = ControlPanel::new();
        assert!(!panel.apply_target(Vec2::new(3.0, 4.0)));

        let unit = EntityId::new();
        panel.arm(unit, Order::Move, Cost::default());
        assert!(panel.apply_target(Vec2::new(3.0, 4.0)));
        assert!(panel.armed().is_none());
        assert_eq!(panel.orders()[0].target, Some([3.0, 4.0]));
    }

    #[test]
    fn test_issue_replaces_armed_order() {
        let mut panel = ControlPanel::new();
        let unit = EntityId::new();
        panel.arm(unit, Order::Move, Cost::default());
        panel.issue(unit, Order::Stop, Cost::default());

        assert!(panel.armed().is_none());
        assert!(!panel.apply_target(Vec2::new(3.0, 4.0)));
        assert_eq!(panel.drain_orders().len(), 1);
    }

    #[test]
    fn test_reset_returns_to_base_group() {
        let mut panel = ControlPanel::new();
        panel.open_group(1);
        panel.arm(EntityId::new(), Order::Attack, Cost::default());
        panel.reset();
        assert_eq!(panel.active_group(), BASE_GROUP);
        assert!(panel.armed().is_none());
    }
}
