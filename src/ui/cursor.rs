//! Pointer state sampled once per frame.

use crate::renderer::Camera;
use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
}

/// Cursor position in screen and world space, plus the click of this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Cursor {
    screen_x: i32,
    screen_y: i32,
    world: Vec2,
    click: Option<MouseButton>,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cursor resting at a screen position, without camera mapping.
    pub fn at(screen_x: i32, screen_y: i32) -> Self {
        Self {
            screen_x,
            screen_y,
            world: Vec2::new(screen_x as f32, screen_y as f32),
            click: None,
        }
    }

    /// Move to a screen position and recompute the world position under it.
    pub fn move_to(&mut self, screen_x: i32, screen_y: i32, camera: &Camera) {
        self.screen_x = screen_x;
        self.screen_y = screen_y;
        self.world = camera.screen_to_world(Vec2::new(screen_x as f32, screen_y as f32));
    }

    /// Register a click for the current frame.
    pub fn press(&mut self, button: MouseButton) {
        self.click = Some(button);
    }

    /// Forget this frame's click.
    pub fn end_frame(&mut self) {
        self.click = None;
    }

    pub fn screen_x(&self) -> i32 {
        self.screen_x
    }

    pub fn screen_y(&self) -> i32 {
        self.screen_y
    }

    pub fn world(&self) -> Vec2 {
        self.world
    }

    pub fn click(&self) -> Option<MouseButton> {
        self.click
    }

    pub fn clicked(&self, button: MouseButton) -> bool {
        self.click == Some(button)
    }
}
