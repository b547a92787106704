//! Map camera with coordinate transformations.
//!
//! World and screen share the same orientation (Y grows downward), the camera
//! only translates and scales.

use glam::Vec2;

/// View onto the map area of the screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// World position shown at the center of the view.
    pub center: Vec2,
    /// World units per screen pixel (lower = zoomed in).
    pub zoom: f32,
    /// Screen dimensions of the view in pixels.
    pub viewport_size: Vec2,
    /// Screen position of the view's top-left corner.
    pub screen_offset: Vec2,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(320.0, 200.0)
    }
}

impl Camera {
    /// Create a new camera centered at origin.
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            center: Vec2::ZERO,
            zoom: 1.0,
            viewport_size: Vec2::new(viewport_width, viewport_height),
            screen_offset: Vec2::ZERO,
        }
    }

    /// Place the view somewhere other than the screen's top-left corner.
    pub fn with_screen_offset(mut self, x: f32, y: f32) -> Self {
        self.screen_offset = Vec2::new(x, y);
        self
    }

    /// Convert world coordinates to screen coordinates.
    pub fn world_to_screen(&self, world_pos: Vec2) -> Vec2 {
        let scaled = (world_pos - self.center) / self.zoom;
        self.screen_offset + self.viewport_size / 2.0 + scaled
    }

    /// Convert screen coordinates to world coordinates.
    pub fn screen_to_world(&self, screen_pos: Vec2) -> Vec2 {
        let centered = screen_pos - self.screen_offset - self.viewport_size / 2.0;
        self.center + centered * self.zoom
    }

    /// Whether a screen position falls inside the map view.
    pub fn contains_screen(&self, screen_pos: Vec2) -> bool {
        let local = screen_pos - self.screen_offset;
        local.x >= 0.0
            && local.y >= 0.0
            && local.x <= self.viewport_size.x
            && local.y <= self.viewport_size.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_screen_roundtrip() {
        let camera = Camera {
            center: Vec2::new(100.0, 200.0),
            zoom: 2.0,
            viewport_size: Vec2::new(240.0, 200.0),
            screen_offset: Vec2::new(72.0, 12.0),
        };

        let world = Vec2::new(150.0, 250.0);
        let back = camera.screen_to_world(camera.world_to_screen(world));

        assert!((world - back).length() < 0.001);
    }

    #[test]
    fn test_center_maps_to_view_center() {
        let camera = Camera::new(240.0, 200.0).with_screen_offset(72.0, 12.0);
        let screen = camera.world_to_screen(camera.center);
        assert!((screen - Vec2::new(192.0, 112.0)).length() < 0.001);
    }

    #[test]
    fn test_contains_screen_excludes_panel() {
        let camera = Camera::new(240.0, 200.0).with_screen_offset(72.0, 0.0);
        assert!(!camera.contains_screen(Vec2::new(10.0, 150.0)));
        assert!(camera.contains_screen(Vec2::new(100.0, 150.0)));
    }
}
