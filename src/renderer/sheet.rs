//! Sprite sheets drawn on a [`Surface`].

use super::Surface;
use serde::{Deserialize, Serialize};

/// A sheet cut into equally sized tiles, addressed by frame index.
///
/// Built in code or read from TOML, the same fields describe the same sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteTiled {
    /// Image the tiles are cut from.
    pub name: String,
    pub tile_width: u32,
    pub tile_height: u32,
    /// Total number of tiles.
    #[serde(default = "default_frames")]
    pub frames: u32,
}

fn default_frames() -> u32 {
    1
}

impl SpriteTiled {
    pub fn new(name: impl Into<String>, tile_width: u32, tile_height: u32, frames: u32) -> Self {
        Self {
            name: name.into(),
            tile_width,
            tile_height,
            frames: frames.max(1),
        }
    }

    /// Clamp a frame index to the sheet; out of range frames show the last tile.
    pub fn clamp_frame(&self, frame: u32) -> u32 {
        frame.min(self.frames.saturating_sub(1))
    }

    /// Draw one tile with its top-left corner at `(x, y)`.
    pub fn render(&self, g: &mut dyn Surface, frame: u32, x: i32, y: i32) {
        g.draw_tile(self, self.clamp_frame(frame), x, y);
    }
}

/// A single image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprite {
    pub name: String,
    pub width: u32,
    pub height: u32,
}

impl Sprite {
    pub fn new(name: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
        }
    }

    pub fn render(&self, g: &mut dyn Surface, x: i32, y: i32) {
        g.draw_image(self, x, y);
    }
}
