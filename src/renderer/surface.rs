//! Abstract 2D drawing target and a recording implementation.

use super::{Sprite, SpriteTiled, Text};
use serde::Serialize;

/// Something panel elements can be drawn on.
///
/// Coordinates are screen pixels, origin top-left.
pub trait Surface {
    fn draw_tile(&mut self, sheet: &SpriteTiled, frame: u32, x: i32, y: i32);
    fn draw_image(&mut self, sprite: &Sprite, x: i32, y: i32);
    fn draw_text(&mut self, text: &Text, x: i32, y: i32, content: &str);
    /// Width in pixels `content` would take when drawn with `text`.
    fn text_width(&self, text: &Text, content: &str) -> i32;
}

/// A single recorded drawing operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCall {
    Tile {
        sheet: String,
        frame: u32,
        x: i32,
        y: i32,
    },
    Image {
        name: String,
        x: i32,
        y: i32,
    },
    Text {
        content: String,
        size: u32,
        x: i32,
        y: i32,
    },
}

/// Surface that records draw calls instead of rasterizing them.
///
/// Text is measured with a fixed advance of 3/5 of the font size per glyph.
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn take(&mut self) -> Vec<DrawCall> {
        std::mem::take(&mut self.calls)
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    pub fn glyph_advance(text: &Text) -> i32 {
        (text.size as i32 * 3) / 5
    }
}

impl Surface for RecordingSurface {
    fn draw_tile(&mut self, sheet: &SpriteTiled, frame: u32, x: i32, y: i32) {
        self.calls.push(DrawCall::Tile {
            sheet: sheet.name.clone(),
            frame,
            x,
            y,
        });
    }

    fn draw_image(&mut self, sprite: &Sprite, x: i32, y: i32) {
        self.calls.push(DrawCall::Image {
            name: sprite.name.clone(),
            x,
            y,
        });
    }

    fn draw_text(&mut self, text: &Text, x: i32, y: i32, content: &str) {
        self.calls.push(DrawCall::Text {
            content: content.to_string(),
            size: text.size,
            x,
            y,
        });
    }

    fn text_width(&self, text: &Text, content: &str) -> i32 {
        content.chars().count() as i32 * Self::glyph_advance(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut g = RecordingSurface::new();
        SpriteTiled::new("icons", 27, 19, 3).render(&mut g, 2, 4, 114);
        Sprite::new("gold", 9, 9).render(&mut g, 100, 191);

        assert_eq!(
            g.calls(),
            &[
                DrawCall::Tile {
                    sheet: "icons".into(),
                    frame: 2,
                    x: 4,
                    y: 114
                },
                DrawCall::Image {
                    name: "gold".into(),
                    x: 100,
                    y: 191
                },
            ]
        );
    }

    #[test]
    fn test_text_width_scales_with_font() {
        let g = RecordingSurface::new();
        assert_eq!(g.text_width(&Text::panel(), "Farm"), 24);
    }

    #[test]
    fn test_take_empties_log() {
        let mut g = RecordingSurface::new();
        g.draw_text(&Text::panel(), 0, 0, "x");
        assert_eq!(g.take().len(), 1);
        assert!(g.calls().is_empty());
    }
}
