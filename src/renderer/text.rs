//! Text styles used by panel rendering.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontFamily {
    Dialog,
    Serif,
    Monospaced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextStyle {
    Normal,
    Bold,
    Italic,
}

/// Font description handed to a [`Surface`](super::Surface) when drawing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Text {
    pub family: FontFamily,
    pub size: u32,
    pub style: TextStyle,
}

impl Text {
    pub const fn new(family: FontFamily, size: u32, style: TextStyle) -> Self {
        Self {
            family,
            size,
            style,
        }
    }

    /// Font used for skill descriptions on the panel.
    pub const fn panel() -> Self {
        Self::new(FontFamily::Dialog, 10, TextStyle::Normal)
    }
}
