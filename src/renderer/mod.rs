//! Drawing seams for the control panel.
//!
//! Panel code never talks to a graphics backend directly; it draws through
//! the [`Surface`] trait so frames can be rasterized by the engine or
//! recorded for headless runs.

pub mod camera;
pub mod sheet;
pub mod surface;
pub mod text;

pub use camera::Camera;
pub use sheet::{Sprite, SpriteTiled};
pub use surface::{DrawCall, RecordingSurface, Surface};
pub use text::{FontFamily, Text, TextStyle};
