pub mod config;
pub mod error;
pub mod media;
pub mod types;

pub use config::{GameConfig, PanelConfig, PanelSprites};
pub use error::{Result, WarbandError};
pub use media::Media;
pub use types::{Cost, EntityId, Race, Tick};
