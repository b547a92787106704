//! Warband - control panel skills for a real-time strategy game
//!
//! Units register skills into numbered groups; each skill owns a slot on
//! the control panel derived from its priority, reacts to the cursor and
//! draws itself through an abstract [`renderer::Surface`].

pub mod core;
pub mod entity;
pub mod renderer;
pub mod session;
pub mod skills;
pub mod ui;
pub mod weapon;

pub use session::GameSession;
