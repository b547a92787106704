//! Weapons: launchers and their session context

pub mod context;
pub mod launcher;

pub use context::ContextWeapon;
pub use launcher::{FactoryLauncher, Launcher, LauncherSetup, Projectile};
