//! Control panel UI: slot layout, cursor, timed messages and panel model

pub mod cursor;
pub mod message;
pub mod panel;
pub mod slot;

pub use cursor::{Cursor, MouseButton};
pub use message::TimedMessage;
pub use panel::{ArmedOrder, ControlPanel, Order, PanelOrder};
pub use slot::{checked_slot_position, compute_slot_position, compute_slot_position_in, SlotRect};
