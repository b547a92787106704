//! Skill slot geometry on the control panel
//!
//! Slots form a grid: priority `p` occupies column `p % columns` and row
//! `p / columns`, each cell being one icon plus the gutter.

use crate::core::config::PanelConfig;

/// Panel position of a skill with the default layout
///
/// `x = 4 + (icon_width + 5) * (priority % 2)`,
/// `y = 114 + (icon_height + 5) * (priority / 2)`.
pub fn compute_slot_position(priority: u32, icon_width: u32, icon_height: u32) -> (i32, i32) {
    compute_slot_position_in(&PanelConfig::default(), priority, icon_width, icon_height)
}

/// Panel position of a skill for a given layout
///
/// Slots beyond the screen coordinate range pin to `i32::MAX`; registration
/// rejects such priorities through [`checked_slot_position`].
pub fn compute_slot_position_in(
    panel: &PanelConfig,
    priority: u32,
    icon_width: u32,
    icon_height: u32,
) -> (i32, i32) {
    debug_assert!(icon_width > 0 && icon_height > 0, "icon size must be positive");
    checked_slot_position(panel, priority, icon_width, icon_height).unwrap_or((i32::MAX, i32::MAX))
}

/// Panel position of a skill, or `None` when the slot, far edges included,
/// does not fit in screen coordinates
pub fn checked_slot_position(
    panel: &PanelConfig,
    priority: u32,
    icon_width: u32,
    icon_height: u32,
) -> Option<(i32, i32)> {
    let (column, row) = slot_cell(panel, priority);
    let x = cell_offset(panel.origin_x, icon_width, panel.gutter, column)?;
    let y = cell_offset(panel.origin_y, icon_height, panel.gutter, row)?;
    Some((x, y))
}

fn cell_offset(origin: i32, size: u32, gutter: i32, cell: u32) -> Option<i32> {
    let size = i32::try_from(size).ok()?;
    let start = size
        .checked_add(gutter)?
        .checked_mul(i32::try_from(cell).ok()?)?
        .checked_add(origin)?;
    start.checked_add(size)?;
    Some(start)
}

/// Grid cell `(column, row)` of a priority
pub fn slot_cell(panel: &PanelConfig, priority: u32) -> (u32, u32) {
    let columns = panel.columns.max(1);
    (priority % columns, priority / columns)
}

/// Screen rectangle occupied by a skill icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl SlotRect {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether a point lies in the closed rectangle `[x, x+w] × [y, y+h]`
    pub fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x
            && px <= self.x.saturating_add_unsigned(self.width)
            && py >= self.y
            && py <= self.y.saturating_add_unsigned(self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_four_slots() {
        assert_eq!(compute_slot_position(0, 32, 32), (4, 114));
        assert_eq!(compute_slot_position(1, 32, 32), (41, 114));
        assert_eq!(compute_slot_position(2, 32, 32), (4, 151));
        assert_eq!(compute_slot_position(3, 32, 32), (41, 151));
    }

    #[test]
    fn test_non_square_icons() {
        assert_eq!(compute_slot_position(3, 27, 19), (36, 138));
    }

    #[test]
    fn test_custom_layout() {
        let panel = PanelConfig {
            origin_x: 0,
            origin_y: 0,
            columns: 3,
            ..PanelConfig::default()
        };
        assert_eq!(compute_slot_position_in(&panel, 4, 10, 10), (15, 15));
    }

    #[test]
    fn test_slot_past_coordinate_range() {
        let panel = PanelConfig::default();
        assert_eq!(checked_slot_position(&panel, 3, 32, 32), Some((41, 151)));
        assert_eq!(checked_slot_position(&panel, 200_000_000, 32, 32), None);
        assert_eq!(
            compute_slot_position(200_000_000, 32, 32),
            (i32::MAX, i32::MAX)
        );

        let rect = SlotRect::new(i32::MAX, i32::MAX, 32, 32);
        assert!(rect.contains(i32::MAX, i32::MAX));
    }

    #[test]
    fn test_rect_edges_inclusive() {
        let rect = SlotRect::new(4, 114, 32, 32);
        assert!(rect.contains(4, 114));
        assert!(rect.contains(36, 146));
        assert!(rect.contains(4, 146));
        assert!(rect.contains(36, 114));
        assert!(!rect.contains(37, 114));
        assert!(!rect.contains(3, 114));
        assert!(!rect.contains(4, 147));
        assert!(!rect.contains(4, 113));
    }
}
