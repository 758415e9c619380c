//! Shared input handling: event normalization, click targets, hit testing.
//!
//! Keyboard, mouse and touch all funnel into [`InputEvent`] before the
//! app sees them, so the whole state machine is drivable from tests
//! without a rendering surface.

use ratzilla::ratatui::layout::Rect;

/// All input events, normalized from keyboard, mouse and touch sources.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A printable key press.
    Char(char),
    Backspace,
    Enter,
    Escape,
    Up,
    Down,
    /// A click/tap on a registered target, identified by a semantic
    /// action ID (see `explorer::actions`).
    Click(u16),
}

/// A screen region that triggers an action when tapped or clicked.
#[derive(Debug, Clone)]
pub struct ClickTarget {
    /// Hit region in terminal cell coordinates.
    pub rect: Rect,
    pub action_id: u16,
}

/// Click targets shared between the render pass (which registers them)
/// and the mouse handler (which hit-tests against them).
pub struct ClickState {
    pub targets: Vec<ClickTarget>,
    pub terminal_cols: u16,
    pub terminal_rows: u16,
}

impl ClickState {
    pub fn new() -> Self {
        Self {
            targets: Vec::new(),
            terminal_cols: 0,
            terminal_rows: 0,
        }
    }

    /// Called at the start of every render pass; targets are re-registered
    /// from scratch each frame.
    pub fn clear_targets(&mut self) {
        self.targets.clear();
    }

    pub fn add_click_target(&mut self, rect: Rect, action_id: u16) {
        self.targets.push(ClickTarget { rect, action_id });
    }

    /// Register a full-width target on one row of `area`, ignoring rows
    /// that fall outside it.
    pub fn add_row_target(&mut self, area: Rect, row: u16, action_id: u16) {
        if row >= area.y && row < area.y + area.height {
            self.targets.push(ClickTarget {
                rect: Rect::new(area.x, row, area.width, 1),
                action_id,
            });
        }
    }

    /// Hit-test a cell coordinate. The last registered target wins when
    /// targets overlap, matching UI layering where later elements sit on
    /// top.
    pub fn hit_test(&self, col: u16, row: u16) -> Option<u16> {
        self.targets.iter().rev().find_map(|target| {
            let r = &target.rect;
            if col >= r.x && col < r.x + r.width && row >= r.y && row < r.y + r.height {
                Some(target.action_id)
            } else {
                None
            }
        })
    }
}

/// Whether a screen width (in columns) should use the stacked layout.
pub fn is_narrow_layout(width: u16) -> bool {
    width < 70
}

/// Convert a pixel Y coordinate (relative to the grid container) to a
/// terminal row. `None` when the click falls outside the grid.
pub fn pixel_y_to_row(click_y: f64, grid_height: f64, terminal_rows: u16) -> Option<u16> {
    if grid_height <= 0.0 || terminal_rows == 0 || click_y < 0.0 {
        return None;
    }
    let cell_height = grid_height / terminal_rows as f64;
    let row = (click_y / cell_height) as u16;
    if row >= terminal_rows {
        return None;
    }
    Some(row)
}

/// Convert a pixel X coordinate to a terminal column.
pub fn pixel_x_to_col(click_x: f64, grid_width: f64, terminal_cols: u16) -> Option<u16> {
    if grid_width <= 0.0 || terminal_cols == 0 || click_x < 0.0 {
        return None;
    }
    let cell_width = grid_width / terminal_cols as f64;
    let col = (click_x / cell_width) as u16;
    if col >= terminal_cols {
        return None;
    }
    Some(col)
}
