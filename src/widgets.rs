//! Reusable clickable UI components.
//!
//! Rendering and click-target registration are co-located: a component
//! that draws a tappable element is also responsible for registering its
//! hit region, so targets can never drift from what is on screen.

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::style::{Color, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::Paragraph;
use ratzilla::ratatui::Frame;

use crate::input::ClickState;

// ── ClickableList ──────────────────────────────────────────────

/// A builder pairing rendered [`Line`]s with click actions.
///
/// Lines are annotated as clickable when they are added; a single
/// [`register_targets`](ClickableList::register_targets) call after
/// layout registers every target on the row(s) the line actually
/// occupies, including rows produced by wrapping. Inserting or removing
/// lines above a clickable line moves its target automatically.
pub struct ClickableList<'a> {
    lines: Vec<Line<'a>>,
    /// `(line_index, action_id)` pairs into `lines`.
    actions: Vec<(usize, u16)>,
}

impl<'a> ClickableList<'a> {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            actions: Vec::new(),
        }
    }

    /// Add a non-clickable line.
    pub fn push(&mut self, line: Line<'a>) {
        self.lines.push(line);
    }

    /// Add a clickable line bound to a semantic action ID.
    pub fn push_clickable(&mut self, line: Line<'a>, action_id: u16) {
        self.actions.push((self.lines.len(), action_id));
        self.lines.push(line);
    }

    /// Add a multi-line block where every line triggers the same action
    /// (e.g. a card with a title, a description and a salary row).
    pub fn push_clickable_block(
        &mut self,
        lines: impl IntoIterator<Item = Line<'a>>,
        action_id: u16,
    ) {
        for line in lines {
            self.push_clickable(line, action_id);
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Consume the builder, returning the lines for rendering.
    pub fn into_lines(self) -> Vec<Line<'a>> {
        self.lines
    }

    /// Register click targets for all clickable lines.
    ///
    /// * `top_offset` / `bottom_offset` — rows taken by borders.
    /// * `scroll` — vertical scroll offset in visual rows.
    /// * `wrap_width` — content width for wrap calculation; pass 0 when
    ///   the widget does not wrap (one logical line per visual row).
    pub fn register_targets(
        &self,
        area: Rect,
        cs: &mut ClickState,
        top_offset: u16,
        bottom_offset: u16,
        scroll: u16,
        wrap_width: u16,
    ) {
        let content_y = area.y + top_offset;
        let content_end = area.y + area.height.saturating_sub(bottom_offset);

        // Visual start row and height of every logical line.
        let mut visual_starts = Vec::with_capacity(self.lines.len());
        let mut cumulative: u16 = 0;
        let mut heights = Vec::with_capacity(self.lines.len());
        for line in &self.lines {
            visual_starts.push(cumulative);
            let height = if wrap_width == 0 {
                1
            } else {
                let width = line.width();
                if width <= wrap_width as usize {
                    1
                } else {
                    width.div_ceil(wrap_width as usize) as u16
                }
            };
            heights.push(height);
            cumulative += height;
        }

        for &(line_index, action_id) in &self.actions {
            let start = visual_starts[line_index];
            for offset in 0..heights[line_index] {
                let visual_row = start + offset;
                if visual_row < scroll {
                    continue;
                }
                let screen_row = content_y + (visual_row - scroll);
                if screen_row >= content_end {
                    break;
                }
                cs.add_row_target(area, screen_row, action_id);
            }
        }
    }
}

// ── TabBar ─────────────────────────────────────────────────────

/// A horizontal row of tappable labels (filter buttons, toggles).
///
/// Labels render on a single line separated by a separator string; the
/// hit region of each tab covers its label plus half of each adjacent
/// separator, and the first/last tabs extend to the area edges so the
/// whole bar is tappable.
pub struct TabBar<'a> {
    tabs: Vec<(String, Style, u16)>,
    separator: &'a str,
}

impl<'a> TabBar<'a> {
    pub fn new(separator: &'a str) -> Self {
        Self {
            tabs: Vec::new(),
            separator,
        }
    }

    pub fn tab(mut self, label: impl Into<String>, style: Style, action_id: u16) -> Self {
        self.tabs.push((label.into(), style, action_id));
        self
    }

    pub fn render(self, f: &mut Frame, area: Rect, cs: &mut ClickState) {
        let separator_width = Line::from(self.separator).width() as u16;
        let mut spans: Vec<Span> = Vec::new();
        let mut widths: Vec<(u16, u16)> = Vec::new();

        for (i, (label, style, action_id)) in self.tabs.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(
                    self.separator,
                    Style::default().fg(Color::DarkGray),
                ));
            }
            let padded = format!(" {} ", label);
            widths.push((Line::from(padded.as_str()).width() as u16, *action_id));
            spans.push(Span::styled(padded, *style));
        }

        f.render_widget(Paragraph::new(Line::from(spans)), area);

        register_tab_targets(
            cs,
            &widths,
            separator_width,
            area.x,
            area.y,
            area.width,
            area.height.max(1),
        );
    }
}

/// Compute and register the hit regions for a row of tab labels.
/// `widths` holds `(padded_label_width, action_id)` per tab.
fn register_tab_targets(
    cs: &mut ClickState,
    widths: &[(u16, u16)],
    separator_width: u16,
    x: u16,
    y: u16,
    total_width: u16,
    height: u16,
) {
    let n = widths.len();
    if n == 0 || total_width == 0 {
        return;
    }

    // Starting column of each label.
    let mut starts = Vec::with_capacity(n);
    let mut cursor: u16 = 0;
    for (i, &(width, _)) in widths.iter().enumerate() {
        if i > 0 {
            cursor += separator_width;
        }
        starts.push(cursor);
        cursor += width;
    }

    for i in 0..n {
        let (_, action_id) = widths[i];
        let left = if i == 0 {
            0
        } else {
            let prev_end = starts[i - 1] + widths[i - 1].0;
            prev_end + (starts[i] - prev_end) / 2
        };
        let right = if i == n - 1 {
            total_width
        } else {
            let end = starts[i] + widths[i].0;
            end + (starts[i + 1] - end) / 2
        };
        let width = right.saturating_sub(left);
        if width > 0 {
            cs.add_click_target(Rect::new(x + left, y, width, height), action_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clickable_list_rows() {
        let mut cl = ClickableList::new();
        cl.push(Line::from("header"));
        cl.push_clickable(Line::from("item 0"), 10);
        cl.push_clickable(Line::from("item 1"), 11);
        cl.push(Line::from("footer"));
        assert_eq!(cl.len(), 4);

        let area = Rect::new(0, 5, 80, 10);
        let mut cs = ClickState::new();
        cl.register_targets(area, &mut cs, 1, 1, 0, 0);

        assert_eq!(cs.targets.len(), 2);
        assert_eq!(cs.hit_test(10, 7), Some(10));
        assert_eq!(cs.hit_test(10, 8), Some(11));
        assert_eq!(cs.hit_test(10, 6), None);
        assert_eq!(cs.hit_test(10, 9), None);
    }

    #[test]
    fn clickable_block_spans_all_its_rows() {
        let mut cl = ClickableList::new();
        cl.push_clickable_block(
            vec![Line::from("name"), Line::from("description"), Line::from("")],
            42,
        );
        cl.push_clickable(Line::from("next"), 43);

        let area = Rect::new(0, 0, 80, 10);
        let mut cs = ClickState::new();
        cl.register_targets(area, &mut cs, 0, 0, 0, 0);

        assert_eq!(cs.hit_test(1, 0), Some(42));
        assert_eq!(cs.hit_test(1, 1), Some(42));
        assert_eq!(cs.hit_test(1, 2), Some(42));
        assert_eq!(cs.hit_test(1, 3), Some(43));
    }

    #[test]
    fn scrolled_rows_do_not_register() {
        let mut cl = ClickableList::new();
        for i in 0..4 {
            cl.push_clickable(Line::from(format!("item {i}")), 100 + i as u16);
        }

        let area = Rect::new(0, 10, 80, 5);
        let mut cs = ClickState::new();
        cl.register_targets(area, &mut cs, 0, 1, 2, 0);

        assert_eq!(cs.targets.len(), 2);
        assert_eq!(cs.hit_test(10, 10), Some(102));
        assert_eq!(cs.hit_test(10, 11), Some(103));
    }

    #[test]
    fn rows_clipped_by_area_do_not_register() {
        let mut cl = ClickableList::new();
        for i in 0..20 {
            cl.push_clickable(Line::from(format!("item {i}")), 50 + i as u16);
        }

        // Bordered area with 3 content rows.
        let area = Rect::new(0, 0, 80, 5);
        let mut cs = ClickState::new();
        cl.register_targets(area, &mut cs, 1, 1, 0, 0);

        assert_eq!(cs.targets.len(), 3);
        assert_eq!(cs.hit_test(10, 3), Some(52));
        assert_eq!(cs.hit_test(10, 4), None);
    }

    #[test]
    fn wrapped_line_pushes_later_targets_down() {
        let mut cl = ClickableList::new();
        // 20 chars wrap to two rows at width 10.
        cl.push(Line::from("12345678901234567890"));
        cl.push_clickable(Line::from("item0"), 10);

        let area = Rect::new(0, 0, 12, 10);
        let mut cs = ClickState::new();
        cl.register_targets(area, &mut cs, 0, 0, 0, 10);

        assert_eq!(cs.hit_test(5, 0), None);
        assert_eq!(cs.hit_test(5, 1), None);
        assert_eq!(cs.hit_test(5, 2), Some(10));
    }

    #[test]
    fn wrapped_clickable_line_is_tappable_on_every_row() {
        let mut cl = ClickableList::new();
        cl.push_clickable(Line::from("123456789012345678901234567890"), 42);

        let area = Rect::new(0, 0, 12, 10);
        let mut cs = ClickState::new();
        cl.register_targets(area, &mut cs, 0, 0, 0, 10);

        assert_eq!(cs.hit_test(5, 0), Some(42));
        assert_eq!(cs.hit_test(5, 1), Some(42));
        assert_eq!(cs.hit_test(5, 2), Some(42));
        assert_eq!(cs.hit_test(5, 3), None);
    }

    #[test]
    fn empty_list_registers_nothing() {
        let cl = ClickableList::new();
        assert!(cl.is_empty());
        let mut cs = ClickState::new();
        cl.register_targets(Rect::new(0, 0, 80, 10), &mut cs, 1, 1, 0, 0);
        assert!(cs.targets.is_empty());
    }

    #[test]
    fn tab_targets_split_separators_at_midpoint() {
        // 3 tabs, padded labels 6 wide, separator 3 wide.
        let mut cs = ClickState::new();
        let widths: Vec<(u16, u16)> = vec![(6, 10), (6, 11), (6, 12)];
        register_tab_targets(&mut cs, &widths, 3, 0, 5, 80, 1);

        assert_eq!(cs.targets.len(), 3);
        assert_eq!(cs.hit_test(0, 5), Some(10));
        assert_eq!(cs.hit_test(6, 5), Some(10));
        assert_eq!(cs.hit_test(7, 5), Some(11));
        assert_eq!(cs.hit_test(15, 5), Some(11));
        assert_eq!(cs.hit_test(16, 5), Some(12));
        assert_eq!(cs.hit_test(79, 5), Some(12));
    }

    #[test]
    fn single_tab_covers_full_width() {
        let mut cs = ClickState::new();
        register_tab_targets(&mut cs, &[(8, 42)], 3, 5, 10, 40, 1);
        assert_eq!(cs.targets.len(), 1);
        assert_eq!(cs.hit_test(5, 10), Some(42));
        assert_eq!(cs.hit_test(44, 10), Some(42));
    }

    #[test]
    fn empty_tab_bar_registers_nothing() {
        let mut cs = ClickState::new();
        register_tab_targets(&mut cs, &[], 3, 0, 0, 80, 1);
        assert!(cs.targets.is_empty());
    }
}
