//! View rendering (read-only from state).
//!
//! Everything on screen is derived from (phase, state, catalog) on every
//! draw; click targets are re-registered alongside the widgets they
//! belong to.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::catalog::{Catalog, CareerEntry, EducationPathways, NamedPathway};
use crate::input::{is_narrow_layout, ClickState};
use crate::widgets::{ClickableList, TabBar};

use super::actions::*;
use super::logic::{
    format_salary, global_search, highlight, visible_careers, SalaryDisplay,
};
use super::state::{
    DetailsSelection, ExplorerState, InputMode, SalarySort, View, ALL_TAGS,
};
use super::{AppPhase, ExplorerApp};

// ── Palette ────────────────────────────────────────────────────────────

/// Colors for the current theme. Default is the light scheme; dark mode
/// flips to light-on-dark.
#[derive(Clone, Copy, Debug)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub dim: Color,
    pub heading: Color,
    pub accent: Color,
    pub border: Color,
    pub include: Color,
    pub exclude: Color,
    pub highlight: Style,
}

impl Palette {
    pub fn for_mode(dark: bool) -> Self {
        if dark {
            Self {
                background: Color::Black,
                text: Color::White,
                dim: Color::Gray,
                heading: Color::Cyan,
                accent: Color::Yellow,
                border: Color::DarkGray,
                include: Color::Green,
                exclude: Color::Red,
                highlight: Style::default().fg(Color::Black).bg(Color::Yellow),
            }
        } else {
            Self {
                background: Color::White,
                text: Color::Black,
                dim: Color::DarkGray,
                heading: Color::Blue,
                accent: Color::Magenta,
                border: Color::Gray,
                include: Color::Green,
                exclude: Color::Red,
                highlight: Style::default().fg(Color::Black).bg(Color::Yellow),
            }
        }
    }
}

// ── Entry point ────────────────────────────────────────────────────────

pub fn render(
    app: &ExplorerApp,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let palette = Palette::for_mode(app.state.dark_mode);

    // Base layer: theme background; widgets above only set foregrounds.
    f.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.text)),
        area,
    );

    match &app.phase {
        AppPhase::Loading => render_loading(f, area, &palette),
        AppPhase::Failed(message) => render_load_failure(message, f, area, &palette),
        AppPhase::Disclaimer => render_disclaimer(f, area, click_state, &palette),
        AppPhase::Browsing => {
            let Some(catalog) = app.catalog() else {
                return;
            };
            match app.state.view {
                View::Categories => {
                    render_categories(catalog, &app.state, f, area, click_state, &palette)
                }
                View::Careers => {
                    render_careers(catalog, &app.state, f, area, click_state, &palette)
                }
                View::Details => render_details(&app.state, f, area, click_state, &palette),
            }
        }
    }
}

// ── Load phases ────────────────────────────────────────────────────────

fn render_loading(f: &mut Frame, area: Rect, palette: &Palette) {
    let widget = Paragraph::new(Line::from(Span::styled(
        "Loading career data…",
        Style::default().fg(palette.dim),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border)),
    );
    f.render_widget(widget, area);
}

fn render_load_failure(message: &str, f: &mut Frame, area: Rect, palette: &Palette) {
    let lines = vec![
        Line::from(Span::styled(
            "Career data could not be loaded.",
            Style::default()
                .fg(palette.exclude)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(palette.dim),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Reload the page to try again.",
            Style::default().fg(palette.text),
        )),
    ];
    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.exclude))
                .title(" Something went wrong "),
        );
    f.render_widget(widget, area);
}

fn render_disclaimer(
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
    palette: &Palette,
) {
    let mut cl = ClickableList::new();
    cl.push(Line::from(Span::styled(
        "Welcome to Career Explorer",
        Style::default()
            .fg(palette.heading)
            .add_modifier(Modifier::BOLD),
    )));
    cl.push(Line::from(""));
    cl.push(Line::from(Span::styled(
        "Career descriptions, salary figures and education routes in this \
         directory were compiled with the help of AI and may contain \
         inaccuracies.",
        Style::default().fg(palette.text),
    )));
    cl.push(Line::from(Span::styled(
        "Always verify details against official sources before making \
         career decisions.",
        Style::default().fg(palette.text),
    )));
    cl.push(Line::from(""));
    cl.push_clickable(
        Line::from(Span::styled(
            "[Enter] I understand — start exploring",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        ACCEPT_DISCLAIMER,
    );

    let mut cs = click_state.borrow_mut();
    cl.register_targets(area, &mut cs, 1, 1, 0, area.width.saturating_sub(2));
    let widget = Paragraph::new(cl.into_lines())
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.accent))
                .title(" Before you explore "),
        );
    f.render_widget(widget, area);
}

// ── Categories view ────────────────────────────────────────────────────

fn render_categories(
    catalog: &Catalog,
    state: &ExplorerState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
    palette: &Palette,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // header
            Constraint::Length(3), // search bar
            Constraint::Min(4),    // grid or search results
        ])
        .split(area);

    render_header(catalog, f, chunks[0], click_state, palette);
    render_search_bar(state, f, chunks[1], click_state, palette);

    let query = state.search_query();
    if query.is_empty() {
        render_category_grid(catalog, f, chunks[2], click_state, palette);
    } else {
        render_search_results(catalog, &query, f, chunks[2], click_state, palette);
    }
}

fn render_header(
    catalog: &Catalog,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
    palette: &Palette,
) {
    let is_narrow = is_narrow_layout(area.width);
    let title = if is_narrow {
        format!("Career Explorer ({})", catalog.total_careers())
    } else {
        format!(
            "Career Explorer ({} Careers Found For Now)",
            catalog.total_careers()
        )
    };

    let mut cl = ClickableList::new();
    cl.push(Line::from(Span::styled(
        title,
        Style::default()
            .fg(palette.heading)
            .add_modifier(Modifier::BOLD),
    )));
    if let Some(generated_at) = catalog.generated_at() {
        cl.push(Line::from(Span::styled(
            format!("Last updated: {generated_at}"),
            Style::default().fg(palette.dim),
        )));
    }
    cl.push_clickable(
        Line::from(Span::styled(
            "[D] Toggle dark mode",
            Style::default().fg(palette.dim),
        )),
        TOGGLE_DARK_MODE,
    );

    let mut cs = click_state.borrow_mut();
    cl.register_targets(area, &mut cs, 1, 0, 0, 0);
    let widget = Paragraph::new(cl.into_lines()).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(palette.border)),
    );
    f.render_widget(widget, area);
}

fn render_search_bar(
    state: &ExplorerState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
    palette: &Palette,
) {
    let line = if state.input_mode == InputMode::Search {
        Line::from(vec![
            Span::styled("> ", Style::default().fg(palette.accent)),
            Span::styled(state.search_input.clone(), Style::default().fg(palette.text)),
            Span::styled("▌", Style::default().fg(palette.accent)),
        ])
    } else if state.search_input.is_empty() {
        Line::from(Span::styled(
            "Search all careers across categories (press /)",
            Style::default().fg(palette.dim),
        ))
    } else {
        Line::from(vec![
            Span::styled("Search: ", Style::default().fg(palette.dim)),
            Span::styled(state.search_input.clone(), Style::default().fg(palette.text)),
        ])
    };

    let border_color = if state.input_mode == InputMode::Search {
        palette.accent
    } else {
        palette.border
    };
    let widget = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(" Search "),
    );
    f.render_widget(widget, area);

    // The whole bar focuses the search input.
    let mut cs = click_state.borrow_mut();
    for row in area.y..area.y + area.height {
        cs.add_row_target(area, row, FOCUS_SEARCH);
    }
}

fn render_category_grid(
    catalog: &Catalog,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
    palette: &Palette,
) {
    let is_narrow = is_narrow_layout(area.width);
    let mut cl = ClickableList::new();

    for (index, (name, entries)) in catalog
        .categories()
        .take(SELECT_CATEGORY_SLOTS as usize)
        .enumerate()
    {
        let mut card = vec![
            Line::from(vec![
                Span::styled(
                    format!("[{}] ", index + 1),
                    Style::default()
                        .fg(palette.accent)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    name.to_string(),
                    Style::default()
                        .fg(palette.heading)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {} Careers Available", entries.len()),
                    Style::default().fg(palette.dim),
                ),
            ]),
        ];
        if !is_narrow {
            card.push(Line::from(Span::styled(
                category_description(name),
                Style::default().fg(palette.text),
            )));
        }
        card.push(Line::from(""));
        cl.push_clickable_block(card, SELECT_CATEGORY_BASE + index as u16);
    }

    let mut cs = click_state.borrow_mut();
    cl.register_targets(area, &mut cs, 1, 1, 0, area.width.saturating_sub(2));
    let widget = Paragraph::new(cl.into_lines())
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border))
                .title(" Categories "),
        );
    f.render_widget(widget, area);
}

/// Short blurb for the known category names, with a generic fallback.
fn category_description(name: &str) -> String {
    match name {
        "Technology" => {
            "Software development, cybersecurity, data science and the systems \
             shaping our digital future."
                .to_string()
        }
        "Healthcare" => {
            "Careers dedicated to improving lives through medical care, research \
             and mental health."
                .to_string()
        }
        "Engineering" => {
            "Civil, mechanical, electrical and environmental engineering careers \
             that solve real-world challenges."
                .to_string()
        }
        "Business" => {
            "Management, finance, marketing, consulting and entrepreneurship."
                .to_string()
        }
        "Education" => {
            "Teaching, curriculum development and academic research."
                .to_string()
        }
        "Arts" | "Creative" => {
            "Visual arts, performing arts, design, writing and creative media."
                .to_string()
        }
        "Science" => {
            "Research and discovery in biology, chemistry, physics and emerging \
             fields."
                .to_string()
        }
        "Finance" => {
            "Banking, financial planning, investment analysis and fintech."
                .to_string()
        }
        other => format!(
            "Explore diverse career opportunities in {}.",
            other.to_lowercase()
        ),
    }
}

fn render_search_results(
    catalog: &Catalog,
    query: &str,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
    palette: &Palette,
) {
    let hits = global_search(catalog, query);
    let mut cl = ClickableList::new();

    if hits.is_empty() {
        cl.push(Line::from(Span::styled(
            format!("No careers found for \"{query}\""),
            Style::default().fg(palette.text),
        )));
        cl.push(Line::from(Span::styled(
            "Try terms like \"engineer\", \"doctor\", \"teacher\" or \"software\".",
            Style::default().fg(palette.dim),
        )));
    } else {
        let plural = if hits.len() == 1 { "" } else { "s" };
        cl.push(Line::from(Span::styled(
            format!("Found {} career{} matching \"{}\"", hits.len(), plural, query),
            Style::default()
                .fg(palette.heading)
                .add_modifier(Modifier::BOLD),
        )));
    }
    cl.push_clickable(
        Line::from(Span::styled(
            "[Esc] Clear search",
            Style::default().fg(palette.dim),
        )),
        CLEAR_SEARCH,
    );
    cl.push(Line::from(""));

    for (index, hit) in hits.iter().take(SEARCH_RESULT_SLOTS as usize).enumerate() {
        let mut name_spans = highlight_spans(
            hit.entry.name(),
            query,
            Style::default()
                .fg(palette.heading)
                .add_modifier(Modifier::BOLD),
            palette.highlight,
        );
        name_spans.push(Span::styled(
            format!("  ({})", hit.category),
            Style::default().fg(palette.dim),
        ));

        let description = entry_description(hit.entry);

        let mut card = vec![Line::from(name_spans)];
        card.push(Line::from(highlight_spans(
            &description,
            query,
            Style::default().fg(palette.text),
            palette.highlight,
        )));
        card.extend(salary_lines(hit.entry, palette));
        card.push(Line::from(""));
        cl.push_clickable_block(card, SEARCH_RESULT_BASE + index as u16);
    }

    let mut cs = click_state.borrow_mut();
    cl.register_targets(area, &mut cs, 1, 1, 0, area.width.saturating_sub(2));
    let widget = Paragraph::new(cl.into_lines())
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.accent))
                .title(" Search results "),
        );
    f.render_widget(widget, area);
}

// ── Careers view ───────────────────────────────────────────────────────

fn render_careers(
    catalog: &Catalog,
    state: &ExplorerState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
    palette: &Palette,
) {
    let Some(category) = state.current_category.as_deref() else {
        return;
    };
    let entries = catalog.entries(category).unwrap_or(&[]);
    let visible = visible_careers(entries, &state.filters, state.salary_sort);

    let is_narrow = is_narrow_layout(area.width);
    let filter_height = if is_narrow { 3 } else { 4 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),             // header
            Constraint::Length(filter_height), // filter / sort bar
            Constraint::Min(4),                // career cards
        ])
        .split(area);

    render_careers_header(category, visible.len(), entries.len(), f, chunks[0], click_state, palette);
    render_filter_bar(state, is_narrow, f, chunks[1], click_state, palette);
    render_career_cards(state, &visible, f, chunks[2], click_state, palette);
}

fn render_careers_header(
    category: &str,
    shown: usize,
    total: usize,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
    palette: &Palette,
) {
    let mut cl = ClickableList::new();
    cl.push_clickable(
        Line::from(Span::styled(
            "[Q] ← Back to Categories",
            Style::default().fg(palette.accent),
        )),
        BACK_TO_CATEGORIES,
    );
    cl.push(Line::from(Span::styled(
        format!("{category} Careers"),
        Style::default()
            .fg(palette.heading)
            .add_modifier(Modifier::BOLD),
    )));
    cl.push(Line::from(Span::styled(
        format!("{shown} of {total} careers shown"),
        Style::default().fg(palette.dim),
    )));

    let mut cs = click_state.borrow_mut();
    cl.register_targets(area, &mut cs, 1, 0, 0, 0);
    let widget = Paragraph::new(cl.into_lines()).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(palette.border)),
    );
    f.render_widget(widget, area);
}

fn render_filter_bar(
    state: &ExplorerState,
    is_narrow: bool,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
    palette: &Palette,
) {
    let mut constraints = vec![Constraint::Length(1), Constraint::Length(1)];
    if !is_narrow {
        constraints.push(Constraint::Length(1)); // hint
        constraints.push(Constraint::Length(1)); // summary
    } else {
        constraints.push(Constraint::Length(1)); // summary
    }
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let mut cs = click_state.borrow_mut();

    // Pathway toggles: one tab per tag, styled by its tri-state.
    let mut tags_bar = TabBar::new("│");
    for tag in ALL_TAGS {
        let included = state.filters.include.contains(tag);
        let excluded = state.filters.exclude.contains(tag);
        let (marker, style) = if included {
            ("✓ ", Style::default().fg(palette.include).add_modifier(Modifier::BOLD))
        } else if excluded {
            ("✗ ", Style::default().fg(palette.exclude).add_modifier(Modifier::BOLD))
        } else {
            ("", Style::default().fg(palette.text))
        };
        let label = if is_narrow {
            // Shorten to the shortcut key and marker on small screens.
            format!("{marker}[{}]", tag.key().to_uppercase())
        } else {
            format!("{marker}[{}] {}", tag.key().to_uppercase(), tag.label())
        };
        tags_bar = tags_bar.tab(label, style, TOGGLE_FILTER_BASE + tag.index() as u16);
    }
    tags_bar.render(f, rows[0], &mut cs);

    // Sort toggle, plus clear-filters when any filter is active.
    let sort_style = if state.salary_sort == SalarySort::None {
        Style::default().fg(palette.text)
    } else {
        Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)
    };
    let sort_label = match state.salary_sort {
        SalarySort::None => format!("[S] {}", state.salary_sort.label()),
        SalarySort::Ascending => format!("[S] {} ↑", state.salary_sort.label()),
        SalarySort::Descending => format!("[S] {} ↓", state.salary_sort.label()),
    };
    let mut sort_bar = TabBar::new("│").tab(sort_label, sort_style, TOGGLE_SALARY_SORT);
    if state.filters.is_active() {
        sort_bar = sort_bar.tab(
            "[X] Clear all filters",
            Style::default().fg(palette.exclude),
            CLEAR_FILTERS,
        );
    }
    sort_bar.render(f, rows[1], &mut cs);

    let mut next_row = 2;
    if !is_narrow {
        let hint = Paragraph::new(Line::from(Span::styled(
            "tap a pathway to cycle: include → exclude → off",
            Style::default().fg(palette.dim),
        )));
        f.render_widget(hint, rows[next_row]);
        next_row += 1;
    }

    // Active-filter summary.
    let mut summary_spans: Vec<Span> = Vec::new();
    let included: Vec<&str> = state.filters.include.iter().map(|tag| tag.label()).collect();
    let excluded: Vec<&str> = state.filters.exclude.iter().map(|tag| tag.label()).collect();
    if !included.is_empty() {
        summary_spans.push(Span::styled(
            format!("Showing only: {}", included.join(", ")),
            Style::default().fg(palette.include),
        ));
    }
    if !excluded.is_empty() {
        if !summary_spans.is_empty() {
            summary_spans.push(Span::styled("  ", Style::default()));
        }
        summary_spans.push(Span::styled(
            format!("Hiding: {}", excluded.join(", ")),
            Style::default().fg(palette.exclude),
        ));
    }
    if !summary_spans.is_empty() {
        f.render_widget(Paragraph::new(Line::from(summary_spans)), rows[next_row]);
    }
}

fn render_career_cards(
    state: &ExplorerState,
    visible: &[&CareerEntry],
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
    palette: &Palette,
) {
    let mut cs = click_state.borrow_mut();

    if visible.is_empty() {
        let mut cl = ClickableList::new();
        if state.filters.is_active() {
            cl.push(Line::from(Span::styled(
                "No careers match your current filters.",
                Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
            )));
            cl.push(Line::from(""));
            cl.push_clickable(
                Line::from(Span::styled(
                    "[X] Clear all filters",
                    Style::default().fg(palette.accent),
                )),
                CLEAR_FILTERS,
            );
        } else {
            cl.push(Line::from(Span::styled(
                "No careers available.",
                Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
            )));
            cl.push(Line::from(Span::styled(
                "Please try refreshing the page.",
                Style::default().fg(palette.dim),
            )));
        }
        cl.register_targets(area, &mut cs, 1, 1, 0, 0);
        let widget = Paragraph::new(cl.into_lines()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border))
                .title(" No matches "),
        );
        f.render_widget(widget, area);
        return;
    }

    let mut cl = ClickableList::new();
    if state.careers_scroll > 0 {
        cl.push_clickable(
            Line::from(Span::styled(
                format!("▲ {} earlier", state.careers_scroll),
                Style::default().fg(palette.dim),
            )),
            SCROLL_UP,
        );
    }

    for (offset, entry) in visible.iter().skip(state.careers_scroll).enumerate() {
        let index = state.careers_scroll + offset;
        if index >= SELECT_CAREER_SLOTS as usize {
            break;
        }
        let number = if offset < 9 {
            format!("[{}] ", offset + 1)
        } else {
            " •  ".to_string()
        };
        let description = entry_description(entry);

        let mut card = vec![Line::from(vec![
            Span::styled(
                number,
                Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                entry.name().to_string(),
                Style::default()
                    .fg(palette.heading)
                    .add_modifier(Modifier::BOLD),
            ),
        ])];
        card.push(Line::from(Span::styled(
            description,
            Style::default().fg(palette.text),
        )));
        card.extend(salary_lines(entry, palette));
        card.push(Line::from(""));
        cl.push_clickable_block(card, SELECT_CAREER_BASE + index as u16);
    }

    cl.register_targets(area, &mut cs, 1, 1, 0, area.width.saturating_sub(2));
    let widget = Paragraph::new(cl.into_lines())
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border))
                .title(" Careers (↑/↓ scroll) "),
        );
    f.render_widget(widget, area);

    // Border rows double as scroll controls.
    cs.add_row_target(area, area.y, SCROLL_UP);
    cs.add_row_target(area, area.y + area.height.saturating_sub(1), SCROLL_DOWN);
}

/// Card blurb: stubs invite a tap, structured entries without a brief
/// description say so.
fn entry_description(entry: &CareerEntry) -> String {
    match entry.record() {
        None => "Tap to view details".to_string(),
        Some(record) => record
            .brief_description
            .clone()
            .unwrap_or_else(|| "No description available".to_string()),
    }
}

/// Salary rendering shared by cards and search results.
fn salary_lines(entry: &CareerEntry, palette: &Palette) -> Vec<Line<'static>> {
    let label = Span::styled("Salary: ", Style::default().fg(palette.dim));
    match format_salary(entry) {
        SalaryDisplay::NotSpecified => vec![Line::from(vec![
            label,
            Span::styled("Not specified", Style::default().fg(palette.dim)),
        ])],
        SalaryDisplay::Dual { global, local } => vec![
            Line::from(vec![
                Span::styled("Global: ", Style::default().fg(palette.dim)),
                Span::styled(global, Style::default().fg(palette.include)),
            ]),
            Line::from(vec![
                Span::styled("Local:  ", Style::default().fg(palette.dim)),
                Span::styled(local, Style::default().fg(palette.include)),
            ]),
        ],
        SalaryDisplay::Converted(text) => vec![Line::from(vec![
            label,
            Span::styled(text, Style::default().fg(palette.include)),
            Span::styled(" (converted from USD)", Style::default().fg(palette.dim)),
        ])],
        SalaryDisplay::Plain(text) => vec![Line::from(vec![
            label,
            Span::styled(text, Style::default().fg(palette.include)),
        ])],
        SalaryDisplay::UsdFallback(text) => vec![Line::from(vec![
            label,
            Span::styled(text, Style::default().fg(palette.dim)),
        ])],
    }
}

// ── Details view ───────────────────────────────────────────────────────

fn render_details(
    state: &ExplorerState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
    palette: &Palette,
) {
    let Some(selection) = &state.details else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(4)])
        .split(area);

    let mut cl = ClickableList::new();
    cl.push_clickable(
        Line::from(Span::styled(
            format!("[Q] ← Back to {} Careers", selection.category),
            Style::default().fg(palette.accent),
        )),
        BACK_TO_CAREERS,
    );
    cl.push_clickable(
        Line::from(vec![
            Span::styled("[H] Categories", Style::default().fg(palette.accent)),
            Span::styled(
                format!(" → {} → {}", selection.category, selection.name),
                Style::default().fg(palette.dim),
            ),
        ]),
        BREADCRUMB_HOME,
    );

    {
        let mut cs = click_state.borrow_mut();
        cl.register_targets(chunks[0], &mut cs, 1, 0, 0, 0);
    }
    let nav = Paragraph::new(cl.into_lines()).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(palette.border)),
    );
    f.render_widget(nav, chunks[0]);

    let lines = details_lines(selection, palette);
    let body = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((state.details_scroll as u16, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border))
                .title(format!(" {} (↑/↓ scroll) ", selection.name)),
        );
    f.render_widget(body, chunks[1]);

    let mut cs = click_state.borrow_mut();
    cs.add_row_target(chunks[1], chunks[1].y, SCROLL_UP);
    cs.add_row_target(
        chunks[1],
        chunks[1].y + chunks[1].height.saturating_sub(1),
        SCROLL_DOWN,
    );
}

/// Number of logical lines the details body renders; used to bound
/// scrolling.
pub fn details_line_count(selection: &DetailsSelection) -> usize {
    details_lines(selection, &Palette::for_mode(false)).len()
}

/// Build the full details body. Every present optional field renders a
/// section; a record-less selection renders the stub notice instead.
pub fn details_lines(selection: &DetailsSelection, palette: &Palette) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = Vec::new();

    let Some(record) = &selection.record else {
        lines.push(Line::from(Span::styled(
            "Detailed information for this career is not available yet.",
            Style::default().fg(palette.text),
        )));
        lines.push(Line::from(Span::styled(
            "This career was loaded from a basic list; richer details will \
             appear once the dataset includes them.",
            Style::default().fg(palette.dim),
        )));
        return lines;
    };

    let heading = |text: &'static str| {
        Line::from(Span::styled(
            text,
            Style::default()
                .fg(palette.heading)
                .add_modifier(Modifier::BOLD),
        ))
    };
    let dim = |text: String| Line::from(Span::styled(text, Style::default().fg(palette.dim)));
    let body = |text: String| Line::from(Span::styled(text, Style::default().fg(palette.text)));

    lines.push(heading("Overview"));
    lines.push(body(
        record
            .brief_description
            .clone()
            .unwrap_or_else(|| "No description available".to_string()),
    ));
    lines.push(Line::from(""));

    lines.push(heading("Annual Salary Range"));
    lines.extend(salary_lines(&CareerEntry::Full(record.clone()), palette));
    lines.push(dim(
        "*Salaries vary by location, experience, and company size".to_string(),
    ));
    lines.push(Line::from(""));

    lines.push(heading("Typical Working Hours"));
    lines.push(body(
        record
            .typical_working_hours
            .clone()
            .unwrap_or_else(|| "Not specified".to_string()),
    ));
    lines.push(Line::from(""));

    if !record.responsibilities.is_empty() {
        lines.push(heading("Key Responsibilities"));
        for item in &record.responsibilities {
            lines.push(body(format!("• {item}")));
        }
        lines.push(Line::from(""));
    }

    if !record.skills.is_empty() {
        lines.push(heading("Required Skills"));
        lines.push(body(record.skills.join(", ")));
        lines.push(Line::from(""));
    }

    if let Some(pathways) = &record.education_pathways {
        lines.push(heading("Education Pathways"));
        match pathways {
            EducationPathways::Routes(routes) => {
                for route in routes {
                    let mut title_spans = vec![Span::styled(
                        format!("▸ {}", route.route),
                        Style::default()
                            .fg(palette.text)
                            .add_modifier(Modifier::BOLD),
                    )];
                    if !route.difficulty.is_empty() {
                        title_spans.push(Span::styled(
                            format!("  ({})", route.difficulty.to_uppercase()),
                            Style::default().fg(palette.accent),
                        ));
                    }
                    lines.push(Line::from(title_spans));
                    if !route.description.is_empty() {
                        lines.push(body(route.description.clone()));
                    }
                    if !route.duration.is_empty() {
                        lines.push(dim(format!("Duration: {}", route.duration)));
                    }
                    if !route.requirements.is_empty() {
                        lines.push(dim("Requirements:".to_string()));
                        for requirement in &route.requirements {
                            lines.push(body(format!("  • {requirement}")));
                        }
                    }
                    if !route.alternative_paths.is_empty() {
                        lines.push(dim("Alternative paths:".to_string()));
                        for alternative in &route.alternative_paths {
                            lines.push(body(format!("  • {alternative}")));
                        }
                    }
                    lines.push(Line::from(""));
                }
            }
            EducationPathways::Named(named) => {
                let slots: [(&str, &Option<NamedPathway>); 4] = [
                    ("Formal Education", &named.formal),
                    ("Certificate/Bootcamp", &named.certificate),
                    ("Self-Taught", &named.self_taught),
                    ("Alternative Path", &named.alternative),
                ];
                for (label, slot) in slots {
                    let Some(pathway) = slot else {
                        continue;
                    };
                    let mut title_spans = vec![Span::styled(
                        format!("▸ {label}"),
                        Style::default()
                            .fg(palette.text)
                            .add_modifier(Modifier::BOLD),
                    )];
                    if !pathway.difficulty.is_empty() {
                        title_spans.push(Span::styled(
                            format!("  ({})", pathway.difficulty),
                            Style::default().fg(palette.accent),
                        ));
                    }
                    lines.push(Line::from(title_spans));
                    if !pathway.level.is_empty() {
                        lines.push(dim(format!("Level: {}", pathway.level)));
                    }
                    if !pathway.description.is_empty() {
                        lines.push(body(pathway.description.clone()));
                    }
                    lines.push(Line::from(""));
                }
            }
        }
    }

    if !record.pros.is_empty() {
        lines.push(heading("Advantages"));
        for item in &record.pros {
            lines.push(Line::from(Span::styled(
                format!("+ {item}"),
                Style::default().fg(palette.include),
            )));
        }
        lines.push(Line::from(""));
    }

    if !record.cons.is_empty() {
        lines.push(heading("Challenges"));
        for item in &record.cons {
            lines.push(Line::from(Span::styled(
                format!("- {item}"),
                Style::default().fg(palette.exclude),
            )));
        }
        lines.push(Line::from(""));
    }

    if let Some(environment) = &record.work_environment {
        lines.push(heading("Work Environment"));
        lines.push(body(environment.clone()));
        lines.push(Line::from(""));
    }

    if !record.related_careers.is_empty() {
        lines.push(heading("Related Careers"));
        lines.push(body(record.related_careers.join(", ")));
    }

    lines
}

/// Style the case-insensitive occurrences of `query` inside `text`.
fn highlight_spans(
    text: &str,
    query: &str,
    base: Style,
    highlighted: Style,
) -> Vec<Span<'static>> {
    highlight(text, query)
        .into_iter()
        .map(|(segment, is_match)| {
            Span::styled(segment, if is_match { highlighted } else { base })
        })
        .collect()
}
