//! Career Explorer — browse, search and filter a career directory.
//!
//! [`ExplorerApp`] owns the catalog and the session state and is the
//! single place input events are consumed. Every consumed event mutates
//! state; all visible data is re-derived from scratch on the next draw.

pub mod actions;
pub mod logic;
pub mod prefs;
pub mod render;
pub mod seo;
pub mod state;

use crate::catalog::{Catalog, CatalogError, CareerRecord};
use crate::input::InputEvent;

use actions::*;
use state::{
    DetailsSelection, ExplorerState, InputMode, PathwayTag, View, ALL_TAGS,
};

/// Application lifecycle. The catalog load is the only suspension point;
/// nothing interactive exists before it resolves, and a failed load is
/// terminal for the session.
#[derive(Clone, Debug, PartialEq)]
pub enum AppPhase {
    Loading,
    /// Catalog ready, waiting for first-visit disclaimer acceptance.
    Disclaimer,
    Browsing,
    Failed(String),
}

pub struct ExplorerApp {
    catalog: Option<Catalog>,
    pub state: ExplorerState,
    pub phase: AppPhase,
}

impl ExplorerApp {
    pub fn new() -> Self {
        Self {
            catalog: None,
            state: ExplorerState::new(),
            phase: AppPhase::Loading,
        }
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        self.catalog.as_ref()
    }

    /// Complete the startup load. `consented` reflects the stored
    /// disclaimer flag; first-time visitors see the disclaimer overlay
    /// before anything is interactive.
    pub fn finish_load(&mut self, result: Result<Catalog, CatalogError>, consented: bool) {
        match result {
            Ok(catalog) => {
                let meta = seo::categories_meta(catalog.total_careers());
                self.catalog = Some(catalog);
                if consented {
                    self.phase = AppPhase::Browsing;
                    seo::apply(&meta);
                } else {
                    self.phase = AppPhase::Disclaimer;
                }
            }
            Err(err) => {
                self.phase = AppPhase::Failed(err.to_string());
            }
        }
    }

    /// Handle an input event. Returns true if the event was consumed.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        match self.phase {
            AppPhase::Loading | AppPhase::Failed(_) => false,
            AppPhase::Disclaimer => self.handle_disclaimer(event),
            AppPhase::Browsing => self.handle_browsing(event),
        }
    }

    // ── Disclaimer gate ───────────────────────────────────────────────

    fn handle_disclaimer(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Click(ACCEPT_DISCLAIMER) | InputEvent::Enter => {
                prefs::record_consent();
                self.phase = AppPhase::Browsing;
                let total = self
                    .catalog
                    .as_ref()
                    .map(|catalog| catalog.total_careers())
                    .unwrap_or(0);
                seo::apply(&seo::categories_meta(total));
                true
            }
            _ => false,
        }
    }

    // ── Browsing dispatch ─────────────────────────────────────────────

    fn handle_browsing(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Click(id) => self.handle_click(*id),
            _ if self.state.input_mode == InputMode::Search => self.handle_search_key(event),
            other => self.handle_browse_key(other),
        }
    }

    fn handle_click(&mut self, id: u16) -> bool {
        if id == TOGGLE_DARK_MODE {
            return self.toggle_dark_mode();
        }
        match self.state.view {
            View::Categories => match id {
                FOCUS_SEARCH => {
                    self.state.input_mode = InputMode::Search;
                    true
                }
                CLEAR_SEARCH => {
                    self.state.search_input.clear();
                    true
                }
                id if (SELECT_CATEGORY_BASE..SELECT_CATEGORY_BASE + SELECT_CATEGORY_SLOTS)
                    .contains(&id) =>
                {
                    self.select_category((id - SELECT_CATEGORY_BASE) as usize)
                }
                id if (SEARCH_RESULT_BASE..SEARCH_RESULT_BASE + SEARCH_RESULT_SLOTS)
                    .contains(&id) =>
                {
                    self.open_search_result((id - SEARCH_RESULT_BASE) as usize)
                }
                _ => false,
            },
            View::Careers => match id {
                BACK_TO_CATEGORIES => self.back_to_categories(),
                TOGGLE_SALARY_SORT => self.toggle_salary_sort(),
                CLEAR_FILTERS => self.clear_filters(),
                SCROLL_UP => self.scroll_careers(-1),
                SCROLL_DOWN => self.scroll_careers(1),
                id if (TOGGLE_FILTER_BASE..TOGGLE_FILTER_BASE + 4).contains(&id) => {
                    self.toggle_filter(ALL_TAGS[(id - TOGGLE_FILTER_BASE) as usize])
                }
                id if (SELECT_CAREER_BASE..SELECT_CAREER_BASE + SELECT_CAREER_SLOTS)
                    .contains(&id) =>
                {
                    self.select_visible_career((id - SELECT_CAREER_BASE) as usize)
                }
                _ => false,
            },
            View::Details => match id {
                BACK_TO_CAREERS => self.back_to_careers(),
                BREADCRUMB_HOME => self.back_to_categories(),
                SCROLL_UP => self.scroll_details(-1),
                SCROLL_DOWN => self.scroll_details(1),
                _ => false,
            },
        }
    }

    fn handle_search_key(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Char(ch) if !ch.is_control() => {
                self.state.search_input.push(*ch);
                true
            }
            InputEvent::Backspace => {
                self.state.search_input.pop();
                true
            }
            InputEvent::Enter | InputEvent::Escape => {
                self.state.input_mode = InputMode::Browse;
                true
            }
            _ => false,
        }
    }

    fn handle_browse_key(&mut self, event: &InputEvent) -> bool {
        match self.state.view {
            View::Categories => match event {
                InputEvent::Char('/') => {
                    self.state.input_mode = InputMode::Search;
                    true
                }
                InputEvent::Char('d') => self.toggle_dark_mode(),
                InputEvent::Escape if !self.state.search_input.is_empty() => {
                    self.state.search_input.clear();
                    true
                }
                InputEvent::Char(digit) if digit.is_ascii_digit() && *digit != '0' => {
                    self.select_category(*digit as usize - '1' as usize)
                }
                _ => false,
            },
            View::Careers => match event {
                InputEvent::Char('q') | InputEvent::Escape => self.back_to_categories(),
                InputEvent::Char('s') => self.toggle_salary_sort(),
                InputEvent::Char('x') => self.clear_filters(),
                InputEvent::Char('d') => self.toggle_dark_mode(),
                InputEvent::Up => self.scroll_careers(-1),
                InputEvent::Down => self.scroll_careers(1),
                InputEvent::Char(digit) if digit.is_ascii_digit() && *digit != '0' => {
                    let index = self.state.careers_scroll + (*digit as usize - '1' as usize);
                    self.select_visible_career(index)
                }
                InputEvent::Char(key) => match ALL_TAGS.iter().find(|tag| tag.key() == *key) {
                    Some(&tag) => self.toggle_filter(tag),
                    None => false,
                },
                _ => false,
            },
            View::Details => match event {
                InputEvent::Char('q') | InputEvent::Escape => self.back_to_careers(),
                InputEvent::Char('h') => self.back_to_categories(),
                InputEvent::Char('d') => self.toggle_dark_mode(),
                InputEvent::Up => self.scroll_details(-1),
                InputEvent::Down => self.scroll_details(1),
                _ => false,
            },
        }
    }

    // ── Navigation transitions ────────────────────────────────────────

    fn select_category(&mut self, index: usize) -> bool {
        let Some(catalog) = &self.catalog else {
            return false;
        };
        let Some((name, entries)) = catalog.category_at(index) else {
            return false;
        };
        let name = name.to_string();
        let meta = seo::careers_meta(&name, entries.len());
        self.state.current_category = Some(name);
        self.state.view = View::Careers;
        self.state.careers_scroll = 0;
        self.state.input_mode = InputMode::Browse;
        seo::apply(&meta);
        true
    }

    fn back_to_categories(&mut self) -> bool {
        let total = self
            .catalog
            .as_ref()
            .map(|catalog| catalog.total_careers())
            .unwrap_or(0);
        self.state.view = View::Categories;
        self.state.current_category = None;
        self.state.details = None;
        seo::apply(&seo::categories_meta(total));
        true
    }

    fn back_to_careers(&mut self) -> bool {
        let Some(category) = self.state.current_category.clone() else {
            return self.back_to_categories();
        };
        let count = self
            .catalog
            .as_ref()
            .and_then(|catalog| catalog.entries(&category))
            .map(|entries| entries.len())
            .unwrap_or(0);
        self.state.view = View::Careers;
        self.state.details = None;
        seo::apply(&seo::careers_meta(&category, count));
        true
    }

    /// Open details for an index into the currently visible (filtered and
    /// sorted) list. The resolved record is cloned, freezing the details
    /// view against later pipeline changes.
    fn select_visible_career(&mut self, index: usize) -> bool {
        let resolved = {
            let Some(catalog) = &self.catalog else {
                return false;
            };
            let Some(category) = self.state.current_category.as_deref() else {
                return false;
            };
            let Some(entries) = catalog.entries(category) else {
                return false;
            };
            let visible =
                logic::visible_careers(entries, &self.state.filters, self.state.salary_sort);
            let Some(entry) = visible.get(index) else {
                return false;
            };
            (
                category.to_string(),
                entry.name().to_string(),
                entry.record().cloned(),
            )
        };
        self.open_details(resolved.0, resolved.1, resolved.2);
        true
    }

    /// Open details from a global search hit. Search results only carry a
    /// name, so the record is resolved by lookup in the owning category;
    /// a miss degrades to the no-details rendering.
    fn open_search_result(&mut self, index: usize) -> bool {
        let resolved = {
            let Some(catalog) = &self.catalog else {
                return false;
            };
            let query = self.state.search_query();
            let hits = logic::global_search(catalog, &query);
            let Some(hit) = hits.get(index) else {
                return false;
            };
            let record = catalog
                .find_entry(hit.category, hit.entry.name())
                .and_then(|entry| entry.record())
                .cloned();
            (hit.category.to_string(), hit.entry.name().to_string(), record)
        };
        self.state.input_mode = InputMode::Browse;
        self.open_details(resolved.0, resolved.1, resolved.2);
        true
    }

    fn open_details(&mut self, category: String, name: String, record: Option<CareerRecord>) {
        let meta = seo::details_meta(
            &name,
            &category,
            record
                .as_ref()
                .and_then(|record| record.brief_description.as_deref()),
        );
        self.state.current_category = Some(category.clone());
        self.state.details = Some(DetailsSelection {
            category,
            name,
            record,
        });
        self.state.view = View::Details;
        self.state.details_scroll = 0;
        seo::apply(&meta);
    }

    // ── Filter / sort actions ─────────────────────────────────────────

    fn toggle_filter(&mut self, tag: PathwayTag) -> bool {
        logic::toggle_education_filter(&mut self.state.filters, tag);
        self.state.careers_scroll = 0;
        true
    }

    fn toggle_salary_sort(&mut self) -> bool {
        self.state.salary_sort = self.state.salary_sort.cycled();
        self.state.careers_scroll = 0;
        true
    }

    fn clear_filters(&mut self) -> bool {
        self.state.filters.clear();
        self.state.careers_scroll = 0;
        true
    }

    fn toggle_dark_mode(&mut self) -> bool {
        self.state.dark_mode = !self.state.dark_mode;
        prefs::set_dark_mode(self.state.dark_mode);
        true
    }

    // ── Scrolling ─────────────────────────────────────────────────────

    fn scroll_careers(&mut self, delta: i32) -> bool {
        let visible_len = {
            let Some(catalog) = &self.catalog else {
                return false;
            };
            let Some(category) = self.state.current_category.as_deref() else {
                return false;
            };
            catalog
                .entries(category)
                .map(|entries| {
                    logic::visible_careers(entries, &self.state.filters, self.state.salary_sort)
                        .len()
                })
                .unwrap_or(0)
        };
        let scroll = &mut self.state.careers_scroll;
        if delta < 0 {
            *scroll = scroll.saturating_sub(1);
        } else if *scroll + 1 < visible_len {
            *scroll += 1;
        }
        true
    }

    fn scroll_details(&mut self, delta: i32) -> bool {
        let Some(selection) = &self.state.details else {
            return false;
        };
        let line_count = render::details_line_count(selection);
        let scroll = &mut self.state.details_scroll;
        if delta < 0 {
            *scroll = scroll.saturating_sub(1);
        } else if *scroll + 1 < line_count {
            *scroll += 1;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    const TEST_JSON: &str = r#"{
        "Technology": [
            {
                "name": "Dev",
                "briefDescription": "Builds software",
                "salaryRange": {"international": "$50,000 - $80,000", "southAfrica": "R500,000"},
                "educationPathways": [{"route": "University degree", "description": "CS program"}]
            },
            {
                "name": "Hacker",
                "salaryRange": "$30,000",
                "educationPathways": [{"route": "Self-taught"}]
            },
            "Quantum Researcher"
        ],
        "Engineering": [
            {"name": "Civil Engineer", "salaryRange": "$55,000 - $95,000"}
        ]
    }"#;

    fn ready_app() -> ExplorerApp {
        let mut app = ExplorerApp::new();
        app.finish_load(catalog::parse(TEST_JSON), true);
        assert_eq!(app.phase, AppPhase::Browsing);
        app
    }

    fn visible_count(app: &ExplorerApp) -> usize {
        let catalog = app.catalog().unwrap();
        let category = app.state.current_category.as_deref().unwrap();
        let entries = catalog.entries(category).unwrap();
        logic::visible_careers(entries, &app.state.filters, app.state.salary_sort).len()
    }

    #[test]
    fn starts_in_loading_phase() {
        let app = ExplorerApp::new();
        assert_eq!(app.phase, AppPhase::Loading);
    }

    #[test]
    fn input_before_load_is_ignored() {
        let mut app = ExplorerApp::new();
        assert!(!app.handle_input(&InputEvent::Char('1')));
        assert!(!app.handle_input(&InputEvent::Click(SELECT_CATEGORY_BASE)));
    }

    #[test]
    fn failed_load_is_terminal() {
        let mut app = ExplorerApp::new();
        app.finish_load(catalog::parse("not json"), true);
        assert!(matches!(app.phase, AppPhase::Failed(_)));
        assert!(!app.handle_input(&InputEvent::Char('1')));
    }

    #[test]
    fn disclaimer_gates_interaction_until_accepted() {
        let mut app = ExplorerApp::new();
        app.finish_load(catalog::parse(TEST_JSON), false);
        assert_eq!(app.phase, AppPhase::Disclaimer);

        // Browsing input is not consumed while the gate is up.
        assert!(!app.handle_input(&InputEvent::Char('1')));
        assert_eq!(app.state.view, View::Categories);

        assert!(app.handle_input(&InputEvent::Click(ACCEPT_DISCLAIMER)));
        assert_eq!(app.phase, AppPhase::Browsing);
        assert!(app.handle_input(&InputEvent::Char('1')));
        assert_eq!(app.state.view, View::Careers);
    }

    #[test]
    fn select_category_by_key_and_back() {
        let mut app = ready_app();
        assert!(app.handle_input(&InputEvent::Char('1')));
        assert_eq!(app.state.view, View::Careers);
        assert_eq!(app.state.current_category.as_deref(), Some("Technology"));

        assert!(app.handle_input(&InputEvent::Char('q')));
        assert_eq!(app.state.view, View::Categories);
        assert!(app.state.current_category.is_none());
    }

    #[test]
    fn select_category_by_click() {
        let mut app = ready_app();
        assert!(app.handle_input(&InputEvent::Click(SELECT_CATEGORY_BASE + 1)));
        assert_eq!(app.state.current_category.as_deref(), Some("Engineering"));
    }

    #[test]
    fn out_of_range_category_is_ignored() {
        let mut app = ready_app();
        assert!(!app.handle_input(&InputEvent::Char('9')));
        assert_eq!(app.state.view, View::Categories);
    }

    #[test]
    fn open_details_and_navigate_back() {
        let mut app = ready_app();
        app.handle_input(&InputEvent::Char('1'));
        assert!(app.handle_input(&InputEvent::Click(SELECT_CAREER_BASE)));
        assert_eq!(app.state.view, View::Details);
        let selection = app.state.details.as_ref().unwrap();
        assert_eq!(selection.name, "Dev");
        assert!(selection.record.is_some());

        // Back returns to the careers list with the category preserved.
        assert!(app.handle_input(&InputEvent::Char('q')));
        assert_eq!(app.state.view, View::Careers);
        assert_eq!(app.state.current_category.as_deref(), Some("Technology"));
        assert!(app.state.details.is_none());
    }

    #[test]
    fn breadcrumb_home_from_details() {
        let mut app = ready_app();
        app.handle_input(&InputEvent::Char('1'));
        app.handle_input(&InputEvent::Click(SELECT_CAREER_BASE));
        assert!(app.handle_input(&InputEvent::Click(BREADCRUMB_HOME)));
        assert_eq!(app.state.view, View::Categories);
        assert!(app.state.current_category.is_none());
    }

    #[test]
    fn stub_career_opens_with_no_record() {
        let mut app = ready_app();
        app.handle_input(&InputEvent::Char('1'));
        // Visible order without filters: Dev, Hacker, Quantum Researcher.
        assert!(app.handle_input(&InputEvent::Char('3')));
        let selection = app.state.details.as_ref().unwrap();
        assert_eq!(selection.name, "Quantum Researcher");
        assert!(selection.record.is_none());
    }

    #[test]
    fn pathway_filter_cycle_end_to_end() {
        let mut app = ready_app();
        app.handle_input(&InputEvent::Char('1'));
        assert_eq!(visible_count(&app), 3);

        // include formal → only Dev
        assert!(app.handle_input(&InputEvent::Char('f')));
        assert_eq!(visible_count(&app), 1);

        // exclude formal → Hacker and the stub
        assert!(app.handle_input(&InputEvent::Char('f')));
        assert_eq!(visible_count(&app), 2);

        // neutral again → everything
        assert!(app.handle_input(&InputEvent::Char('f')));
        assert_eq!(visible_count(&app), 3);
    }

    #[test]
    fn filter_toggle_via_click() {
        let mut app = ready_app();
        app.handle_input(&InputEvent::Char('1'));
        let formal = TOGGLE_FILTER_BASE + PathwayTag::Formal.index() as u16;
        assert!(app.handle_input(&InputEvent::Click(formal)));
        assert!(app.state.filters.include.contains(PathwayTag::Formal));
        assert_eq!(visible_count(&app), 1);
    }

    #[test]
    fn filters_persist_across_navigation() {
        let mut app = ready_app();
        app.handle_input(&InputEvent::Char('1'));
        app.handle_input(&InputEvent::Char('f'));
        app.handle_input(&InputEvent::Char('s'));
        app.handle_input(&InputEvent::Char('q'));
        app.handle_input(&InputEvent::Char('2'));

        assert!(app.state.filters.include.contains(PathwayTag::Formal));
        assert_eq!(app.state.salary_sort, state::SalarySort::Ascending);
    }

    #[test]
    fn details_are_frozen_against_filter_changes() {
        let mut app = ready_app();
        app.handle_input(&InputEvent::Char('1'));
        app.handle_input(&InputEvent::Char('1')); // open Dev
        let before = app.state.details.clone().unwrap();

        // Excluding formal would hide Dev from the list, but the open
        // details keep showing the frozen record.
        app.state.filters.exclude.insert(PathwayTag::Formal);
        assert_eq!(app.state.details.as_ref(), Some(&before));
    }

    #[test]
    fn salary_sort_cycles_and_resets_scroll() {
        let mut app = ready_app();
        app.handle_input(&InputEvent::Char('1'));
        app.state.careers_scroll = 2;
        assert!(app.handle_input(&InputEvent::Char('s')));
        assert_eq!(app.state.salary_sort, state::SalarySort::Ascending);
        assert_eq!(app.state.careers_scroll, 0);

        app.handle_input(&InputEvent::Char('s'));
        assert_eq!(app.state.salary_sort, state::SalarySort::Descending);
        app.handle_input(&InputEvent::Char('s'));
        assert_eq!(app.state.salary_sort, state::SalarySort::None);
    }

    #[test]
    fn digit_selection_respects_sort_order() {
        let mut app = ready_app();
        app.handle_input(&InputEvent::Char('1'));
        app.handle_input(&InputEvent::Char('s')); // ascending
        // Ascending: Hacker ($30k), Dev ($65k mid), stub last.
        app.handle_input(&InputEvent::Char('1'));
        assert_eq!(app.state.details.as_ref().unwrap().name, "Hacker");
    }

    #[test]
    fn clear_filters_restores_full_list() {
        let mut app = ready_app();
        app.handle_input(&InputEvent::Char('1'));
        app.handle_input(&InputEvent::Char('f'));
        app.handle_input(&InputEvent::Char('t'));
        assert!(app.state.filters.is_active());

        assert!(app.handle_input(&InputEvent::Char('x')));
        assert!(!app.state.filters.is_active());
        assert_eq!(visible_count(&app), 3);
    }

    #[test]
    fn search_mode_edits_query() {
        let mut app = ready_app();
        assert!(app.handle_input(&InputEvent::Char('/')));
        assert_eq!(app.state.input_mode, InputMode::Search);

        for ch in "Eng".chars() {
            assert!(app.handle_input(&InputEvent::Char(ch)));
        }
        assert_eq!(app.state.search_query(), "eng");

        assert!(app.handle_input(&InputEvent::Backspace));
        assert_eq!(app.state.search_query(), "en");

        assert!(app.handle_input(&InputEvent::Escape));
        assert_eq!(app.state.input_mode, InputMode::Browse);
        // Leaving search mode keeps the query (and its results) active.
        assert_eq!(app.state.search_query(), "en");
    }

    #[test]
    fn search_result_opens_details_in_owning_category() {
        let mut app = ready_app();
        app.handle_input(&InputEvent::Char('/'));
        for ch in "eng".chars() {
            app.handle_input(&InputEvent::Char(ch));
        }
        // Hits in catalog order: Civil Engineer (Engineering).
        assert!(app.handle_input(&InputEvent::Click(SEARCH_RESULT_BASE)));
        assert_eq!(app.state.view, View::Details);
        let selection = app.state.details.as_ref().unwrap();
        assert_eq!(selection.category, "Engineering");
        assert_eq!(selection.name, "Civil Engineer");
        assert!(selection.record.is_some());
        assert_eq!(app.state.input_mode, InputMode::Browse);
    }

    #[test]
    fn escape_clears_search_from_categories_view() {
        let mut app = ready_app();
        app.handle_input(&InputEvent::Char('/'));
        app.handle_input(&InputEvent::Char('e'));
        app.handle_input(&InputEvent::Enter); // back to browse mode
        assert!(app.handle_input(&InputEvent::Escape));
        assert_eq!(app.state.search_query(), "");
    }

    #[test]
    fn careers_scroll_is_bounded() {
        let mut app = ready_app();
        app.handle_input(&InputEvent::Char('1')); // 3 visible entries
        for _ in 0..10 {
            app.handle_input(&InputEvent::Down);
        }
        assert_eq!(app.state.careers_scroll, 2);
        for _ in 0..10 {
            app.handle_input(&InputEvent::Up);
        }
        assert_eq!(app.state.careers_scroll, 0);
    }

    #[test]
    fn details_scroll_is_bounded() {
        let mut app = ready_app();
        app.handle_input(&InputEvent::Char('1'));
        app.handle_input(&InputEvent::Char('1')); // open Dev
        let count = render::details_line_count(app.state.details.as_ref().unwrap());
        for _ in 0..count + 20 {
            app.handle_input(&InputEvent::Down);
        }
        assert_eq!(app.state.details_scroll, count - 1);
    }

    #[test]
    fn dark_mode_toggles() {
        let mut app = ready_app();
        assert!(!app.state.dark_mode);
        assert!(app.handle_input(&InputEvent::Char('d')));
        assert!(app.state.dark_mode);
        assert!(app.handle_input(&InputEvent::Click(TOGGLE_DARK_MODE)));
        assert!(!app.state.dark_mode);
    }
}
