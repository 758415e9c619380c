//! Semantic action IDs for click targets.

// ── Shared chrome ────────────────────────────────────────────
pub const ACCEPT_DISCLAIMER: u16 = 1;
pub const TOGGLE_DARK_MODE: u16 = 2;

// ── Categories view ──────────────────────────────────────────
pub const FOCUS_SEARCH: u16 = 3;
pub const CLEAR_SEARCH: u16 = 4;
pub const SELECT_CATEGORY_BASE: u16 = 10; // +category index
pub const SELECT_CATEGORY_SLOTS: u16 = 32;
pub const SEARCH_RESULT_BASE: u16 = 100; // +result index
pub const SEARCH_RESULT_SLOTS: u16 = 150;

// ── Careers view ─────────────────────────────────────────────
pub const BACK_TO_CATEGORIES: u16 = 5;
pub const TOGGLE_FILTER_BASE: u16 = 60; // +pathway tag index 0..3
pub const TOGGLE_SALARY_SORT: u16 = 70;
pub const CLEAR_FILTERS: u16 = 71;
pub const SELECT_CAREER_BASE: u16 = 300; // +visible-list index
pub const SELECT_CAREER_SLOTS: u16 = 500;

// ── Details view ─────────────────────────────────────────────
pub const BACK_TO_CAREERS: u16 = 6;
pub const BREADCRUMB_HOME: u16 = 7;

// ── Scrolling ────────────────────────────────────────────────
pub const SCROLL_UP: u16 = 8;
pub const SCROLL_DOWN: u16 = 9;
