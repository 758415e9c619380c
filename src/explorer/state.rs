//! Explorer session state: navigation, filters, sorting, search.

use crate::catalog::CareerRecord;

/// Normalized education-route categories used for filtering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathwayTag {
    Formal,
    SelfTaught,
    Certificate,
    Alternative,
}

/// All tags in display order.
pub const ALL_TAGS: [PathwayTag; 4] = [
    PathwayTag::Formal,
    PathwayTag::SelfTaught,
    PathwayTag::Certificate,
    PathwayTag::Alternative,
];

impl PathwayTag {
    pub fn index(self) -> usize {
        match self {
            PathwayTag::Formal => 0,
            PathwayTag::SelfTaught => 1,
            PathwayTag::Certificate => 2,
            PathwayTag::Alternative => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PathwayTag::Formal => "Formal Education",
            PathwayTag::SelfTaught => "Self-Taught",
            PathwayTag::Certificate => "Certificate/Bootcamp",
            PathwayTag::Alternative => "Alternative Paths",
        }
    }

    /// Keyboard shortcut for the filter toggle.
    pub fn key(self) -> char {
        match self {
            PathwayTag::Formal => 'f',
            PathwayTag::SelfTaught => 't',
            PathwayTag::Certificate => 'c',
            PathwayTag::Alternative => 'a',
        }
    }
}

/// A set of pathway tags. Fixed-size, cheap to copy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TagSet([bool; 4]);

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, tag: PathwayTag) {
        self.0[tag.index()] = true;
    }

    pub fn remove(&mut self, tag: PathwayTag) {
        self.0[tag.index()] = false;
    }

    pub fn contains(&self, tag: PathwayTag) -> bool {
        self.0[tag.index()]
    }

    pub fn is_empty(&self) -> bool {
        !self.0.iter().any(|&set| set)
    }

    pub fn intersects(&self, other: &TagSet) -> bool {
        self.0.iter().zip(other.0.iter()).any(|(&a, &b)| a && b)
    }

    pub fn iter(&self) -> impl Iterator<Item = PathwayTag> + '_ {
        ALL_TAGS.into_iter().filter(|tag| self.contains(*tag))
    }
}

/// Tri-state pathway filter: `include` and `exclude` are kept disjoint by
/// the toggle logic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EducationFilters {
    pub include: TagSet,
    pub exclude: TagSet,
}

impl EducationFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        !self.include.is_empty() || !self.exclude.is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Salary sort direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SalarySort {
    #[default]
    None,
    Ascending,
    Descending,
}

impl SalarySort {
    /// none → ascending → descending → none.
    pub fn cycled(self) -> Self {
        match self {
            SalarySort::None => SalarySort::Ascending,
            SalarySort::Ascending => SalarySort::Descending,
            SalarySort::Descending => SalarySort::None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SalarySort::None => "Sort by Salary",
            SalarySort::Ascending => "Salary: Low to High",
            SalarySort::Descending => "Salary: High to Low",
        }
    }
}

/// Which of the three views is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Categories,
    Careers,
    Details,
}

/// Whether key presses browse or edit the search query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputMode {
    Browse,
    Search,
}

/// A career opened in the details view. The record is cloned at the
/// moment of navigation, so later filter changes cannot alter what is
/// being read. `record` is `None` for name-only stubs and for search
/// results that could not be resolved in their category.
#[derive(Clone, Debug, PartialEq)]
pub struct DetailsSelection {
    pub category: String,
    pub name: String,
    pub record: Option<CareerRecord>,
}

/// All mutable session state. One instance lives for the page session and
/// together with the catalog fully determines every derived view.
#[derive(Clone, Debug)]
pub struct ExplorerState {
    pub view: View,
    /// Required whenever `view` is Careers or Details.
    pub current_category: Option<String>,
    pub details: Option<DetailsSelection>,
    pub filters: EducationFilters,
    pub salary_sort: SalarySort,
    /// Raw search text as typed; [`ExplorerState::search_query`] is the
    /// normalized form the pipeline consumes.
    pub search_input: String,
    pub input_mode: InputMode,
    pub dark_mode: bool,
    /// Index of the first visible entry in the careers list.
    pub careers_scroll: usize,
    /// Visual line offset into the details view.
    pub details_scroll: usize,
}

impl ExplorerState {
    pub fn new() -> Self {
        Self {
            view: View::Categories,
            current_category: None,
            details: None,
            filters: EducationFilters::new(),
            salary_sort: SalarySort::None,
            search_input: String::new(),
            input_mode: InputMode::Browse,
            dark_mode: false,
            careers_scroll: 0,
            details_scroll: 0,
        }
    }

    /// The active query: lowercased and trimmed. Empty means no search.
    pub fn search_query(&self) -> String {
        self.search_input.trim().to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state() {
        let state = ExplorerState::new();
        assert_eq!(state.view, View::Categories);
        assert!(state.current_category.is_none());
        assert!(state.details.is_none());
        assert!(!state.filters.is_active());
        assert_eq!(state.salary_sort, SalarySort::None);
        assert_eq!(state.search_query(), "");
        assert_eq!(state.input_mode, InputMode::Browse);
    }

    #[test]
    fn search_query_is_normalized() {
        let mut state = ExplorerState::new();
        state.search_input = "  Software ENGineer ".into();
        assert_eq!(state.search_query(), "software engineer");
    }

    #[test]
    fn tag_set_basics() {
        let mut tags = TagSet::new();
        assert!(tags.is_empty());
        tags.insert(PathwayTag::Formal);
        tags.insert(PathwayTag::Certificate);
        assert!(tags.contains(PathwayTag::Formal));
        assert!(!tags.contains(PathwayTag::SelfTaught));
        tags.remove(PathwayTag::Formal);
        assert!(!tags.contains(PathwayTag::Formal));
        assert!(!tags.is_empty());
    }

    #[test]
    fn tag_set_intersection() {
        let mut a = TagSet::new();
        a.insert(PathwayTag::Formal);
        let mut b = TagSet::new();
        b.insert(PathwayTag::Alternative);
        assert!(!a.intersects(&b));
        b.insert(PathwayTag::Formal);
        assert!(a.intersects(&b));
        assert!(!TagSet::new().intersects(&a));
    }

    #[test]
    fn tag_set_iterates_in_display_order() {
        let mut tags = TagSet::new();
        tags.insert(PathwayTag::Alternative);
        tags.insert(PathwayTag::Formal);
        let collected: Vec<PathwayTag> = tags.iter().collect();
        assert_eq!(collected, vec![PathwayTag::Formal, PathwayTag::Alternative]);
    }

    #[test]
    fn salary_sort_cycle() {
        assert_eq!(SalarySort::None.cycled(), SalarySort::Ascending);
        assert_eq!(SalarySort::Ascending.cycled(), SalarySort::Descending);
        assert_eq!(SalarySort::Descending.cycled(), SalarySort::None);
    }

    #[test]
    fn filters_clear() {
        let mut filters = EducationFilters::new();
        filters.include.insert(PathwayTag::Formal);
        filters.exclude.insert(PathwayTag::SelfTaught);
        assert!(filters.is_active());
        filters.clear();
        assert!(!filters.is_active());
    }

    #[test]
    fn tag_keys_are_unique() {
        for a in ALL_TAGS {
            for b in ALL_TAGS {
                if a != b {
                    assert_ne!(a.key(), b.key());
                }
            }
        }
    }
}
