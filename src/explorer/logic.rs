//! Pure derivation logic: salary parsing, pathway classification, the
//! filter/sort pipeline, global search and match highlighting.
//!
//! Nothing in here touches the DOM or mutates anything outside the
//! arguments it is given; every function is a deterministic map from
//! (catalog, state) to derived data.

use std::cmp::Ordering;

use crate::catalog::{Catalog, CareerEntry, EducationPathways, SalaryRange};
use crate::explorer::state::{EducationFilters, PathwayTag, SalarySort, TagSet};

/// Placeholder used wherever salary data is missing.
pub const NOT_SPECIFIED: &str = "Not specified";

/// USD → ZAR conversion rate. Approximate; updated with the dataset.
pub const USD_TO_ZAR_RATE: f64 = 18.5;

// ── Salary model ───────────────────────────────────────────────────────

/// A salary string reduced to a numeric range. `min == max == 0` means
/// no figure could be extracted; `raw` keeps the source text for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedSalary {
    pub min: u64,
    pub max: u64,
    pub raw: String,
}

/// The salary text an entry should be ranked by: the international
/// figure of a dual-currency record, otherwise the single text figure.
pub fn salary_text(entry: &CareerEntry) -> &str {
    let Some(record) = entry.record() else {
        return NOT_SPECIFIED;
    };
    match &record.salary_range {
        None => NOT_SPECIFIED,
        Some(SalaryRange::Dual { international, .. }) => {
            international.as_deref().unwrap_or(NOT_SPECIFIED)
        }
        Some(SalaryRange::Text(text)) => text,
    }
}

/// Runs of digits (commas allowed as grouping separators) parsed to
/// numbers. `"$50,000 - $80,000"` → `[50000, 80000]`.
fn numeric_runs(text: &str) -> Vec<u64> {
    let mut values = Vec::new();
    let mut run = String::new();
    for ch in text.chars().chain(std::iter::once(' ')) {
        if ch.is_ascii_digit() {
            run.push(ch);
        } else if ch == ',' && !run.is_empty() {
            // grouping separator inside a run; drop it
        } else if !run.is_empty() {
            if let Ok(value) = run.parse::<u64>() {
                values.push(value);
            }
            run.clear();
        }
    }
    values
}

/// Numeric runs with the "k" heuristic applied: when the source text
/// contains a `k` marker, values below 1000 are assumed to denote
/// thousands. A genuinely small figure in such a string is misread; the
/// data does not disambiguate, so the approximation is kept.
fn extract_amounts(text: &str) -> Vec<u64> {
    let mut values = numeric_runs(text);
    if text.to_lowercase().contains('k') {
        for value in &mut values {
            if *value < 1000 {
                *value *= 1000;
            }
        }
    }
    values
}

pub fn parse_salary(entry: &CareerEntry) -> ParsedSalary {
    let text = salary_text(entry);
    let values = extract_amounts(text);
    match (values.iter().min(), values.iter().max()) {
        (Some(&min), Some(&max)) => ParsedSalary {
            min,
            max,
            raw: text.to_string(),
        },
        _ => ParsedSalary {
            min: 0,
            max: 0,
            raw: text.to_string(),
        },
    }
}

/// Sort key: midpoint of the range, or the single figure when no upper
/// bound was found. Zero means "unspecified".
fn sort_key(salary: &ParsedSalary) -> u64 {
    if salary.max > 0 {
        (salary.min + salary.max) / 2
    } else {
        salary.min
    }
}

/// Comparator for salary ordering. Entries without a figure compare
/// equal to each other and after every priced entry, in both directions,
/// so "Not specified" always clusters at the end.
pub fn compare_by_salary(a: &CareerEntry, b: &CareerEntry, direction: SalarySort) -> Ordering {
    let key_a = sort_key(&parse_salary(a));
    let key_b = sort_key(&parse_salary(b));
    match (key_a, key_b) {
        (0, 0) => Ordering::Equal,
        (0, _) => Ordering::Greater,
        (_, 0) => Ordering::Less,
        _ => match direction {
            SalarySort::Ascending => key_a.cmp(&key_b),
            SalarySort::Descending => key_b.cmp(&key_a),
            SalarySort::None => Ordering::Equal,
        },
    }
}

/// Convert a USD amount to rand, rounded to the nearest whole unit.
pub fn convert_to_zar(usd: u64) -> u64 {
    (usd as f64 * USD_TO_ZAR_RATE).round() as u64
}

/// Convert the figures inside a USD salary string to a rand rendering.
/// Returns `None` when no figure can be extracted (the caller decides
/// how to degrade).
pub fn convert_usd_text_to_zar(text: &str) -> Option<String> {
    let values = extract_amounts(text);
    let zar: Vec<u64> = values.iter().map(|&usd| convert_to_zar(usd)).collect();
    match zar.as_slice() {
        [] => None,
        [only] => Some(format!("R{}", format_with_commas(*only))),
        [a, b] => {
            let low = (*a).min(*b);
            let high = (*a).max(*b);
            Some(format!(
                "R{} - R{}",
                format_with_commas(low),
                format_with_commas(high)
            ))
        }
        [first, ..] => Some(format!("R{}+", format_with_commas(*first))),
    }
}

/// Surface a conversion fallback in the browser console. No-op in tests
/// and off-browser builds.
#[cfg(target_arch = "wasm32")]
fn warn_unconverted(text: &str) {
    web_sys::console::warn_1(
        &format!("career explorer: no figures found in salary {text:?}, showing raw text").into(),
    );
}

#[cfg(not(target_arch = "wasm32"))]
fn warn_unconverted(_text: &str) {}

/// A salary prepared for rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SalaryDisplay {
    NotSpecified,
    /// Dual-currency record: rand-converted international figure next to
    /// the raw local figure.
    Dual { global: String, local: String },
    /// Single USD-denominated text converted to rand.
    Converted(String),
    /// Text passed through unchanged (already local or unrecognized).
    Plain(String),
    /// Conversion failed; original text annotated as USD.
    UsdFallback(String),
}

pub fn format_salary(entry: &CareerEntry) -> SalaryDisplay {
    let Some(record) = entry.record() else {
        return SalaryDisplay::NotSpecified;
    };
    let Some(range) = &record.salary_range else {
        return SalaryDisplay::NotSpecified;
    };
    match range {
        SalaryRange::Dual {
            international,
            south_africa,
        } => {
            let international = international.as_deref().unwrap_or(NOT_SPECIFIED);
            let local = south_africa.as_deref().unwrap_or(NOT_SPECIFIED);
            let global = if international == NOT_SPECIFIED {
                international.to_string()
            } else {
                convert_usd_text_to_zar(international).unwrap_or_else(|| {
                    warn_unconverted(international);
                    international.to_string()
                })
            };
            SalaryDisplay::Dual {
                global,
                local: local.to_string(),
            }
        }
        SalaryRange::Text(text) => {
            if text == NOT_SPECIFIED {
                return SalaryDisplay::Plain(text.clone());
            }
            let usd_like = text.contains('$') || text.to_lowercase().contains("usd");
            if usd_like {
                match convert_usd_text_to_zar(text) {
                    Some(zar) => SalaryDisplay::Converted(zar),
                    None => {
                        warn_unconverted(text);
                        SalaryDisplay::UsdFallback(format!("{text} (USD)"))
                    }
                }
            } else {
                SalaryDisplay::Plain(text.clone())
            }
        }
    }
}

pub fn format_with_commas(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped.chars().rev().collect()
}

// ── Education pathway classifier ───────────────────────────────────────

const FORMAL_MARKERS: [&str; 4] = ["formal", "degree", "university", "college"];
const SELF_TAUGHT_MARKERS: [&str; 3] = ["self-taught", "autodidact", "self-directed"];
const CERTIFICATE_MARKERS: [&str; 3] = ["certificate", "bootcamp", "certification"];
const ALTERNATIVE_MARKERS: [&str; 3] = ["alternative", "non-traditional", "apprentice"];

/// Derive the set of pathway tags an entry belongs to. Route text is
/// matched by case-insensitive substring; one route may contribute
/// several tags. Name-only stubs classify to the empty set.
pub fn classify_pathways(entry: &CareerEntry) -> TagSet {
    let mut tags = TagSet::new();
    let Some(record) = entry.record() else {
        return tags;
    };
    match &record.education_pathways {
        None => {}
        Some(EducationPathways::Routes(routes)) => {
            for pathway in routes {
                let route = pathway.route.to_lowercase();
                if FORMAL_MARKERS.iter().any(|m| route.contains(m)) {
                    tags.insert(PathwayTag::Formal);
                }
                if SELF_TAUGHT_MARKERS.iter().any(|m| route.contains(m)) {
                    tags.insert(PathwayTag::SelfTaught);
                }
                if CERTIFICATE_MARKERS.iter().any(|m| route.contains(m)) {
                    tags.insert(PathwayTag::Certificate);
                }
                if ALTERNATIVE_MARKERS.iter().any(|m| route.contains(m)) {
                    tags.insert(PathwayTag::Alternative);
                }
            }
        }
        Some(EducationPathways::Named(named)) => {
            if named.formal.is_some() {
                tags.insert(PathwayTag::Formal);
            }
            if named.self_taught.is_some() {
                tags.insert(PathwayTag::SelfTaught);
            }
            if named.certificate.is_some() {
                tags.insert(PathwayTag::Certificate);
            }
            if named.alternative.is_some() {
                tags.insert(PathwayTag::Alternative);
            }
        }
    }
    tags
}

// ── Filter / sort pipeline ─────────────────────────────────────────────

/// Tri-state toggle: neutral → include → exclude → neutral. A tag is
/// always removed from both sets before the next state is applied, so
/// the sets stay disjoint.
pub fn toggle_education_filter(filters: &mut EducationFilters, tag: PathwayTag) {
    let was_included = filters.include.contains(tag);
    let was_excluded = filters.exclude.contains(tag);
    filters.include.remove(tag);
    filters.exclude.remove(tag);
    if !was_included && !was_excluded {
        filters.include.insert(tag);
    } else if was_included {
        filters.exclude.insert(tag);
    }
    // was excluded → back to neutral, nothing to add
}

fn passes_education_filters(entry: &CareerEntry, filters: &EducationFilters) -> bool {
    let tags = classify_pathways(entry);
    // An empty tag set can never satisfy a non-empty include set.
    if !filters.include.is_empty() && !tags.intersects(&filters.include) {
        return false;
    }
    if tags.intersects(&filters.exclude) {
        return false;
    }
    true
}

/// The full per-category pipeline: education filter, then stable salary
/// sort. `SalarySort::None` leaves catalog order untouched.
pub fn visible_careers<'a>(
    entries: &'a [CareerEntry],
    filters: &EducationFilters,
    sort: SalarySort,
) -> Vec<&'a CareerEntry> {
    let mut visible: Vec<&CareerEntry> = entries
        .iter()
        .filter(|entry| passes_education_filters(entry, filters))
        .collect();
    if sort != SalarySort::None {
        visible.sort_by(|a, b| compare_by_salary(a, b, sort));
    }
    visible
}

// ── Global search ──────────────────────────────────────────────────────

/// A search match together with its owning category.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchHit<'a> {
    pub category: &'a str,
    pub entry: &'a CareerEntry,
}

/// Case-insensitive substring search over every entry's display name,
/// in category-then-catalog order. An empty query yields no hits.
pub fn global_search<'a>(catalog: &'a Catalog, query: &str) -> Vec<SearchHit<'a>> {
    if query.is_empty() {
        return Vec::new();
    }
    let mut hits = Vec::new();
    for (category, entries) in catalog.categories() {
        for entry in entries {
            if entry.name().to_lowercase().contains(query) {
                hits.push(SearchHit { category, entry });
            }
        }
    }
    hits
}

/// Split `text` into segments, marking every case-insensitive occurrence
/// of the literal `query`. The match is a plain substring scan, so no
/// character in the query carries pattern meaning. Concatenating the
/// segments always reproduces `text` exactly.
pub fn highlight(text: &str, query: &str) -> Vec<(String, bool)> {
    if query.is_empty() || text.is_empty() {
        return vec![(text.to_string(), false)];
    }
    // ASCII lowercasing preserves byte offsets, so match positions in the
    // lowered text index directly into the original.
    let lowered_text = text.to_ascii_lowercase();
    let lowered_query = query.to_ascii_lowercase();

    let mut segments = Vec::new();
    let mut pos = 0;
    while let Some(found) = lowered_text[pos..].find(&lowered_query) {
        let start = pos + found;
        let end = start + lowered_query.len();
        if start > pos {
            segments.push((text[pos..start].to_string(), false));
        }
        segments.push((text[start..end].to_string(), true));
        pos = end;
    }
    if pos < text.len() {
        segments.push((text[pos..].to_string(), false));
    }
    if segments.is_empty() {
        segments.push((text.to_string(), false));
    }
    segments
}
