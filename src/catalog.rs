//! Career catalog: data model and document parsing.
//!
//! The dataset reaches us in two historical layouts (a bare
//! category→careers mapping, or an envelope with metadata) and individual
//! entries come in two shapes (a bare name string, or a structured
//! record). All of that tolerance lives here, at the parse boundary;
//! the rest of the crate only ever sees [`Catalog`] and [`CareerEntry`].

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// A catalog entry: either a name-only stub or a full record.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum CareerEntry {
    Stub(String),
    Full(CareerRecord),
}

impl CareerEntry {
    pub fn name(&self) -> &str {
        match self {
            CareerEntry::Stub(name) => name,
            CareerEntry::Full(record) => &record.name,
        }
    }

    /// The structured record, if this entry has one.
    pub fn record(&self) -> Option<&CareerRecord> {
        match self {
            CareerEntry::Stub(_) => None,
            CareerEntry::Full(record) => Some(record),
        }
    }
}

/// Structured career data. Every field except the name is optional;
/// absent fields degrade to stub-style rendering, never to a panic.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CareerRecord {
    pub name: String,
    #[serde(default)]
    pub brief_description: Option<String>,
    #[serde(default)]
    pub salary_range: Option<SalaryRange>,
    #[serde(default)]
    pub typical_working_hours: Option<String>,
    #[serde(default)]
    pub responsibilities: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub education_pathways: Option<EducationPathways>,
    #[serde(default)]
    pub pros: Vec<String>,
    #[serde(default)]
    pub cons: Vec<String>,
    #[serde(default)]
    pub work_environment: Option<String>,
    #[serde(default)]
    pub related_careers: Vec<String>,
}

/// A salary, either a single free-text figure or a dual-currency pair.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum SalaryRange {
    #[serde(rename_all = "camelCase")]
    Dual {
        #[serde(default)]
        international: Option<String>,
        #[serde(default)]
        south_africa: Option<String>,
    },
    Text(String),
}

/// Education pathway data, modern (ordered route list) or legacy
/// (fixed named slots).
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum EducationPathways {
    Routes(Vec<PathwayRoute>),
    Named(NamedPathways),
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PathwayRoute {
    #[serde(default)]
    pub route: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub alternative_paths: Vec<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NamedPathways {
    #[serde(default)]
    pub formal: Option<NamedPathway>,
    #[serde(default)]
    pub certificate: Option<NamedPathway>,
    #[serde(default)]
    pub self_taught: Option<NamedPathway>,
    #[serde(default)]
    pub alternative: Option<NamedPathway>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct NamedPathway {
    #[serde(default)]
    pub level: String,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub description: String,
}

// ── Catalog ────────────────────────────────────────────────────────────

/// The loaded catalog. Category order is document order, entry order is
/// list order; both are preserved for the whole session.
#[derive(Clone, Debug)]
pub struct Catalog {
    categories: Vec<(String, Vec<CareerEntry>)>,
    total_careers: usize,
    generated_at: Option<String>,
}

impl Catalog {
    /// Total career count for the heading. Comes from the envelope
    /// metadata when present, otherwise summed from the entries.
    pub fn total_careers(&self) -> usize {
        self.total_careers
    }

    pub fn generated_at(&self) -> Option<&str> {
        self.generated_at.as_deref()
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    pub fn categories(&self) -> impl Iterator<Item = (&str, &[CareerEntry])> {
        self.categories
            .iter()
            .map(|(name, entries)| (name.as_str(), entries.as_slice()))
    }

    pub fn category_at(&self, index: usize) -> Option<(&str, &[CareerEntry])> {
        self.categories
            .get(index)
            .map(|(name, entries)| (name.as_str(), entries.as_slice()))
    }

    pub fn entries(&self, category: &str) -> Option<&[CareerEntry]> {
        self.categories
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, entries)| entries.as_slice())
    }

    /// Resolve a career by display name within a category. Used when a
    /// global search result only carries the name.
    pub fn find_entry(&self, category: &str, name: &str) -> Option<&CareerEntry> {
        self.entries(category)?
            .iter()
            .find(|entry| entry.name() == name)
    }
}

// ── Parsing ────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum CatalogError {
    Parse(serde_json::Error),
    Empty,
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Parse(err) => write!(f, "could not parse career data: {err}"),
            CatalogError::Empty => write!(f, "career data contains no categories"),
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Parse(err)
    }
}

/// Ordered category map. serde's default map containers lose document
/// order, so deserialize through a visitor that keeps it.
#[derive(Clone, Debug, Default)]
struct CategoryMap(Vec<(String, Vec<CareerEntry>)>);

impl<'de> Deserialize<'de> for CategoryMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CategoryMapVisitor;

        impl<'de> Visitor<'de> for CategoryMapVisitor {
            type Value = CategoryMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a mapping of category name to career list")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut categories = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, entries)) =
                    access.next_entry::<String, Vec<CareerEntry>>()?
                {
                    categories.push((name, entries));
                }
                Ok(CategoryMap(categories))
            }
        }

        deserializer.deserialize_map(CategoryMapVisitor)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Metadata {
    #[serde(default)]
    total_careers: Option<usize>,
    #[serde(default)]
    generated_at: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Document {
    Envelope {
        careers: CategoryMap,
        #[serde(default)]
        metadata: Option<Metadata>,
    },
    Bare(CategoryMap),
}

pub fn parse(json: &str) -> Result<Catalog, CatalogError> {
    let document: Document = serde_json::from_str(json)?;

    let (map, metadata) = match document {
        Document::Envelope { careers, metadata } => (careers, metadata),
        Document::Bare(map) => (map, None),
    };

    if map.0.is_empty() {
        return Err(CatalogError::Empty);
    }

    let counted: usize = map.0.iter().map(|(_, entries)| entries.len()).sum();
    let (total_careers, generated_at) = match metadata {
        Some(meta) => (meta.total_careers.unwrap_or(counted), meta.generated_at),
        None => (counted, None),
    };

    Ok(Catalog {
        categories: map.0,
        total_careers,
        generated_at,
    })
}

/// Parse the dataset compiled into the binary. This is the single load
/// performed at startup; a failure here is terminal for the session.
pub fn load_embedded() -> Result<Catalog, CatalogError> {
    parse(include_str!("../data/careers.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_mapping() {
        let catalog = parse(r#"{"Technology": ["Developer", "Tester"]}"#).unwrap();
        assert_eq!(catalog.category_count(), 1);
        assert_eq!(catalog.total_careers(), 2);
        assert!(catalog.generated_at().is_none());
    }

    #[test]
    fn parses_envelope_with_metadata() {
        let json = r#"{
            "careers": {"Technology": ["Developer"]},
            "metadata": {"totalCareers": 1400, "generatedAt": "2025-11-08"}
        }"#;
        let catalog = parse(json).unwrap();
        assert_eq!(catalog.total_careers(), 1400);
        assert_eq!(catalog.generated_at(), Some("2025-11-08"));
    }

    #[test]
    fn envelope_without_metadata_counts_entries() {
        let json = r#"{"careers": {"Arts": ["Painter", "Sculptor", "Dancer"]}}"#;
        let catalog = parse(json).unwrap();
        assert_eq!(catalog.total_careers(), 3);
    }

    #[test]
    fn category_order_is_document_order() {
        let json = r#"{"Zoology": [], "Arts": ["Painter"], "Mining": []}"#;
        // Zoology is empty but present; order must not be alphabetized.
        let catalog = parse(json).unwrap();
        let names: Vec<&str> = catalog.categories().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Zoology", "Arts", "Mining"]);
    }

    #[test]
    fn stub_and_full_entries_coexist() {
        let json = r#"{"Technology": [
            "Quantum Researcher",
            {"name": "Developer", "briefDescription": "Builds software"}
        ]}"#;
        let catalog = parse(json).unwrap();
        let entries = catalog.entries("Technology").unwrap();
        assert_eq!(entries[0].name(), "Quantum Researcher");
        assert!(entries[0].record().is_none());
        assert_eq!(entries[1].name(), "Developer");
        assert_eq!(
            entries[1].record().unwrap().brief_description.as_deref(),
            Some("Builds software")
        );
    }

    #[test]
    fn dual_salary_shape() {
        let json = r#"{"Technology": [{
            "name": "Developer",
            "salaryRange": {"international": "$50,000 - $80,000", "southAfrica": "R500,000"}
        }]}"#;
        let catalog = parse(json).unwrap();
        let record = catalog.entries("Technology").unwrap()[0].record().unwrap();
        match record.salary_range.as_ref().unwrap() {
            SalaryRange::Dual {
                international,
                south_africa,
            } => {
                assert_eq!(international.as_deref(), Some("$50,000 - $80,000"));
                assert_eq!(south_africa.as_deref(), Some("R500,000"));
            }
            SalaryRange::Text(_) => panic!("expected dual salary"),
        }
    }

    #[test]
    fn text_salary_shape() {
        let json = r#"{"Technology": [{"name": "Developer", "salaryRange": "$60K-$90K"}]}"#;
        let catalog = parse(json).unwrap();
        let record = catalog.entries("Technology").unwrap()[0].record().unwrap();
        assert_eq!(
            record.salary_range,
            Some(SalaryRange::Text("$60K-$90K".into()))
        );
    }

    #[test]
    fn route_pathway_shape() {
        let json = r#"{"Technology": [{
            "name": "Developer",
            "educationPathways": [{
                "route": "University degree",
                "description": "Four year program",
                "duration": "4 years",
                "difficulty": "high",
                "requirements": ["Matric"],
                "alternativePaths": ["Bootcamp"]
            }]
        }]}"#;
        let catalog = parse(json).unwrap();
        let record = catalog.entries("Technology").unwrap()[0].record().unwrap();
        match record.education_pathways.as_ref().unwrap() {
            EducationPathways::Routes(routes) => {
                assert_eq!(routes.len(), 1);
                assert_eq!(routes[0].route, "University degree");
                assert_eq!(routes[0].requirements, vec!["Matric"]);
                assert_eq!(routes[0].alternative_paths, vec!["Bootcamp"]);
            }
            EducationPathways::Named(_) => panic!("expected route list"),
        }
    }

    #[test]
    fn named_pathway_shape() {
        let json = r#"{"Technology": [{
            "name": "Developer",
            "educationPathways": {
                "formal": {"level": "Bachelor", "difficulty": "High", "description": "CS degree"},
                "selfTaught": {"level": "None", "difficulty": "Medium", "description": "Open courseware"}
            }
        }]}"#;
        let catalog = parse(json).unwrap();
        let record = catalog.entries("Technology").unwrap()[0].record().unwrap();
        match record.education_pathways.as_ref().unwrap() {
            EducationPathways::Named(named) => {
                assert_eq!(named.formal.as_ref().unwrap().level, "Bachelor");
                assert!(named.self_taught.is_some());
                assert!(named.certificate.is_none());
                assert!(named.alternative.is_none());
            }
            EducationPathways::Routes(_) => panic!("expected named pathways"),
        }
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let json = r#"{"Technology": [{"name": "Developer"}]}"#;
        let catalog = parse(json).unwrap();
        let record = catalog.entries("Technology").unwrap()[0].record().unwrap();
        assert!(record.brief_description.is_none());
        assert!(record.salary_range.is_none());
        assert!(record.responsibilities.is_empty());
        assert!(record.skills.is_empty());
        assert!(record.pros.is_empty());
        assert!(record.related_careers.is_empty());
    }

    #[test]
    fn find_entry_by_name() {
        let json = r#"{"Technology": ["Tester", {"name": "Developer"}]}"#;
        let catalog = parse(json).unwrap();
        assert!(catalog.find_entry("Technology", "Developer").is_some());
        assert!(catalog.find_entry("Technology", "Tester").is_some());
        assert!(catalog.find_entry("Technology", "Plumber").is_none());
        assert!(catalog.find_entry("Trades", "Developer").is_none());
    }

    #[test]
    fn empty_document_is_rejected() {
        assert!(matches!(parse("{}"), Err(CatalogError::Empty)));
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        assert!(matches!(parse("not json"), Err(CatalogError::Parse(_))));
    }

    #[test]
    fn embedded_dataset_loads() {
        let catalog = load_embedded().expect("bundled dataset must parse");
        assert!(catalog.category_count() > 0);
        assert!(catalog.total_careers() > 0);
    }
}
