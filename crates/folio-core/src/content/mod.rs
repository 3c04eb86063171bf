//! Static content catalog - the biographical records behind every card.
//!
//! Records are defined at compile time and never mutated; the string
//! identifier is the only key used for lookup. An identifier that does
//! not resolve is not an error: callers treat the miss as a silent no-op.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

mod certification;
mod experience;
pub mod images;
mod project;

/// One of the three record families.
///
/// Each variant has its own content table, card-image mapping, and
/// modal controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Experience,
    Project,
    Certification,
}

impl Variant {
    /// Lowercase name used in override keys and log output
    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Experience => "experience",
            Variant::Project => "project",
            Variant::Certification => "certification",
        }
    }

    /// Parse the lowercase name back into a variant
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "experience" => Some(Variant::Experience),
            "project" => Some(Variant::Project),
            "certification" => Some(Variant::Certification),
            _ => None,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A work or education entry.
///
/// Education rows share the experience table (their identifiers carry
/// an `edu` prefix) so one modal serves both card families.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperienceRecord {
    pub id: &'static str,
    pub date: &'static str,
    pub title: &'static str,
    pub company: &'static str,
    /// Pre-formatted HTML blob, rendered verbatim in the modal body
    pub description: &'static str,
    pub card_image: Option<&'static str>,
    pub modal_image: Option<&'static str>,
}

/// A portfolio project entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRecord {
    pub id: &'static str,
    pub category: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub repo: &'static str,
    pub card_image: Option<&'static str>,
    pub modal_image: Option<&'static str>,
}

/// A certification or award entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificationRecord {
    pub id: &'static str,
    pub date: &'static str,
    pub title: &'static str,
    pub organization: &'static str,
    pub description: &'static str,
    pub card_image: Option<&'static str>,
    pub modal_image: Option<&'static str>,
}

/// Identifier index over one variant's records.
///
/// Lookup is O(1); authored order is preserved for
/// rendering card lists.
pub struct RecordTable<R: 'static> {
    records: &'static [R],
    index: HashMap<&'static str, &'static R>,
}

impl<R> RecordTable<R> {
    fn new(records: &'static [R], id_of: fn(&R) -> &'static str) -> Self {
        let index = records.iter().map(|r| (id_of(r), r)).collect();
        Self { records, index }
    }

    /// Look up a record by identifier. `None` means the caller no-ops.
    pub fn get(&self, id: &str) -> Option<&'static R> {
        self.index.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Records in authored order
    pub fn records(&self) -> &'static [R] {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// The three per-variant lookup tables.
pub struct ContentTables {
    experience: RecordTable<ExperienceRecord>,
    projects: RecordTable<ProjectRecord>,
    certifications: RecordTable<CertificationRecord>,
}

impl ContentTables {
    fn new() -> Self {
        Self {
            experience: RecordTable::new(experience::ALL, |r| r.id),
            projects: RecordTable::new(project::PROJECTS, |r| r.id),
            certifications: RecordTable::new(certification::CERTIFICATIONS, |r| r.id),
        }
    }

    /// Process-wide table set, built on first use
    pub fn shared() -> &'static ContentTables {
        static TABLES: OnceLock<ContentTables> = OnceLock::new();
        TABLES.get_or_init(ContentTables::new)
    }

    pub fn experience(&self) -> &RecordTable<ExperienceRecord> {
        &self.experience
    }

    pub fn projects(&self) -> &RecordTable<ProjectRecord> {
        &self.projects
    }

    pub fn certifications(&self) -> &RecordTable<CertificationRecord> {
        &self.certifications
    }

    /// Work experience rows, in timeline order
    pub fn experience_timeline(&self) -> &'static [ExperienceRecord] {
        experience::timeline()
    }

    /// Education rows, in grid order
    pub fn education(&self) -> &'static [ExperienceRecord] {
        experience::education()
    }

    /// Existence check across variants, used by generic callers
    pub fn contains(&self, variant: Variant, id: &str) -> bool {
        match variant {
            Variant::Experience => self.experience.contains(id),
            Variant::Project => self.projects.contains(id),
            Variant::Certification => self.certifications.contains(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_round_trip() {
        for v in [Variant::Experience, Variant::Project, Variant::Certification] {
            assert_eq!(Variant::parse(v.as_str()), Some(v));
        }
        assert_eq!(Variant::parse("unknown"), None);
    }

    #[test]
    fn test_lookup_hit() {
        let tables = ContentTables::shared();
        let record = tables.experience().get("1").unwrap();
        assert_eq!(record.title, "Research Assistant");
        assert!(record.company.contains("JRCAI"));
    }

    #[test]
    fn test_lookup_miss_is_none() {
        let tables = ContentTables::shared();
        assert!(tables.experience().get("999").is_none());
        assert!(tables.projects().get("edu1").is_none());
        assert!(tables.certifications().get("").is_none());
    }

    #[test]
    fn test_education_ids_resolve_in_experience_table() {
        let tables = ContentTables::shared();
        for record in tables.education() {
            assert!(tables.experience().contains(record.id), "missing {}", record.id);
        }
    }

    #[test]
    fn test_identifiers_unique_within_variant() {
        let tables = ContentTables::shared();
        let mut seen = std::collections::HashSet::new();
        for record in tables.experience().records() {
            assert!(seen.insert(record.id), "duplicate id {}", record.id);
        }
        assert_eq!(
            tables.experience().records().len(),
            tables.experience_timeline().len() + tables.education().len()
        );
    }

    #[test]
    fn test_catalog_sizes() {
        let tables = ContentTables::shared();
        assert_eq!(tables.experience_timeline().len(), 9);
        assert_eq!(tables.education().len(), 3);
        assert_eq!(tables.projects().len(), 6);
        assert_eq!(tables.certifications().len(), 11);
    }

    #[test]
    fn test_no_cross_variant_contamination() {
        let tables = ContentTables::shared();
        // "4" exists in all three tables but resolves to different records
        let exp = tables.experience().get("4").unwrap();
        let proj = tables.projects().get("4").unwrap();
        let cert = tables.certifications().get("4").unwrap();
        assert_eq!(exp.title, "MENA ML Winter School 2026 Scholar");
        assert_eq!(proj.title, "ReqFlow");
        assert_eq!(cert.title, "Certificate of Appreciation");
    }
}
