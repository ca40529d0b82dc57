use std::fmt;

/// NewType wrapper for a case-folded course identifier.
///
/// Both keyed structures (index and prerequisite graph) are keyed on this
/// normalized form so that lookups are case-insensitive. Normalization is
/// confined to these keys; the sort/presentation layer always sees the raw
/// identifier as it was loaded.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CourseKey(String);

impl CourseKey {
    /// Builds the normalized key for an identifier (lowercase fold)
    pub fn normalize(identifier: &str) -> Self {
        Self(identifier.to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CourseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Course value object representing a single catalog entry.
///
/// Immutable once created; a load replaces the whole collection rather
/// than mutating individual records. Prerequisite identifiers may
/// reference courses that are not present in the catalog - a dangling
/// reference is legal and only surfaces when a caller tries to resolve it.
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    number: String,
    name: String,
    prerequisites: Vec<String>,
}

impl Course {
    pub fn new(number: String, name: String, prerequisites: Vec<String>) -> Self {
        Self {
            number,
            name,
            prerequisites,
        }
    }

    /// The raw course number as loaded (original casing preserved)
    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Prerequisite identifiers in input order, duplicates included
    pub fn prerequisites(&self) -> &[String] {
        &self.prerequisites
    }

    /// The normalized key this course is stored under
    pub fn key(&self) -> CourseKey {
        CourseKey::normalize(&self.number)
    }
}
