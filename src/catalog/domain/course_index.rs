use super::{Course, CourseKey};
use std::collections::HashMap;

/// CourseIndex - exact-match store keyed by normalized course number
///
/// Backed by a hash map for O(1) average insert and lookup. Lookups are
/// case-insensitive; the query is folded to the same normalized form the
/// records are stored under. Iteration order over the stored records is
/// unspecified - the canonical ordering comes from the sorter, never from
/// this index.
#[derive(Debug, Default)]
pub struct CourseIndex {
    by_key: HashMap<CourseKey, Course>,
}

impl CourseIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a course under its normalized key.
    ///
    /// Always succeeds. Inserting a second course with the same identifier
    /// (in any casing) overwrites the first - last write wins.
    pub fn insert(&mut self, course: Course) {
        self.by_key.insert(course.key(), course);
    }

    /// Resolves a course by identifier, case-insensitively.
    ///
    /// Returns `None` on a miss instead of erroring; callers decide how to
    /// present "not found".
    pub fn find(&self, identifier: &str) -> Option<&Course> {
        self.by_key.get(&CourseKey::normalize(identifier))
    }

    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }

    /// Iterates every stored course in unspecified order
    pub fn courses(&self) -> impl Iterator<Item = &Course> {
        self.by_key.values()
    }
}
