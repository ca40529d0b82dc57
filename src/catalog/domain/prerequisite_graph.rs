use super::{Course, CourseKey};
use std::collections::{HashMap, HashSet, VecDeque};

/// PrerequisiteGraph - directed dependency structure over normalized keys
///
/// Stores forward edges (course -> its prerequisites) and reverse edges
/// (course -> courses that depend on it) as ordered adjacency lists.
/// Edges accumulate without deduplication, and prerequisites may reference
/// courses that were never added - dangling references are legal. Nothing
/// enforces acyclicity; traversals guard with a visited set instead.
#[derive(Debug, Default)]
pub struct PrerequisiteGraph {
    adjacency: HashMap<CourseKey, Vec<CourseKey>>,
    dependents: HashMap<CourseKey, Vec<CourseKey>>,
}

impl PrerequisiteGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a course and its prerequisite relationships to the graph.
    ///
    /// Creates a forward entry for the course even when it has no
    /// prerequisites; for every prerequisite p, appends normalized(p) to
    /// the course's forward list and the course's key to p's reverse list.
    /// Adding the same course twice appends its edges twice - the catalog
    /// rebuilds the whole graph per load rather than updating in place, so
    /// this layer does not deduplicate. O(p) in the prerequisite count.
    pub fn add_course(&mut self, course: &Course) {
        let key = course.key();
        let prerequisite_keys: Vec<CourseKey> = course
            .prerequisites()
            .iter()
            .map(|p| CourseKey::normalize(p))
            .collect();

        for prerequisite in &prerequisite_keys {
            self.dependents
                .entry(prerequisite.clone())
                .or_default()
                .push(key.clone());
        }

        self.adjacency.entry(key).or_default().extend(prerequisite_keys);
    }

    /// The stored forward list for an identifier, or an empty slice if the
    /// course was never added. Never inserts an entry as a side effect.
    pub fn prerequisites_of(&self, identifier: &str) -> &[CourseKey] {
        self.adjacency
            .get(&CourseKey::normalize(identifier))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The courses that list this identifier as a prerequisite, in the
    /// order they were added. Empty for identifiers nothing depends on.
    pub fn dependents_of(&self, identifier: &str) -> &[CourseKey] {
        self.dependents
            .get(&CourseKey::normalize(identifier))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Finds the courses that become fully available once `completed` has
    /// been finished.
    ///
    /// Breadth-first traversal seeded with the direct dependents of the
    /// completed course. A candidate qualifies only when every entry of its
    /// own prerequisite list equals the completed course's key - a single
    /// distinct other prerequisite disqualifies it. Qualifying candidates
    /// are collected in first-reached order and their own dependents are
    /// enqueued, chaining "unlocks" through single-prerequisite sequences;
    /// disqualified candidates do not propagate. The visited set keeps the
    /// traversal finite even when the reverse edges contain cycles.
    /// O(V + E) over the reachable subgraph.
    pub fn unlocked_after(&self, completed: &str) -> Vec<CourseKey> {
        let completed_key = CourseKey::normalize(completed);

        let Some(seeds) = self.dependents.get(&completed_key) else {
            return Vec::new();
        };

        let mut queue: VecDeque<CourseKey> = seeds.iter().cloned().collect();
        let mut visited: HashSet<CourseKey> = HashSet::new();
        let mut unlocked = Vec::new();

        while let Some(candidate) = queue.pop_front() {
            if !visited.insert(candidate.clone()) {
                continue;
            }

            let requirements = self
                .adjacency
                .get(&candidate)
                .map(Vec::as_slice)
                .unwrap_or(&[]);
            let all_requirements_met = requirements.iter().all(|p| *p == completed_key);

            if all_requirements_met {
                unlocked.push(candidate.clone());

                if let Some(next) = self.dependents.get(&candidate) {
                    queue.extend(next.iter().filter(|k| !visited.contains(*k)).cloned());
                }
            }
        }

        unlocked
    }
}
