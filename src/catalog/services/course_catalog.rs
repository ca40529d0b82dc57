use crate::catalog::domain::{Course, CourseIndex, PrerequisiteGraph};
use crate::catalog::services::CourseSorter;

/// Outcome of a catalog load.
///
/// Absence of input is a reportable outcome, not a failure; a load never
/// errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The input had zero records; the catalog keeps its prior contents
    Empty,
    /// This many records were indexed, graphed, and sorted
    Loaded(usize),
}

/// CourseCatalog - composition root over the index, graph, and listing
///
/// Owns one CourseIndex and one PrerequisiteGraph per load cycle and
/// retains the canonically sorted listing. A load replaces all three as a
/// group, so readers never observe a half-replaced catalog. An explicit
/// owned value: construct one instance per session or test rather than
/// sharing process-wide state. In a concurrent host the whole catalog must
/// sit behind a single exclusive lock.
#[derive(Debug, Default)]
pub struct CourseCatalog {
    index: CourseIndex,
    graph: PrerequisiteGraph,
    listing: Vec<Course>,
}

impl CourseCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a parsed course collection, replacing any prior contents.
    ///
    /// Empty input reports `Empty` and leaves the prior load untouched.
    /// Otherwise the index and graph are rebuilt from scratch in a single
    /// pass over input order, the collection is sorted into the canonical
    /// listing, and all three structures are swapped in together.
    pub fn load(&mut self, courses: Vec<Course>) -> LoadOutcome {
        if courses.is_empty() {
            return LoadOutcome::Empty;
        }

        let mut index = CourseIndex::new();
        let mut graph = PrerequisiteGraph::new();
        for course in &courses {
            index.insert(course.clone());
            graph.add_course(course);
        }

        let listing = CourseSorter::sort_by_number(courses);
        let loaded = listing.len();

        self.index = index;
        self.graph = graph;
        self.listing = listing;

        LoadOutcome::Loaded(loaded)
    }

    /// The canonical sorted listing; empty before the first load
    pub fn list_all(&self) -> &[Course] {
        &self.listing
    }

    /// Case-insensitive exact lookup, delegated to the index
    pub fn find_by_number(&self, identifier: &str) -> Option<&Course> {
        self.index.find(identifier)
    }

    /// The prerequisite graph for the currently loaded catalog
    pub fn graph(&self) -> &PrerequisiteGraph {
        &self.graph
    }

    pub fn is_loaded(&self) -> bool {
        !self.listing.is_empty()
    }
}
