use crate::catalog::services::{CourseCatalog, LoadOutcome};
use crate::ports::outbound::{CatalogFormatter, CourseSource, OutputPresenter};
use crate::shared::Result;
use std::path::Path;

/// BrowseCatalogUseCase - Core use case for a planner session
///
/// Owns one CourseCatalog for the lifetime of the session and coordinates
/// the three supported operations (load, list, find) between the course
/// source and the presenter, using generic dependency injection for all
/// infrastructure.
///
/// # Type Parameters
/// * `S` - CourseSource implementation
/// * `F` - CatalogFormatter implementation
/// * `P` - OutputPresenter implementation
pub struct BrowseCatalogUseCase<S, F, P> {
    source: S,
    formatter: F,
    presenter: P,
    catalog: CourseCatalog,
}

impl<S, F, P> BrowseCatalogUseCase<S, F, P>
where
    S: CourseSource,
    F: CatalogFormatter,
    P: OutputPresenter,
{
    /// Creates a new session with injected dependencies
    pub fn new(source: S, formatter: F, presenter: P) -> Self {
        Self {
            source,
            formatter,
            presenter,
            catalog: CourseCatalog::new(),
        }
    }

    /// Loads the catalog from the course source.
    ///
    /// Zero records is a reportable outcome, not a failure: the prior
    /// catalog contents stay in place and the user is told the file was
    /// empty. Source failures (missing or malformed file) propagate to the
    /// caller, which decides whether the session continues.
    pub fn load(&mut self, path: &Path) -> Result<LoadOutcome> {
        let courses = self.source.read_courses(path)?;
        let outcome = self.catalog.load(courses);

        match outcome {
            LoadOutcome::Empty => {
                self.presenter.present("Courses file appears to be empty.\n\n")?;
            }
            LoadOutcome::Loaded(_) => {
                self.presenter.present("Data successfully loaded.\n\n")?;
            }
        }

        Ok(outcome)
    }

    /// Prints every course in canonical sorted order
    pub fn print_listing(&self) -> Result<()> {
        if !self.catalog.is_loaded() {
            return self
                .presenter
                .present("No courses loaded. Please load data first.\n\n");
        }

        self.presenter
            .present(&self.formatter.format_listing(self.catalog.list_all()))
    }

    /// Looks up a single course by number and prints it
    pub fn print_course(&self, query: &str) -> Result<()> {
        if !self.catalog.is_loaded() {
            return self
                .presenter
                .present("No courses loaded. Please load data first.\n\n");
        }

        match self.catalog.find_by_number(query) {
            Some(course) => self.presenter.present(&self.formatter.format_course(course)),
            None => self
                .presenter
                .present(&format!("Course {} not found.\n\n", query)),
        }
    }

    /// The catalog owned by this session
    pub fn catalog(&self) -> &CourseCatalog {
        &self.catalog
    }
}
