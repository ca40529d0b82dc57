use crate::catalog::domain::Course;
use crate::shared::Result;
use std::path::Path;

/// CourseSource port for obtaining parsed course records
///
/// Abstracts where course records come from (a courses file on disk,
/// an in-memory fixture in tests). The source owns its own failure
/// modes - a missing or malformed file is the source's error, distinct
/// from the catalog's `Empty` outcome for zero records.
pub trait CourseSource {
    /// Reads and parses every course record from the given location
    ///
    /// # Arguments
    /// * `path` - Location of the course data
    ///
    /// # Returns
    /// All parsed records in input order; an empty vector when the source
    /// held no records
    ///
    /// # Errors
    /// Returns an error if the source is missing, unreadable, or contains
    /// a record that cannot be parsed
    fn read_courses(&self, path: &Path) -> Result<Vec<Course>>;
}
