use crate::catalog::domain::Course;
use crate::ports::outbound::CatalogFormatter;

/// PlainTextFormatter adapter rendering courses for the console
///
/// One record renders as the course number and name on a line, followed by
/// either `No prerequisites` or a comma-separated prerequisite list.
/// Identifiers are shown with the raw casing they were loaded with; only
/// the keyed lookups normalize case, never the presentation.
pub struct PlainTextFormatter;

impl PlainTextFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PlainTextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogFormatter for PlainTextFormatter {
    fn format_course(&self, course: &Course) -> String {
        let mut output = format!("{}, {}\n", course.number(), course.name());

        if course.prerequisites().is_empty() {
            output.push_str("No prerequisites\n\n");
        } else {
            output.push_str("Prerequisites: ");
            output.push_str(&course.prerequisites().join(", "));
            output.push_str("\n\n");
        }

        output
    }

    fn format_listing(&self, courses: &[Course]) -> String {
        courses
            .iter()
            .map(|course| self.format_course(course))
            .collect()
    }
}
