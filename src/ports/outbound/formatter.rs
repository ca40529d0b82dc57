use crate::catalog::domain::Course;

/// CatalogFormatter port for rendering courses as display text
///
/// The catalog core never prints; adapters implementing this port decide
/// how a record or a listing looks. Formatting is infallible - it only
/// assembles strings.
pub trait CatalogFormatter {
    /// Renders a single course record with its prerequisites
    fn format_course(&self, course: &Course) -> String;

    /// Renders the full canonical listing
    fn format_listing(&self, courses: &[Course]) -> String;
}
