mod course_catalog;
mod course_sorter;

pub use course_catalog::{CourseCatalog, LoadOutcome};
pub use course_sorter::CourseSorter;
