pub mod course;
pub mod course_index;
pub mod prerequisite_graph;

pub use course::{Course, CourseKey};
pub use course_index::CourseIndex;
pub use prerequisite_graph::PrerequisiteGraph;
