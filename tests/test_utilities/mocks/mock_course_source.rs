use course_planner::prelude::*;
use std::path::Path;

/// Mock CourseSource for testing
pub struct MockCourseSource {
    pub courses: Vec<Course>,
    pub should_fail: bool,
}

impl MockCourseSource {
    pub fn new(courses: Vec<Course>) -> Self {
        Self {
            courses,
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            courses: Vec::new(),
            should_fail: true,
        }
    }
}

impl CourseSource for MockCourseSource {
    fn read_courses(&self, _path: &Path) -> Result<Vec<Course>> {
        if self.should_fail {
            anyhow::bail!("Mock courses file read failure");
        }
        Ok(self.courses.clone())
    }
}
