use crate::catalog::domain::Course;
use crate::ports::outbound::CourseSource;
use crate::shared::error::PlannerError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum file size for security (10 MB)
const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// A line holding only this token terminates the input
const END_OF_INPUT_SENTINEL: &str = "-1";

/// CourseFileReader adapter for loading courses from a text file
///
/// Implements the CourseSource port over a line-oriented file: each line
/// holds a course number, a course name, and zero or more prerequisite
/// numbers, split on the configured delimiter. Parsing stops at the `-1`
/// sentinel line. Blank lines are skipped; a line without a name field is
/// a parse error reported with its line number.
pub struct CourseFileReader {
    delimiter: String,
}

impl CourseFileReader {
    pub fn new(delimiter: String) -> Self {
        Self { delimiter }
    }

    /// Safely read a file with security checks:
    /// - Reject symbolic links
    /// - Check file size limits
    /// - Validate file is a regular file
    fn safe_read_file(&self, path: &Path) -> Result<String> {
        let metadata = fs::symlink_metadata(path).map_err(|e| PlannerError::FileReadError {
            path: path.to_path_buf(),
            details: format!("Failed to read file metadata: {}", e),
        })?;

        if metadata.is_symlink() {
            anyhow::bail!(
                "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
                path.display()
            );
        }

        if !metadata.is_file() {
            anyhow::bail!("{} is not a regular file", path.display());
        }

        let file_size = metadata.len();
        if file_size > MAX_FILE_SIZE {
            anyhow::bail!(
                "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
                path.display(),
                file_size,
                MAX_FILE_SIZE
            );
        }

        fs::read_to_string(path).map_err(|e| {
            PlannerError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }

    fn parse(&self, content: &str, path: &Path) -> Result<Vec<Course>> {
        let mut courses = Vec::new();

        for (index, raw_line) in content.lines().enumerate() {
            let line = raw_line.strip_suffix('\r').unwrap_or(raw_line);

            if line == END_OF_INPUT_SENTINEL {
                break;
            }
            if line.is_empty() {
                continue;
            }

            let mut fields = line.split(self.delimiter.as_str());
            let number = fields.next().unwrap_or_default();
            let Some(name) = fields.next() else {
                return Err(PlannerError::CoursesParseError {
                    path: path.to_path_buf(),
                    line: index + 1,
                    details: "line has no course name field".to_string(),
                }
                .into());
            };

            if number.is_empty() {
                return Err(PlannerError::CoursesParseError {
                    path: path.to_path_buf(),
                    line: index + 1,
                    details: "line has an empty course number".to_string(),
                }
                .into());
            }

            let prerequisites: Vec<String> = fields.map(str::to_string).collect();
            courses.push(Course::new(
                number.to_string(),
                name.to_string(),
                prerequisites,
            ));
        }

        Ok(courses)
    }
}

impl CourseSource for CourseFileReader {
    fn read_courses(&self, path: &Path) -> Result<Vec<Course>> {
        if !path.exists() {
            return Err(PlannerError::CoursesFileNotFound {
                path: path.to_path_buf(),
                suggestion: format!(
                    "The courses file \"{}\" does not exist.\n   \
                     Please check the path, or point at the right file with the --path option.",
                    path.display()
                ),
            }
            .into());
        }

        let content = self.safe_read_file(path)?;
        self.parse(&content, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_courses(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("courses.txt");
        fs::write(&path, content).unwrap();
        path
    }

    fn reader() -> CourseFileReader {
        CourseFileReader::new(",".to_string())
    }

    #[test]
    fn test_read_courses_success() {
        let dir = TempDir::new().unwrap();
        let path = write_courses(
            &dir,
            "CSCI100,Introduction to Computer Science\nCSCI200,Data Structures,CSCI100\n",
        );

        let courses = reader().read_courses(&path).unwrap();

        assert_eq!(courses.len(), 2);
        assert_eq!(courses[0].number(), "CSCI100");
        assert_eq!(courses[0].name(), "Introduction to Computer Science");
        assert!(courses[0].prerequisites().is_empty());
        assert_eq!(courses[1].prerequisites(), &["CSCI100".to_string()]);
    }

    #[test]
    fn test_read_courses_stops_at_sentinel() {
        let dir = TempDir::new().unwrap();
        let path = write_courses(
            &dir,
            "CSCI100,Introduction to Computer Science\n-1\nCSCI200,Data Structures\n",
        );

        let courses = reader().read_courses(&path).unwrap();
        assert_eq!(courses.len(), 1);
    }

    #[test]
    fn test_read_courses_skips_blank_lines_and_crlf() {
        let dir = TempDir::new().unwrap();
        let path = write_courses(
            &dir,
            "CSCI100,Introduction to Computer Science\r\n\r\nCSCI200,Data Structures,CSCI100\r\n",
        );

        let courses = reader().read_courses(&path).unwrap();
        assert_eq!(courses.len(), 2);
        assert_eq!(courses[1].name(), "Data Structures");
    }

    #[test]
    fn test_read_courses_empty_file_yields_no_records() {
        let dir = TempDir::new().unwrap();
        let path = write_courses(&dir, "");

        let courses = reader().read_courses(&path).unwrap();
        assert!(courses.is_empty());
    }

    #[test]
    fn test_read_courses_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.txt");

        let result = reader().read_courses(&path);

        assert!(result.is_err());
        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Courses file not found"));
        assert!(err_string.contains("--path"));
    }

    #[test]
    fn test_read_courses_line_without_name_field() {
        let dir = TempDir::new().unwrap();
        let path = write_courses(&dir, "CSCI100,Introduction\nCSCI200\n");

        let result = reader().read_courses(&path);

        assert!(result.is_err());
        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("line 2"));
        assert!(err_string.contains("no course name field"));
    }

    #[test]
    fn test_read_courses_empty_course_number() {
        let dir = TempDir::new().unwrap();
        let path = write_courses(&dir, ",Nameless Course\n");

        let result = reader().read_courses(&path);

        assert!(result.is_err());
        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("empty course number"));
    }

    #[test]
    fn test_read_courses_custom_delimiter() {
        let dir = TempDir::new().unwrap();
        let path = write_courses(&dir, "CSCI200;Data Structures;CSCI100;MATH101\n");

        let courses = CourseFileReader::new(";".to_string())
            .read_courses(&path)
            .unwrap();

        assert_eq!(courses.len(), 1);
        assert_eq!(
            courses[0].prerequisites(),
            &["CSCI100".to_string(), "MATH101".to_string()]
        );
    }

    #[test]
    fn test_read_courses_keeps_empty_prerequisite_fields() {
        // Trailing delimiters produce empty prerequisite entries; they are
        // dangling references, which the graph represents without error
        let dir = TempDir::new().unwrap();
        let path = write_courses(&dir, "CSCI200,Data Structures,CSCI100,\n");

        let courses = reader().read_courses(&path).unwrap();
        assert_eq!(
            courses[0].prerequisites(),
            &["CSCI100".to_string(), "".to_string()]
        );
    }

    #[test]
    fn test_read_courses_rejects_directory() {
        let dir = TempDir::new().unwrap();

        let result = reader().read_courses(dir.path());

        assert!(result.is_err());
        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("not a regular file"));
    }
}
