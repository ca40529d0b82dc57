/// Filesystem adapters for reading course data
mod course_file_reader;

pub use course_file_reader::CourseFileReader;
