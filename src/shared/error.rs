use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts and CI systems to distinguish between
/// different kinds of termination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the session ended normally
    Success = 0,
    /// Application error (configuration error, unreadable input, I/O error, etc.)
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors for the course planner.
///
/// These cover the loader and configuration collaborators. The catalog
/// core itself has no fatal error states: lookup misses and empty loads
/// are encoded as return values, never as errors.
#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("Courses file not found: {path}\n\n💡 Hint: {suggestion}")]
    CoursesFileNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse courses file: {path} (line {line})\nDetails: {details}\n\n💡 Hint: Each line must contain at least a course number and a course name separated by the delimiter")]
    CoursesParseError {
        path: PathBuf,
        line: usize,
        details: String,
    },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    /// Validation error for configuration values
    #[error("Invalid configuration: {message}")]
    Validation { message: String },
}
