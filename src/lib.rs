//! course-planner - interactive course catalog browser
//!
//! This library indexes a course catalog for case-insensitive lookup,
//! models prerequisite relationships as a directed graph, and produces a
//! deterministically sorted listing, following hexagonal architecture.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Catalog Layer** (`catalog`): Pure domain structures and services
//! - **Application Layer** (`application`): Use cases coordinating a session
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common error types and the Result alias
//!
//! # Example
//!
//! ```no_run
//! use course_planner::prelude::*;
//! use std::path::Path;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let source = CourseFileReader::new(",".to_string());
//! let formatter = PlainTextFormatter::new();
//! let presenter = StdoutPresenter::new();
//!
//! // Create the session use case
//! let mut session = BrowseCatalogUseCase::new(source, formatter, presenter);
//!
//! // Load, list, and look up
//! session.load(Path::new("courses.txt"))?;
//! session.print_listing()?;
//! session.print_course("CSCI200")?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StdoutPresenter;
    pub use crate::adapters::outbound::filesystem::CourseFileReader;
    pub use crate::adapters::outbound::formatters::PlainTextFormatter;
    pub use crate::application::use_cases::BrowseCatalogUseCase;
    pub use crate::catalog::domain::{Course, CourseIndex, CourseKey, PrerequisiteGraph};
    pub use crate::catalog::services::{CourseCatalog, CourseSorter, LoadOutcome};
    pub use crate::cli::{Args, MenuChoice};
    pub use crate::config::PlannerSettings;
    pub use crate::ports::outbound::{CatalogFormatter, CourseSource, OutputPresenter};
    pub use crate::shared::Result;
}
