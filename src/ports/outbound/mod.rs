/// Outbound ports (Driven ports) - Infrastructure interfaces
pub mod course_source;
pub mod formatter;
pub mod output_presenter;

pub use course_source::CourseSource;
pub use formatter::CatalogFormatter;
pub use output_presenter::OutputPresenter;
