pub mod mock_course_source;
pub mod mock_presenter;

pub use mock_course_source::MockCourseSource;
pub use mock_presenter::MockPresenter;
