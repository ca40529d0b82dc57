/// Integration tests for the application layer
mod test_utilities;

use std::path::Path;
use test_utilities::mocks::*;

use course_planner::prelude::*;

fn course(number: &str, name: &str, prerequisites: &[&str]) -> Course {
    Course::new(
        number.to_string(),
        name.to_string(),
        prerequisites.iter().map(|p| p.to_string()).collect(),
    )
}

fn sample_courses() -> Vec<Course> {
    vec![
        course("MATH201", "Discrete Mathematics", &[]),
        course("CSCI300", "Introduction to Algorithms", &["CSCI200", "MATH201"]),
        course("CSCI101", "Introduction to Programming in C++", &["CSCI100"]),
        course("CSCI100", "Introduction to Computer Science", &[]),
        course("CSCI200", "Data Structures", &["CSCI101"]),
    ]
}

#[test]
fn test_load_happy_path() {
    let presenter = MockPresenter::new();
    let mut session = BrowseCatalogUseCase::new(
        MockCourseSource::new(sample_courses()),
        PlainTextFormatter::new(),
        presenter.clone(),
    );

    let outcome = session.load(Path::new("courses.txt")).unwrap();

    assert_eq!(outcome, LoadOutcome::Loaded(5));
    assert!(presenter.transcript().contains("Data successfully loaded."));
}

#[test]
fn test_listing_is_sorted_by_course_number() {
    let presenter = MockPresenter::new();
    let mut session = BrowseCatalogUseCase::new(
        MockCourseSource::new(sample_courses()),
        PlainTextFormatter::new(),
        presenter.clone(),
    );

    session.load(Path::new("courses.txt")).unwrap();
    session.print_listing().unwrap();

    let transcript = presenter.transcript();
    let positions: Vec<usize> = ["CSCI100", "CSCI101", "CSCI200", "CSCI300", "MATH201"]
        .iter()
        .map(|number| transcript.find(number).unwrap())
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_listing_before_load_asks_for_data() {
    let presenter = MockPresenter::new();
    let session = BrowseCatalogUseCase::new(
        MockCourseSource::new(sample_courses()),
        PlainTextFormatter::new(),
        presenter.clone(),
    );

    session.print_listing().unwrap();

    assert!(presenter
        .transcript()
        .contains("No courses loaded. Please load data first."));
}

#[test]
fn test_print_course_found_with_prerequisites() {
    let presenter = MockPresenter::new();
    let mut session = BrowseCatalogUseCase::new(
        MockCourseSource::new(sample_courses()),
        PlainTextFormatter::new(),
        presenter.clone(),
    );

    session.load(Path::new("courses.txt")).unwrap();
    session.print_course("CSCI300").unwrap();

    let transcript = presenter.transcript();
    assert!(transcript.contains("CSCI300, Introduction to Algorithms"));
    assert!(transcript.contains("Prerequisites: CSCI200, MATH201"));
}

#[test]
fn test_print_course_lookup_is_case_insensitive() {
    let presenter = MockPresenter::new();
    let mut session = BrowseCatalogUseCase::new(
        MockCourseSource::new(sample_courses()),
        PlainTextFormatter::new(),
        presenter.clone(),
    );

    session.load(Path::new("courses.txt")).unwrap();
    session.print_course("csci200").unwrap();

    // Output keeps the casing the record was loaded with
    assert!(presenter.transcript().contains("CSCI200, Data Structures"));
}

#[test]
fn test_print_course_not_found() {
    let presenter = MockPresenter::new();
    let mut session = BrowseCatalogUseCase::new(
        MockCourseSource::new(sample_courses()),
        PlainTextFormatter::new(),
        presenter.clone(),
    );

    session.load(Path::new("courses.txt")).unwrap();
    session.print_course("CSCI999").unwrap();

    assert!(presenter.transcript().contains("Course CSCI999 not found."));
}

#[test]
fn test_load_empty_source_reports_empty_outcome() {
    let presenter = MockPresenter::new();
    let mut session = BrowseCatalogUseCase::new(
        MockCourseSource::new(vec![]),
        PlainTextFormatter::new(),
        presenter.clone(),
    );

    let outcome = session.load(Path::new("courses.txt")).unwrap();

    assert_eq!(outcome, LoadOutcome::Empty);
    assert!(presenter
        .transcript()
        .contains("Courses file appears to be empty."));
    assert!(!session.catalog().is_loaded());
}

#[test]
fn test_load_source_failure_propagates() {
    let presenter = MockPresenter::new();
    let mut session = BrowseCatalogUseCase::new(
        MockCourseSource::with_failure(),
        PlainTextFormatter::new(),
        presenter.clone(),
    );

    let result = session.load(Path::new("courses.txt"));

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("Mock"));
    // Nothing is presented when the source itself fails
    assert!(presenter.messages().is_empty());
}

#[test]
fn test_unlocked_courses_reachable_through_session_catalog() {
    let presenter = MockPresenter::new();
    let mut session = BrowseCatalogUseCase::new(
        MockCourseSource::new(vec![
            course("CSCI100", "Introduction to Computer Science", &[]),
            course("CSCI101", "Introduction to Programming in C++", &["CSCI100"]),
            course("CSCI200", "Data Structures", &["CSCI101"]),
        ]),
        PlainTextFormatter::new(),
        presenter,
    );

    session.load(Path::new("courses.txt")).unwrap();

    let unlocked = session.catalog().graph().unlocked_after("CSCI100");
    assert_eq!(unlocked, vec![CourseKey::normalize("CSCI101")]);
}
