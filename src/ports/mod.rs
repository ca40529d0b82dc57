/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound (driven) ports describe the infrastructure the application
/// core depends on: the courses file source, the formatter, and the
/// output destination.
pub mod outbound;
