/// Application layer - Use cases orchestrating the catalog
///
/// This layer coordinates the catalog core with infrastructure through
/// the outbound ports; it owns no I/O of its own.
pub mod use_cases;
