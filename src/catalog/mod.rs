/// Catalog layer - pure domain logic for the in-memory course catalog
///
/// `domain` holds the value types and the two keyed structures (exact-match
/// index and prerequisite graph); `services` holds the stable sorter and
/// the catalog composition root. Nothing in this layer performs I/O or
/// prints - loading and presentation are the adapters' responsibility.
pub mod domain;
pub mod services;
