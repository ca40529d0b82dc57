/// Shared utilities - error types and the crate-wide Result alias
pub mod error;
pub mod result;

pub use result::Result;
