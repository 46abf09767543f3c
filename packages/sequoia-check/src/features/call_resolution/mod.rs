//! Callee resolution by symbolic name

pub mod infrastructure;

pub use infrastructure::resolve_callee;
