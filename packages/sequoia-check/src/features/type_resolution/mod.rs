//! Type resolution: alias/wrapper stripping and signedness classification

pub mod infrastructure;

pub use infrastructure::{is_pointer_type, resolve_signedness, resolve_underlying};
