//! Forward def-use reachability into pointer arithmetic

pub mod infrastructure;

pub use infrastructure::{is_pointer_arith, reaches_pointer_arithmetic};
