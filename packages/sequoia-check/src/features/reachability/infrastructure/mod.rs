mod ptr_arith;

pub use ptr_arith::{is_pointer_arith, reaches_pointer_arithmetic};
