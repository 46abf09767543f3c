mod signedness_resolver;

pub use signedness_resolver::{is_pointer_type, resolve_signedness, resolve_underlying};
