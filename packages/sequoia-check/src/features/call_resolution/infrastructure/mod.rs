mod callee_resolver;

pub use callee_resolver::resolve_callee;
