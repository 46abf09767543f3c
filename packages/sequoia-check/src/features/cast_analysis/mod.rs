//! Cast classification: unsigned-to-signed integral casts

pub mod infrastructure;

pub use infrastructure::is_unsigned_to_signed_cast;
