mod cast_classifier;

pub use cast_classifier::is_unsigned_to_signed_cast;
