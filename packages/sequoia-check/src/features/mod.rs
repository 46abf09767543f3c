//! Feature slices

pub mod call_resolution;
pub mod cast_analysis;
pub mod reachability;
pub mod sequoia;
pub mod type_resolution;
