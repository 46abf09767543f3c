//! IR type model
//!
//! A small tagged variant covering exactly what the sequoia rule needs to
//! classify: integer signedness, pointer-ness, and typedef indirection.
//! Everything else collapses to `Other`.

use serde::{Deserialize, Serialize};

/// Signedness classification of a resolved type.
///
/// `NotApplicable` covers non-integer types and malformed input
/// (e.g. an alias cycle that never bottoms out).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Signedness {
    Unsigned,
    Signed,
    NotApplicable,
}

/// Declared type of an IR value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Type {
    /// Fixed-width integer with declared signedness
    Int { width: u32, signedness: Signedness },
    /// Pointer to a pointee type
    Pointer(Box<Type>),
    /// Named alias (typedef); resolved against the module's typedef table
    Alias(String),
    /// Transparent wrapper the frontend may add around a type
    /// (elaborated/qualified spelling); stripped before classification
    Elaborated(Box<Type>),
    /// Any type the rule does not care about
    Other,
}

impl Type {
    pub fn signed(width: u32) -> Self {
        Type::Int {
            width,
            signedness: Signedness::Signed,
        }
    }

    pub fn unsigned(width: u32) -> Self {
        Type::Int {
            width,
            signedness: Signedness::Unsigned,
        }
    }

    pub fn pointer_to(pointee: Type) -> Self {
        Type::Pointer(Box::new(pointee))
    }

    pub fn alias(name: impl Into<String>) -> Self {
        Type::Alias(name.into())
    }

    pub fn elaborated(inner: Type) -> Self {
        Type::Elaborated(Box::new(inner))
    }

    /// Strip transparent wrappers without touching aliases.
    ///
    /// Alias resolution needs the module's typedef table and lives in
    /// `features::type_resolution`.
    pub fn strip_elaborated(&self) -> &Type {
        let mut ty = self;
        while let Type::Elaborated(inner) = ty {
            ty = inner;
        }
        ty
    }
}
