/*
 * sequoia-check - static detection of the sequoia bug pattern
 *
 * Flags call sites where an unsigned value is narrowed to a signed
 * argument and the matching formal parameter flows, directly or
 * transitively, into pointer arithmetic inside the callee.
 *
 * Feature-First Hexagonal Architecture:
 * - shared/   : IR model (Module, Function, Operation, Value, Type)
 * - features/ : vertical slices (type_resolution -> cast_analysis ->
 *               call_resolution -> reachability -> sequoia driver)
 */

#![allow(clippy::new_without_default)] // Default impl not always needed
#![allow(clippy::module_inception)] // Module naming intentional

pub mod errors;
pub mod features;
pub mod shared;

pub use errors::{Result, SequoiaError};
pub use features::sequoia::{
    BufferSink, CheckSequoiaUseCase, DiagnosticSink, Finding, SequoiaChecker, StderrSink,
    RULE_DESCRIPTION, RULE_ID,
};
pub use shared::models::{
    CallTarget, CastKind, Function, FunctionBuilder, Module, OpId, OpKind, Operation, Signedness,
    Type, Value, ValueDef, ValueId,
};
