//! Shared models

mod builder;
mod ir;
mod ty;

pub use builder::FunctionBuilder;
pub use ir::{
    CallTarget, CastKind, Function, Module, OpId, OpKind, Operation, Value, ValueDef, ValueId,
};
pub use ty::{Signedness, Type};
