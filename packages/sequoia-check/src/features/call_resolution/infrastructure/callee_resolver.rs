//! Callee resolution
//!
//! Maps a call operation to its statically-named target. Indirect calls and
//! unresolved symbols yield None; the driver treats that as "cannot analyze
//! this call site", not as an error.

use crate::shared::models::{CallTarget, Function, Module, OpKind, Operation};

/// Look up the callee of a direct call in the module's symbol table.
pub fn resolve_callee<'m>(call: &Operation, module: &'m Module) -> Option<&'m Function> {
    match &call.kind {
        OpKind::Call(CallTarget::Direct(name)) => module.function_by_name(name),
        _ => None,
    }
}
