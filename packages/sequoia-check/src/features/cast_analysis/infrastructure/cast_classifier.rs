/*
 * Cast classification
 *
 * Decides whether an operation is an integral cast that reinterprets an
 * unsigned source as a signed result. Only the two cast spellings the IR
 * carries (implicit, C-style) are recognized; pointer and floating casts
 * never match.
 */

use crate::features::type_resolution::resolve_signedness;
use crate::shared::models::{CastKind, Function, Module, Operation, Signedness};

/// True iff `op` is an integral cast whose source resolves to Unsigned and
/// whose result resolves to Signed.
///
/// A NotApplicable resolution on either side (non-integer, unknown alias,
/// alias cycle) means no match.
pub fn is_unsigned_to_signed_cast(function: &Function, op: &Operation, module: &Module) -> bool {
    match op.kind.cast_kind() {
        Some(CastKind::Integral) => {}
        _ => return false,
    }
    let (Some(&source), Some(&result)) = (op.operands.first(), op.results.first()) else {
        return false;
    };
    let source_ty = function.value(source).ty.strip_elaborated();
    let result_ty = &function.value(result).ty;

    resolve_signedness(source_ty, module) == Signedness::Unsigned
        && resolve_signedness(result_ty, module) == Signedness::Signed
}
