/*
 * Pointer-arithmetic reachability
 *
 * Breadth-first walk over the forward def-use graph, seeded with the direct
 * users of a start value, looking for an integer add/sub with at least one
 * pointer-typed operand.
 *
 * Loops in source code put back-edges into the user graph, so the frontier
 * is guarded by a visited set over operation ids; each operation is tested
 * at most once and the walk is linear in the reachable subgraph.
 *
 * The walk never leaves the current function. A value escaping through a
 * further call is out of scope for this rule.
 */

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use crate::features::type_resolution::is_pointer_type;
use crate::shared::models::{Function, Module, OpId, OpKind, Operation, ValueId};

/// Integer add/sub with a pointer-typed operand (after alias stripping).
pub fn is_pointer_arith(function: &Function, op: &Operation, module: &Module) -> bool {
    if !matches!(op.kind, OpKind::AddI | OpKind::SubI) {
        return false;
    }
    op.operands
        .iter()
        .any(|&operand| is_pointer_type(&function.value(operand).ty, module))
}

/// First pointer-arithmetic operation reachable from `start` through the
/// forward def-use graph, or None.
pub fn reaches_pointer_arithmetic(
    function: &Function,
    start: ValueId,
    module: &Module,
) -> Option<OpId> {
    let mut visited: FxHashSet<OpId> = FxHashSet::default();
    let mut frontier: VecDeque<OpId> = function.value(start).users.iter().copied().collect();

    while let Some(op_id) = frontier.pop_front() {
        if !visited.insert(op_id) {
            continue;
        }
        let op = function.op(op_id);
        if is_pointer_arith(function, op, module) {
            return Some(op_id);
        }
        for &result in &op.results {
            frontier.extend(function.value(result).users.iter().copied());
        }
    }
    None
}
