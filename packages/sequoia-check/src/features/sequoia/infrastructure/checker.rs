/*
 * Sequoia rule driver
 *
 * Per function, per call site, per argument:
 * 1. The argument's producing operation must classify as an
 *    unsigned-to-signed integral cast
 * 2. The callee must resolve to a statically-named function
 * 3. The argument position must map to a formal parameter (positional)
 * 4. The parameter must reach pointer arithmetic through the callee's
 *    forward def-use graph
 *
 * Every unresolvable step skips the argument and nothing else; the rule
 * never fails and never mutates the module. Functions are independent, so
 * they are checked in parallel; the order-preserving collect keeps
 * diagnostic order deterministic for a fixed module.
 */

use rayon::prelude::*;
use tracing::{debug, info, trace};

use crate::features::call_resolution::resolve_callee;
use crate::features::cast_analysis::is_unsigned_to_signed_cast;
use crate::features::reachability::reaches_pointer_arithmetic;
use crate::features::sequoia::domain::Finding;
use crate::shared::models::{Function, Module, ValueId};

/// Short identifier the host driver registers the rule under
pub const RULE_ID: &str = "sequoia";

/// One-line description for the host driver's rule listing
pub const RULE_DESCRIPTION: &str =
    "Checks for unsigned values cast to signed call arguments that flow into pointer arithmetic";

#[derive(Debug, Default)]
pub struct SequoiaChecker;

impl SequoiaChecker {
    pub fn new() -> Self {
        Self
    }

    /// Run the rule over every function in the module.
    ///
    /// Read-only: repeated runs over an unchanged module produce identical
    /// findings in identical order.
    pub fn check_module(&self, module: &Module) -> Vec<Finding> {
        let findings: Vec<Vec<Finding>> = module
            .functions
            .par_iter()
            .map(|function| self.check_function(function, module))
            .collect();
        let findings: Vec<Finding> = findings.into_iter().flatten().collect();
        info!(
            module = %module.name,
            functions = module.functions.len(),
            findings = findings.len(),
            "sequoia check complete"
        );
        findings
    }

    fn check_function(&self, function: &Function, module: &Module) -> Vec<Finding> {
        let mut findings = Vec::new();
        for (op_id, call) in function.call_sites() {
            for (index, &arg) in call.operands.iter().enumerate() {
                // Arguments without a local producer (parameters, block
                // inputs) cannot carry the cast pattern
                let Some(producer) = function.defining_op(arg) else {
                    continue;
                };
                if !is_unsigned_to_signed_cast(function, function.op(producer), module) {
                    continue;
                }
                let Some(callee) = resolve_callee(call, module) else {
                    trace!(
                        caller = %function.name,
                        call = op_id.0,
                        "callee not statically resolvable, skipping call site"
                    );
                    continue;
                };
                let Some(&param) = callee.params.get(index) else {
                    debug!(
                        caller = %function.name,
                        callee = %callee.name,
                        index,
                        "argument index out of range of callee parameters, skipping"
                    );
                    continue;
                };
                if reaches_pointer_arithmetic(callee, param, module).is_none() {
                    continue;
                }
                if is_range_guarded(callee, param) {
                    continue;
                }
                findings.push(Finding::new(&function.name, &callee.name, index));
            }
        }
        findings
    }
}

/// Would a bounds check on `param` make the pointer arithmetic safe?
///
/// Not modeled: this always answers no, so a properly guarded parameter is
/// still reported. Known imprecision, kept as a stub on purpose.
fn is_range_guarded(_callee: &Function, _param: ValueId) -> bool {
    false
}
