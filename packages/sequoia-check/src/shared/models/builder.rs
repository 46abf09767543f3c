//! Function construction helper
//!
//! The only mutating path into the IR: appends values and operations while
//! keeping def-use back-edges consistent, so analyses never see a function
//! with stale user lists.

use super::ir::{CallTarget, CastKind, Function, OpId, OpKind, Operation, Value, ValueDef, ValueId};
use super::ty::Type;

pub struct FunctionBuilder {
    name: String,
    params: Vec<ValueId>,
    values: Vec<Value>,
    ops: Vec<Operation>,
}

impl FunctionBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            values: Vec::new(),
            ops: Vec::new(),
        }
    }

    /// Append a formal parameter
    pub fn param(&mut self, ty: Type) -> ValueId {
        let id = ValueId(self.values.len() as u32);
        self.values.push(Value {
            ty,
            def: ValueDef::Param(self.params.len()),
            users: Vec::new(),
        });
        self.params.push(id);
        id
    }

    /// Append an operation, wiring operand user lists and allocating one
    /// result value per result type
    pub fn op(&mut self, kind: OpKind, operands: Vec<ValueId>, result_tys: Vec<Type>) -> (OpId, Vec<ValueId>) {
        let op_id = OpId(self.ops.len() as u32);
        for &operand in &operands {
            self.values[operand.0 as usize].users.push(op_id);
        }
        let results: Vec<ValueId> = result_tys
            .into_iter()
            .map(|ty| {
                let id = ValueId(self.values.len() as u32);
                self.values.push(Value {
                    ty,
                    def: ValueDef::OpResult(op_id),
                    users: Vec::new(),
                });
                id
            })
            .collect();
        self.ops.push(Operation {
            kind,
            operands,
            results: results.clone(),
        });
        (op_id, results)
    }

    pub fn implicit_cast(&mut self, kind: CastKind, value: ValueId, to: Type) -> ValueId {
        let (_, results) = self.op(OpKind::ImplicitCast(kind), vec![value], vec![to]);
        results[0]
    }

    pub fn cstyle_cast(&mut self, kind: CastKind, value: ValueId, to: Type) -> ValueId {
        let (_, results) = self.op(OpKind::CStyleCast(kind), vec![value], vec![to]);
        results[0]
    }

    pub fn addi(&mut self, lhs: ValueId, rhs: ValueId, ty: Type) -> ValueId {
        let (_, results) = self.op(OpKind::AddI, vec![lhs, rhs], vec![ty]);
        results[0]
    }

    pub fn subi(&mut self, lhs: ValueId, rhs: ValueId, ty: Type) -> ValueId {
        let (_, results) = self.op(OpKind::SubI, vec![lhs, rhs], vec![ty]);
        results[0]
    }

    /// Direct call by symbol name
    pub fn call(&mut self, callee: impl Into<String>, args: Vec<ValueId>, result_tys: Vec<Type>) -> (OpId, Vec<ValueId>) {
        self.op(OpKind::Call(CallTarget::Direct(callee.into())), args, result_tys)
    }

    /// Call through a target the rule cannot resolve
    pub fn call_indirect(&mut self, args: Vec<ValueId>, result_tys: Vec<Type>) -> (OpId, Vec<ValueId>) {
        self.op(OpKind::Call(CallTarget::Indirect), args, result_tys)
    }

    /// Opaque operation tagged with a free-form name
    pub fn other(&mut self, tag: impl Into<String>, operands: Vec<ValueId>, result_tys: Vec<Type>) -> (OpId, Vec<ValueId>) {
        self.op(OpKind::Other(tag.into()), operands, result_tys)
    }

    pub fn finish(self) -> Function {
        Function {
            name: self.name,
            params: self.params,
            values: self.values,
            ops: self.ops,
        }
    }
}
