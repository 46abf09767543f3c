/*
 * In-memory IR consumed by the sequoia rule
 *
 * Arena layout:
 * - A Function owns flat Vec arenas of Values and Operations
 * - ValueId/OpId are indices into those arenas
 * - Value.users is the forward def-use edge set (operations that consume
 *   the value as an operand); it is a back-reference derived from operand
 *   lists, never serialized, and rebuilt after deserialization
 *
 * The rule only reads this IR. Construction goes through FunctionBuilder
 * or the JSON loader; both leave the def-use back-edges consistent.
 */

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::ty::Type;
use crate::errors::{Result, SequoiaError};

/// Index of a Value in its function's value arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValueId(pub u32);

/// Index of an Operation in its function's op arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OpId(pub u32);

/// Cast sub-kind carried by cast operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CastKind {
    Integral,
    Pointer,
    Floating,
    Other,
}

/// Call target: direct symbolic reference or something we cannot name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CallTarget {
    Direct(String),
    Indirect,
}

/// Operation kind tag.
///
/// Closed set: the rule recognizes casts, integer add/sub and calls;
/// every other operation falls into `Other` and is never interesting
/// on its own (it still propagates data through the def-use graph).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpKind {
    ImplicitCast(CastKind),
    CStyleCast(CastKind),
    AddI,
    SubI,
    Call(CallTarget),
    Other(String),
}

impl OpKind {
    /// Cast sub-kind if this is a cast operation of either spelling
    pub fn cast_kind(&self) -> Option<CastKind> {
        match self {
            OpKind::ImplicitCast(kind) | OpKind::CStyleCast(kind) => Some(*kind),
            _ => None,
        }
    }

    pub fn is_call(&self) -> bool {
        matches!(self, OpKind::Call(_))
    }
}

/// Where a value comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueDef {
    /// Formal parameter at the given position
    Param(usize),
    /// Result of an operation in the same function
    OpResult(OpId),
}

/// An SSA-like value: one declared type, one definition, many users
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Value {
    pub ty: Type,
    pub def: ValueDef,
    /// Operations consuming this value as an operand (forward def-use edges).
    /// Rebuilt from operand lists; not part of the serialized form.
    #[serde(skip)]
    pub users: Vec<OpId>,
}

/// A typed IR node with ordered operands and results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Operation {
    pub kind: OpKind,
    pub operands: Vec<ValueId>,
    pub results: Vec<ValueId>,
}

/// A named function: ordered formal parameters plus a body of operations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Function {
    pub name: String,
    pub params: Vec<ValueId>,
    pub values: Vec<Value>,
    pub ops: Vec<Operation>,
}

impl Function {
    pub fn value(&self, id: ValueId) -> &Value {
        &self.values[id.0 as usize]
    }

    pub fn op(&self, id: OpId) -> &Operation {
        &self.ops[id.0 as usize]
    }

    /// Operation that produced `id`, or None for formal parameters
    pub fn defining_op(&self, id: ValueId) -> Option<OpId> {
        match self.value(id).def {
            ValueDef::OpResult(op) => Some(op),
            ValueDef::Param(_) => None,
        }
    }

    /// Call operations in arena (encounter) order
    pub fn call_sites(&self) -> impl Iterator<Item = (OpId, &Operation)> {
        self.ops
            .iter()
            .enumerate()
            .filter(|(_, op)| op.kind.is_call())
            .map(|(idx, op)| (OpId(idx as u32), op))
    }

    /// Recompute every value's user list from operand lists.
    ///
    /// Users are appended in op order, so traversal order over a fixed
    /// function is deterministic.
    pub fn rebuild_def_use(&mut self) {
        for value in &mut self.values {
            value.users.clear();
        }
        for (idx, op) in self.ops.iter().enumerate() {
            for &operand in &op.operands {
                self.values[operand.0 as usize].users.push(OpId(idx as u32));
            }
        }
    }
}

/// Top-level container: functions plus the typedef table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Module {
    pub name: String,
    pub functions: Vec<Function>,
    /// typedef name -> underlying type (may itself be an alias)
    #[serde(default)]
    pub typedefs: FxHashMap<String, Type>,
    /// function name -> index into `functions`
    #[serde(skip)]
    symbols: FxHashMap<String, usize>,
}

impl Module {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            functions: Vec::new(),
            typedefs: FxHashMap::default(),
            symbols: FxHashMap::default(),
        }
    }

    pub fn add_typedef(&mut self, name: impl Into<String>, ty: Type) {
        self.typedefs.insert(name.into(), ty);
    }

    pub fn add_function(&mut self, function: Function) {
        self.symbols
            .insert(function.name.clone(), self.functions.len());
        self.functions.push(function);
    }

    /// Symbol-table lookup by function name
    pub fn function_by_name(&self, name: &str) -> Option<&Function> {
        self.symbols.get(name).map(|&idx| &self.functions[idx])
    }

    pub fn typedef(&self, name: &str) -> Option<&Type> {
        self.typedefs.get(name)
    }

    /// Rebuild the symbol index and all def-use back-edges.
    ///
    /// Required after deserialization; the builder path keeps both
    /// consistent incrementally.
    pub fn rebuild_indexes(&mut self) {
        self.symbols.clear();
        for (idx, function) in self.functions.iter().enumerate() {
            self.symbols.insert(function.name.clone(), idx);
        }
        for function in &mut self.functions {
            function.rebuild_def_use();
        }
    }

    /// Check that every id in the module points into its arena.
    ///
    /// Deserialized input can carry arbitrary indices; arena accessors
    /// index directly, so a module must be validated before any derived
    /// state is rebuilt or any analysis runs.
    fn validate_ids(&self) -> Result<()> {
        for function in &self.functions {
            let num_values = function.values.len();
            let num_ops = function.ops.len();
            let bad_id = |what: &str, id: u32| {
                SequoiaError::Load(format!(
                    "function `{}`: {} id {} out of range",
                    function.name, what, id
                ))
            };
            for &param in &function.params {
                if param.0 as usize >= num_values {
                    return Err(bad_id("parameter value", param.0));
                }
            }
            for op in &function.ops {
                for &operand in &op.operands {
                    if operand.0 as usize >= num_values {
                        return Err(bad_id("operand value", operand.0));
                    }
                }
                for &result in &op.results {
                    if result.0 as usize >= num_values {
                        return Err(bad_id("result value", result.0));
                    }
                }
            }
            for value in &function.values {
                if let ValueDef::OpResult(op) = value.def {
                    if op.0 as usize >= num_ops {
                        return Err(bad_id("defining op", op.0));
                    }
                }
            }
        }
        Ok(())
    }

    /// Load a module from its JSON form and restore derived state.
    ///
    /// Malformed input (bad JSON, out-of-range ids) is a load error, never
    /// a panic.
    pub fn from_json_str(json: &str) -> Result<Module> {
        let mut module: Module = serde_json::from_str(json)
            .map_err(|err| SequoiaError::Load(format!("invalid module JSON: {}", err)))?;
        module.validate_ids()?;
        module.rebuild_indexes();
        Ok(module)
    }

    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|err| SequoiaError::Load(format!("serialize failed: {}", err)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_add_function() -> Function {
        Function {
            name: "f".to_string(),
            params: vec![ValueId(0), ValueId(1)],
            values: vec![
                Value {
                    ty: Type::signed(32),
                    def: ValueDef::Param(0),
                    users: Vec::new(),
                },
                Value {
                    ty: Type::signed(32),
                    def: ValueDef::Param(1),
                    users: Vec::new(),
                },
                Value {
                    ty: Type::signed(32),
                    def: ValueDef::OpResult(OpId(0)),
                    users: Vec::new(),
                },
            ],
            ops: vec![Operation {
                kind: OpKind::AddI,
                operands: vec![ValueId(0), ValueId(1)],
                results: vec![ValueId(2)],
            }],
        }
    }

    #[test]
    fn test_rebuild_def_use() {
        let mut function = single_add_function();
        function.rebuild_def_use();

        assert_eq!(function.value(ValueId(0)).users, vec![OpId(0)]);
        assert_eq!(function.value(ValueId(1)).users, vec![OpId(0)]);
        assert!(function.value(ValueId(2)).users.is_empty());
    }

    #[test]
    fn test_symbol_lookup() {
        let mut module = Module::new("m");
        module.add_function(single_add_function());

        assert!(module.function_by_name("f").is_some());
        assert!(module.function_by_name("g").is_none());
    }

    #[test]
    fn test_load_rejects_out_of_range_operand() {
        let json = r#"{
            "name": "m",
            "functions": [{
                "name": "f",
                "params": [],
                "values": [
                    { "ty": { "Int": { "width": 32, "signedness": "Signed" } },
                      "def": { "OpResult": 0 } }
                ],
                "ops": [
                    { "kind": "AddI", "operands": [99], "results": [0] }
                ]
            }]
        }"#;

        let err = Module::from_json_str(json).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("out of range"), "unexpected error: {}", msg);
        assert!(msg.contains("99"), "unexpected error: {}", msg);
    }

    #[test]
    fn test_load_rejects_out_of_range_defining_op() {
        let json = r#"{
            "name": "m",
            "functions": [{
                "name": "f",
                "params": [0],
                "values": [
                    { "ty": { "Int": { "width": 32, "signedness": "Signed" } },
                      "def": { "OpResult": 7 } }
                ],
                "ops": []
            }]
        }"#;

        assert!(Module::from_json_str(json).is_err());
    }

    #[test]
    fn test_load_rejects_out_of_range_param() {
        let json = r#"{
            "name": "m",
            "functions": [{
                "name": "f",
                "params": [3],
                "values": [],
                "ops": []
            }]
        }"#;

        assert!(Module::from_json_str(json).is_err());
    }

    #[test]
    fn test_json_round_trip_restores_users() {
        let mut module = Module::new("m");
        let mut function = single_add_function();
        function.rebuild_def_use();
        module.add_function(function);

        let json = module.to_json_string().unwrap();
        let restored = Module::from_json_str(&json).unwrap();

        let f = restored.function_by_name("f").unwrap();
        assert_eq!(f.value(ValueId(0)).users, vec![OpId(0)]);
    }
}
