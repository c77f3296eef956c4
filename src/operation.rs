use indexmap::IndexMap;
use std::fmt::{Display, Formatter};

/// An opcode as it appears in a compiled ssb script.
///
/// Real opcodes carry the non-negative id assigned by the binary format.
/// Nodes synthesized during decompilation (labels, rewritten jumps) carry a
/// negative id so they can never collide with anything read from the binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpCode {
    pub id: i32,
    pub name: String,
}

impl OpCode {
    pub fn new(id: i32, name: &str) -> Self {
        OpCode {
            id,
            name: name.to_string(),
        }
    }

    /// Opcode for a node generated by the decompiler itself.
    pub fn synthesized(name: String) -> Self {
        OpCode { id: -1, name }
    }
}

impl Display for OpCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A single operation parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Param {
    /// Plain signed integer (memory offsets, values, variable ids).
    Int(i32),
    /// Named engine constant.
    Constant(String),
    /// String argument (dialogue references and the like).
    Str(String),
}

impl Param {
    /// Integer-like params are the ones assignment handlers may collect.
    pub fn is_integer_like(&self) -> bool {
        matches!(self, Param::Int(_) | Param::Constant(_))
    }
}

impl Display for Param {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Param::Int(v) => write!(f, "{}", v),
            Param::Constant(c) => write!(f, "{}", c),
            Param::Str(s) => write!(f, "'{}'", s),
        }
    }
}

/// Operation parameters, either positional or keyed by argument name.
///
/// Some binary readers emit named arguments; the declared order of a named
/// map is significant and must survive materialization to a value sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpParams {
    Positional(Vec<Param>),
    Named(IndexMap<String, Param>),
}

impl OpParams {
    /// Materialize the parameter values in declared order.
    pub fn values(&self) -> Vec<Param> {
        match self {
            OpParams::Positional(v) => v.clone(),
            OpParams::Named(m) => m.values().cloned().collect(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            OpParams::Positional(v) => v.len(),
            OpParams::Named(m) => m.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One flat operation as read from a compiled script routine.
///
/// `offset` is the address of the operation in the original binary, or -1
/// for nodes synthesized during decompilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    pub offset: i32,
    pub op_code: OpCode,
    pub params: OpParams,
}

impl Operation {
    pub fn new(offset: i32, op_code: OpCode, params: Vec<Param>) -> Self {
        Operation {
            offset,
            op_code,
            params: OpParams::Positional(params),
        }
    }

    pub fn with_named_params(offset: i32, op_code: OpCode, params: IndexMap<String, Param>) -> Self {
        Operation {
            offset,
            op_code,
            params: OpParams::Named(params),
        }
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let params = self
            .params
            .values()
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        if self.offset < 0 {
            write!(f, "<gen>: {}({})", self.op_code, params)
        } else {
            write!(f, "{:#07x}: {}({})", self.offset, self.op_code, params)
        }
    }
}
