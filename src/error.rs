// Decompiler and compiler error handling

use std::fmt;

/// Errors raised while rewriting flat operation streams into structured
/// control flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecompileError {
    /// A jump-carrying opcode's parameter list is shorter than its declared
    /// jump-index requirement. Malformed input; aborts the routine set.
    MalformedJumpParams { opcode: String, index: usize },

    /// A second marker was attached to a jump that already holds one. This
    /// is a defect in the structuring pass, not in the input data.
    MarkerConflict { jump: String },

    /// An accumulator operation was applied to a marker variant that does
    /// not accumulate.
    NotAnAccumulator { marker: String },

    /// A SwitchEnd label's matching switch-start vertex is missing from the
    /// graph. The CFG builder's contract is violated; not recoverable.
    SwitchStartNotFound { switch_id: u32 },
}

impl fmt::Display for DecompileError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DecompileError::MalformedJumpParams { opcode, index } => {
                write!(
                    f,
                    "The parameters for the OpCode {} must contain a jump address at index {}.",
                    opcode, index
                )
            }
            DecompileError::MarkerConflict { jump } => {
                write!(f, "Jumps can only have one or zero markers (jump: {})", jump)
            }
            DecompileError::NotAnAccumulator { marker } => {
                write!(f, "Marker {} does not accumulate merged constructs", marker)
            }
            DecompileError::SwitchStartNotFound { switch_id } => {
                write!(f, "Start for switch {} not found.", switch_id)
            }
        }
    }
}

impl std::error::Error for DecompileError {}

/// User-facing errors from the compile direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// An assignment handler was asked to emit its operation before a value
    /// was supplied.
    MissingValue(String),

    /// A handler was handed a value it cannot collect.
    UnsupportedValue(String),
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CompileError::MissingValue(what) => {
                write!(f, "No value for {} set.", what)
            }
            CompileError::UnsupportedValue(what) => {
                write!(f, "Cannot use {} here, an integer-like value is required", what)
            }
        }
    }
}

impl std::error::Error for CompileError {}
