//! Structural markers attached to labels and jumps during structuring.
//!
//! Label markers describe what construct ends or falls through at a label;
//! jump markers describe which construct a rewritten jump represents. Both
//! are closed sets; the structuring pass matches exhaustively on them.

use crate::error::DecompileError;
use crate::operation::Operation;
use std::fmt::{Display, Formatter};

/// Marker for a label: the construct that ends or falls through there.
/// A label with no marker is just a linear join point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelMarker {
    IfEnd { if_id: u32 },
    SwitchEnd { switch_id: u32 },
    SwitchFallthrough,
    ForeverStart { loop_id: u32 },
    ForeverEnd { loop_id: u32 },
}

impl Display for LabelMarker {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LabelMarker::IfEnd { if_id } => write!(f, "IF({})", if_id),
            LabelMarker::SwitchEnd { switch_id } => write!(f, "SWITCH({})", switch_id),
            LabelMarker::SwitchFallthrough => write!(f, "FALL"),
            LabelMarker::ForeverStart { loop_id } => write!(f, "LOOP({})", loop_id),
            LabelMarker::ForeverEnd { loop_id } => write!(f, "END_LOOP({})", loop_id),
        }
    }
}

/// Marker for a jump node: the construct the jump represents.
///
/// The multi variants accumulate, in encounter order, every original
/// operation that was merged into the compound construct, so the printing
/// stage can regenerate the full boolean expression or case list. The
/// stored operations are the ORIGINAL opcodes (the jump's root, not the
/// rewritten jump itself).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JumpMarker {
    IfStart {
        if_id: u32,
        negated: bool,
    },
    /// Several if-jumps targeting the same label, read as one compound
    /// (logical-OR) condition. Each entry is (original op, negated).
    MultiIfStart {
        if_id: u32,
        conditions: Vec<(Operation, bool)>,
    },
    SwitchStart {
        switch_id: u32,
    },
    /// Several switch openers merged into one multi-case construct.
    MultiSwitchStart {
        switch_id: u32,
        switches: Vec<Operation>,
    },
    ForeverContinue {
        loop_id: u32,
    },
    ForeverBreak {
        loop_id: u32,
    },
}

impl JumpMarker {
    /// The switch id carried by switch-start variants.
    pub fn switch_id(&self) -> Option<u32> {
        match self {
            JumpMarker::SwitchStart { switch_id }
            | JumpMarker::MultiSwitchStart { switch_id, .. } => Some(*switch_id),
            _ => None,
        }
    }

    pub fn if_id(&self) -> Option<u32> {
        match self {
            JumpMarker::IfStart { if_id, .. } | JumpMarker::MultiIfStart { if_id, .. } => {
                Some(*if_id)
            }
            _ => None,
        }
    }

    /// Append another merged if condition to a MultiIfStart.
    pub fn push_if(&mut self, op: Operation, negated: bool) -> Result<(), DecompileError> {
        match self {
            JumpMarker::MultiIfStart { conditions, .. } => {
                conditions.push((op, negated));
                Ok(())
            }
            other => Err(DecompileError::NotAnAccumulator {
                marker: other.to_string(),
            }),
        }
    }

    /// Append another merged switch opener to a MultiSwitchStart.
    pub fn push_switch(&mut self, op: Operation) -> Result<(), DecompileError> {
        match self {
            JumpMarker::MultiSwitchStart { switches, .. } => {
                switches.push(op);
                Ok(())
            }
            other => Err(DecompileError::NotAnAccumulator {
                marker: other.to_string(),
            }),
        }
    }

    /// Number of switch openers merged into a MultiSwitchStart; 1 for a
    /// plain SwitchStart.
    pub fn number_of_switches(&self) -> usize {
        match self {
            JumpMarker::MultiSwitchStart { switches, .. } => switches.len(),
            JumpMarker::SwitchStart { .. } => 1,
            _ => 0,
        }
    }
}

impl Display for JumpMarker {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            JumpMarker::IfStart { if_id, negated } => {
                write!(f, "IF{}({})", if *negated { " NOT" } else { "" }, if_id)
            }
            JumpMarker::MultiIfStart { if_id, conditions } => {
                write!(f, "MIF({}[{}])", if_id, conditions.len())
            }
            JumpMarker::SwitchStart { switch_id } => write!(f, "SWITCH({})", switch_id),
            JumpMarker::MultiSwitchStart { switch_id, .. } => write!(f, "MSWITCH({})", switch_id),
            JumpMarker::ForeverContinue { loop_id } => write!(f, "LOOP_CONTINUE({})", loop_id),
            JumpMarker::ForeverBreak { loop_id } => write!(f, "LOOP_BREAK({})", loop_id),
        }
    }
}

/// Identifies which case of which switch a graph edge represents.
/// Purely descriptive; owned by the edge it annotates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchCaseAnnotation {
    pub switch_index: usize,
    pub case_index: usize,
    pub op: Operation,
}

impl Display for SwitchCaseAnnotation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{} :: {}", self.switch_index, self.case_index, self.op)
    }
}
