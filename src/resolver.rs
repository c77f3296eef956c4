//! Offset resolution: rewriting raw jump targets into label references.

use crate::error::DecompileError;
use crate::label::{JumpNode, LabelArena, ScriptNode};
use crate::operation::{OpParams, Operation};
use crate::special_ops::jump_param_index;
use log::debug;

/// Process one operation of a routine.
///
/// Operations without a jump to a memory offset pass through untouched.
/// For jump-carrying opcodes the target offset is looked up in the arena
/// (allocating a label with the next auto-incremented id on first sight)
/// and a JumpNode is returned whose root is a copy of the operation with
/// the jump-target parameter removed.
///
/// The arena must be threaded linearly across the whole routine set so
/// label ids come out deterministic.
pub fn process_op_for_jump(
    op: &Operation,
    labels: &mut LabelArena,
    routine_id: u32,
) -> Result<ScriptNode, DecompileError> {
    let idx = match jump_param_index(&op.op_code.name) {
        Some(idx) => idx,
        None => return Ok(ScriptNode::Op(op.clone())),
    };

    let param_list = op.params.values();
    // `< idx`, not `< idx + 1`: the known opcode tables never produce the
    // boundary case. See DESIGN.md before tightening.
    if param_list.len() < idx {
        return Err(DecompileError::MalformedJumpParams {
            opcode: op.op_code.name.clone(),
            index: idx,
        });
    }

    let old_offset = match param_list.get(idx) {
        Some(crate::operation::Param::Int(v)) => *v,
        other => {
            debug!(
                "jump target of {} at index {} is not an address: {:?}",
                op.op_code, idx, other
            );
            return Err(DecompileError::MalformedJumpParams {
                opcode: op.op_code.name.clone(),
                index: idx,
            });
        }
    };

    let label = labels.resolve(old_offset, routine_id);

    let mut new_params = param_list;
    new_params.remove(idx);
    let root = Operation {
        offset: op.offset,
        op_code: op.op_code.clone(),
        params: OpParams::Positional(new_params),
    };
    Ok(ScriptNode::Jump(JumpNode::new(root, Some(label))))
}

/// Resolve every operation of one routine, in stream order.
pub fn resolve_routine(
    ops: &[Operation],
    labels: &mut LabelArena,
    routine_id: u32,
) -> Result<Vec<ScriptNode>, DecompileError> {
    ops.iter()
        .map(|op| process_op_for_jump(op, labels, routine_id))
        .collect()
}

/// Resolve an entire routine set, threading one arena through all routines
/// in supply order. Routine ids are the stream indexes. The first failure
/// aborts the whole set; there is no partial result.
pub fn resolve_routines(
    routines: &[Vec<Operation>],
    labels: &mut LabelArena,
) -> Result<Vec<Vec<ScriptNode>>, DecompileError> {
    let mut resolved = Vec::with_capacity(routines.len());
    for (routine_id, ops) in routines.iter().enumerate() {
        debug!("resolving routine {} ({} ops)", routine_id, ops.len());
        resolved.push(resolve_routine(ops, labels, routine_id as u32)?);
    }
    debug!(
        "routine set resolved: {} routines, {} labels",
        routines.len(),
        labels.len()
    );
    Ok(resolved)
}
