//! Labels, label-referencing jumps and the run-scoped label arena.

use crate::error::DecompileError;
use crate::marker::{JumpMarker, LabelMarker};
use crate::operation::{OpCode, Operation};
use log::debug;
use std::collections::HashMap;
use std::fmt::{Display, Formatter};

/// Identity of a label within one decompilation run. Ids are dense and
/// assigned in strictly increasing order starting at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LabelId(pub u32);

impl Display for LabelId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "label_{}", self.0)
    }
}

/// A jump destination, deduplicated per raw memory offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub id: LabelId,
    /// Routine this label lexically sits in.
    pub routine_id: u32,
    /// Set once any jump from a different routine resolves to this label.
    /// Monotonic; never reset to false.
    pub referenced_from_other_routine: bool,
    /// Markers in discovery order. Unbounded.
    pub markers: Vec<LabelMarker>,
}

impl Label {
    fn new(id: LabelId, routine_id: u32) -> Self {
        Label {
            id,
            routine_id,
            referenced_from_other_routine: false,
            markers: Vec::new(),
        }
    }

    pub fn add_marker(&mut self, m: LabelMarker) {
        self.markers.push(m);
    }

    /// The synthesized operation stand-in for this label, for debug dumps.
    pub fn as_operation(&self) -> Operation {
        Operation::new(
            -1,
            OpCode::synthesized(format!("LBL<{}>", self.id.0)),
            vec![crate::operation::Param::Int(self.id.0 as i32)],
        )
    }
}

/// The offset-to-label association for one decompilation run.
///
/// Explicit state threaded through the resolver; never process-global, so
/// independent runs over different script files cannot interfere.
#[derive(Debug, Default)]
pub struct LabelArena {
    labels: Vec<Label>,
    by_offset: HashMap<i32, LabelId>,
}

impl LabelArena {
    pub fn new() -> Self {
        LabelArena::default()
    }

    /// Label for `offset`, creating it on first sight.
    ///
    /// Reuse from a routine other than the label's own sets the
    /// cross-routine flag; it stays set from then on.
    pub fn resolve(&mut self, offset: i32, routine_id: u32) -> LabelId {
        if let Some(&id) = self.by_offset.get(&offset) {
            let label = &mut self.labels[id.0 as usize];
            if routine_id != label.routine_id {
                label.referenced_from_other_routine = true;
            }
            debug!(
                "reusing {} for offset {:#07x} (routine {})",
                id, offset, routine_id
            );
            return id;
        }
        let next_id = match self.labels.iter().map(|l| l.id.0).max() {
            None => 0,
            Some(max) => max + 1,
        };
        let id = LabelId(next_id);
        debug!(
            "new {} for offset {:#07x} (routine {})",
            id, offset, routine_id
        );
        self.labels.push(Label::new(id, routine_id));
        self.by_offset.insert(offset, id);
        id
    }

    pub fn get(&self, id: LabelId) -> Option<&Label> {
        self.labels.get(id.0 as usize)
    }

    pub fn get_mut(&mut self, id: LabelId) -> Option<&mut Label> {
        self.labels.get_mut(id.0 as usize)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Label> {
        self.labels.iter()
    }
}

/// Reference to a label that lives in another routine. Observes the label,
/// does not own it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForeignLabel {
    pub label: LabelId,
}

impl Display for ForeignLabel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "FOREIGN<{}>", self.label.0)
    }
}

/// A jump rewritten to reference a label instead of a raw offset.
///
/// `root` is the original operation with its jump-target parameter removed.
/// `label` may be None, in which case the connected graph edges determine
/// the destinations. Holds at most one marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JumpNode {
    pub root: Operation,
    pub label: Option<LabelId>,
    marker: Option<JumpMarker>,
}

impl JumpNode {
    pub fn new(root: Operation, label: Option<LabelId>) -> Self {
        JumpNode {
            root,
            label,
            marker: None,
        }
    }

    /// Attach the marker. Fails if one is already present; that means the
    /// structuring pass is broken, not that the input is bad.
    pub fn set_marker(&mut self, m: JumpMarker) -> Result<(), DecompileError> {
        if self.marker.is_some() {
            return Err(DecompileError::MarkerConflict {
                jump: self.to_string(),
            });
        }
        self.marker = Some(m);
        Ok(())
    }

    /// Remove the sole marker if present; no-op otherwise.
    pub fn remove_marker(&mut self) {
        self.marker = None;
    }

    pub fn marker(&self) -> Option<&JumpMarker> {
        self.marker.as_ref()
    }

    pub fn marker_mut(&mut self) -> Option<&mut JumpMarker> {
        self.marker.as_mut()
    }
}

impl Display for JumpNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let target = match self.label {
            Some(id) => id.to_string(),
            None => "<edges>".to_string(),
        };
        match &self.marker {
            Some(m) => write!(f, "JUMP<{}> -> {} [{}]", self.root.op_code, target, m),
            None => write!(f, "JUMP<{}> -> {}", self.root.op_code, target),
        }
    }
}

/// One node of the transformed operation stream: either an untouched
/// original operation or one of the synthesized decompiler nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptNode {
    Op(Operation),
    Jump(JumpNode),
    Label(LabelId),
    ForeignLabel(ForeignLabel),
}

impl ScriptNode {
    pub fn as_jump(&self) -> Option<&JumpNode> {
        match self {
            ScriptNode::Jump(j) => Some(j),
            _ => None,
        }
    }

    pub fn as_jump_mut(&mut self) -> Option<&mut JumpNode> {
        match self {
            ScriptNode::Jump(j) => Some(j),
            _ => None,
        }
    }
}

impl Display for ScriptNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ScriptNode::Op(op) => write!(f, "{}", op),
            ScriptNode::Jump(j) => write!(f, "{}", j),
            ScriptNode::Label(id) => write!(f, "LBL<{}>", id.0),
            ScriptNode::ForeignLabel(fl) => write!(f, "{}", fl),
        }
    }
}
