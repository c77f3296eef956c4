//! Registry of special known ssb opcodes consulted by the decompiler.
//!
//! Opcodes are mapped by name only; the numeric ids differ between game
//! regions and are resolved by the binary reader before operations reach
//! this crate. These tables are valid for Sky-style ssb.

use std::collections::HashMap;

/// The unconditional jump opcode. Always jumps, target in param 0.
pub const OP_JUMP: &str = "Jump";
/// Freezes the calling script entity forever. Execution flow is treated as
/// cut off after it, but the raw stream sometimes still carries one more
/// terminating-class op, which readers must preserve.
pub const OP_HOLD: &str = "Hold";
pub const OP_RETURN: &str = "Return";
pub const OP_END: &str = "End";

/// Flag opcode emitted by the adventure-log assignment handler.
pub const OP_FLAG_SET_ADVENTURE_LOG: &str = "SetAdventureLog";
pub const OP_FLAG_CLEAR: &str = "FlagClear";

/// Branch-family opcodes and the parameter index of their jump target.
/// Each branch variant carries a different number of leading condition
/// parameters, hence the per-opcode index.
const OPS_BRANCH: [(&str, usize); 15] = [
    ("Branch", 2),
    ("BranchBit", 2),
    ("BranchDebug", 1),
    ("BranchEdit", 1),
    ("BranchExecuteSub", 1),
    ("BranchPerformance", 2),
    ("BranchScenarioNow", 3),
    ("BranchScenarioNowAfter", 3),
    ("BranchScenarioNowBefore", 3),
    ("BranchScenarioAfter", 3),
    ("BranchScenarioBefore", 3),
    ("BranchSum", 3),
    ("BranchValue", 3),
    ("BranchVariable", 3),
    ("BranchVariation", 1),
];

/// Case-entry opcodes and the parameter index of their jump target. The
/// value/variable/scenario variants carry a discriminant first, so their
/// target sits one or two params later than the plain forms.
const OPS_CASE: [(&str, usize); 6] = [
    ("Case", 1),
    ("CaseMenu", 1),
    ("CaseMenu2", 1),
    ("CaseScenario", 2),
    ("CaseValue", 2),
    ("CaseVariable", 2),
];

lazy_static! {
    /// Opcodes that carry a jump to a memory offset, mapped to the
    /// parameter index holding the target. Merged from the case-entry
    /// table, the unconditional jump, and the branch family.
    pub static ref OPS_WITH_JUMP_TO_MEM_OFFSET: HashMap<&'static str, usize> = {
        let mut m = HashMap::new();
        for (name, idx) in OPS_CASE {
            m.insert(name, idx);
        }
        m.insert(OP_JUMP, 0);
        for (name, idx) in OPS_BRANCH {
            m.insert(name, idx);
        }
        m
    };
}

/// Parameter index of the jump target for `name`, if it is a
/// jump-to-memory-offset opcode.
pub fn jump_param_index(name: &str) -> Option<usize> {
    OPS_WITH_JUMP_TO_MEM_OFFSET.get(name).copied()
}

/// Opcodes after which linear fall-through in the current routine is cut
/// off, usually by jumping somewhere else and not automatically returning.
/// Does not include opcodes that only MAY jump (the branch family).
pub const OPS_THAT_END_CONTROL_FLOW: [&str; 6] =
    [OP_JUMP, OP_RETURN, OP_END, OP_HOLD, "JumpCommon", "Destroy"];

pub fn ends_control_flow(name: &str) -> bool {
    OPS_THAT_END_CONTROL_FLOW.contains(&name)
}

pub const OP_CTX_LIVES: &str = "lives";
pub const OP_CTX_OBJECT: &str = "object";
pub const OP_CTX_PERFORMER: &str = "performer";

/// The operation following one of these executes in the context of an
/// actor, object or performer. Attribution of the following op happens in
/// the structuring pass; this table only answers membership.
pub const OPS_CTX: [&str; 3] = [OP_CTX_LIVES, OP_CTX_OBJECT, OP_CTX_PERFORMER];

pub fn shifts_context(name: &str) -> bool {
    OPS_CTX.contains(&name)
}

const CASES_DEFAULT: &[&str] = &["Case", "CaseValue", "CaseVariable", "CaseScenario"];
const CASES_MENU: &[&str] = &["CaseMenu", "CaseMenu2"];
const CASES_TEXT: &[&str] = &["CaseText", "DefaultText"];

/// Valid case opcode names for a switch/menu-opening opcode, in the order
/// the format defines them. Returns None for non-switch opcodes.
pub fn case_ops_for_switch(name: &str) -> Option<&'static [&'static str]> {
    match name {
        "message_SwitchMenu" | "message_SwitchMenu2" => Some(CASES_MENU),
        "message_SwitchTalk" | "message_SwitchMonologue" => Some(CASES_TEXT),
        "Switch" | "SwitchSector" | "ProcessSpecial" | "message_Menu" | "SwitchScenario"
        | "SwitchRandom" | "SwitchScenarioLevel" | "SwitchDungeonMode" => Some(CASES_DEFAULT),
        _ => None,
    }
}

/// Whether `name` opens a switch/menu construct.
pub fn is_switch_op(name: &str) -> bool {
    case_ops_for_switch(name).is_some()
}
