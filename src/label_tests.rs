use crate::error::DecompileError;
use crate::label::{JumpNode, LabelArena};
use crate::marker::{JumpMarker, LabelMarker};
use crate::operation::{OpCode, Operation, Param};
use test_log::test;

fn branch_op(offset: i32) -> Operation {
    Operation::new(
        offset,
        OpCode::new(1, "Branch"),
        vec![Param::Int(0), Param::Int(1)],
    )
}

#[test]
fn jump_holds_at_most_one_marker() {
    let mut jump = JumpNode::new(branch_op(0x10), None);
    assert!(jump.marker().is_none());

    jump.set_marker(JumpMarker::IfStart {
        if_id: 0,
        negated: false,
    })
    .unwrap();
    assert!(jump.marker().is_some());

    let err = jump
        .set_marker(JumpMarker::ForeverBreak { loop_id: 0 })
        .unwrap_err();
    assert!(matches!(err, DecompileError::MarkerConflict { .. }));

    // After removal a new marker is accepted again.
    jump.remove_marker();
    assert!(jump.marker().is_none());
    jump.set_marker(JumpMarker::ForeverBreak { loop_id: 0 })
        .unwrap();
}

#[test]
fn remove_marker_without_marker_is_a_no_op() {
    let mut jump = JumpNode::new(branch_op(0x10), None);
    jump.remove_marker();
    assert!(jump.marker().is_none());
}

#[test]
fn labels_take_any_number_of_markers() {
    let mut labels = LabelArena::new();
    let id = labels.resolve(0x50, 0);
    let label = labels.get_mut(id).unwrap();
    label.add_marker(LabelMarker::IfEnd { if_id: 0 });
    label.add_marker(LabelMarker::IfEnd { if_id: 1 });
    label.add_marker(LabelMarker::SwitchFallthrough);
    assert_eq!(
        labels.get(id).unwrap().markers,
        vec![
            LabelMarker::IfEnd { if_id: 0 },
            LabelMarker::IfEnd { if_id: 1 },
            LabelMarker::SwitchFallthrough,
        ]
    );
}

#[test]
fn multi_if_accumulates_in_encounter_order() {
    let mut marker = JumpMarker::MultiIfStart {
        if_id: 3,
        conditions: vec![(branch_op(0x10), false)],
    };
    marker.push_if(branch_op(0x20), true).unwrap();
    marker.push_if(branch_op(0x30), false).unwrap();

    match &marker {
        JumpMarker::MultiIfStart { conditions, .. } => {
            assert_eq!(conditions.len(), 3);
            assert_eq!(
                conditions.iter().map(|(op, n)| (op.offset, *n)).collect::<Vec<_>>(),
                vec![(0x10, false), (0x20, true), (0x30, false)]
            );
        }
        _ => unreachable!(),
    }
    assert_eq!(marker.to_string(), "MIF(3[3])");
}

#[test]
fn multi_switch_counts_merged_openers() {
    let mut marker = JumpMarker::MultiSwitchStart {
        switch_id: 7,
        switches: vec![branch_op(0x10)],
    };
    assert_eq!(marker.number_of_switches(), 1);
    marker.push_switch(branch_op(0x20)).unwrap();
    assert_eq!(marker.number_of_switches(), 2);
    assert_eq!(marker.switch_id(), Some(7));
}

#[test]
fn accumulators_reject_non_multi_variants() {
    let mut plain_if = JumpMarker::IfStart {
        if_id: 0,
        negated: true,
    };
    assert!(plain_if.push_if(branch_op(0x10), false).is_err());

    let mut plain_switch = JumpMarker::SwitchStart { switch_id: 0 };
    assert!(plain_switch.push_switch(branch_op(0x10)).is_err());
}

#[test]
fn marker_debug_grammar() {
    assert_eq!(
        JumpMarker::IfStart {
            if_id: 2,
            negated: true
        }
        .to_string(),
        "IF NOT(2)"
    );
    assert_eq!(
        LabelMarker::ForeverEnd { loop_id: 1 }.to_string(),
        "END_LOOP(1)"
    );
    assert_eq!(LabelMarker::SwitchFallthrough.to_string(), "FALL");
}
