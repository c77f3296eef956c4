//! Label-necessity analysis over a completed control-flow graph.

use crate::error::DecompileError;
use crate::graph::FlowGraph;
use crate::label::Label;
use crate::marker::LabelMarker;
use log::debug;

/// Whether `label` must be emitted as an explicit target in regenerated
/// source, or can stay an implicit fallthrough point.
///
/// A label always absorbs one natural unmarked predecessor. Each IfEnd
/// marker contributes one more legitimate incoming edge (the else-branch
/// join). Each SwitchEnd contributes one per case branch of its matching
/// switch start except one, since one case may fall straight through.
/// Other markers do not move the threshold.
///
/// Only call this once the graph for the whole routine set is complete;
/// the switch-start lookup scans all vertices.
pub fn needs_to_be_printed<G: FlowGraph>(
    label: &Label,
    incoming_edge_count: usize,
    graph: &G,
) -> Result<bool, DecompileError> {
    let mut max_allowed_implicit: i64 = 1;
    for m in &label.markers {
        match m {
            LabelMarker::IfEnd { .. } => max_allowed_implicit += 1,
            LabelMarker::SwitchEnd { switch_id } => {
                let start = find_switch_start_vertex(graph, *switch_id).ok_or(
                    DecompileError::SwitchStartNotFound {
                        switch_id: *switch_id,
                    },
                )?;
                max_allowed_implicit += graph.out_degree(start) as i64 - 1;
            }
            LabelMarker::SwitchFallthrough
            | LabelMarker::ForeverStart { .. }
            | LabelMarker::ForeverEnd { .. } => {}
        }
    }
    debug!(
        "{}: {} incoming, {} allowed implicit",
        label.id, incoming_edge_count, max_allowed_implicit
    );
    Ok(incoming_edge_count as i64 > max_allowed_implicit)
}

/// The vertex whose jump payload opens switch `switch_id`, via either a
/// SwitchStart or a MultiSwitchStart marker.
fn find_switch_start_vertex<G: FlowGraph>(graph: &G, switch_id: u32) -> Option<G::VertexId> {
    for v in graph.vertices() {
        let jump = match graph.payload(v).and_then(|p| p.as_jump()) {
            Some(jump) => jump,
            None => continue,
        };
        if jump.marker().and_then(|m| m.switch_id()) == Some(switch_id) {
            return Some(v);
        }
    }
    None
}
