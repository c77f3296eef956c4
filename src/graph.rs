//! The control-flow-graph capability the analyzer depends on.
//!
//! The graph itself is built elsewhere; this crate only queries it. Any
//! directed-graph implementation can satisfy the capability; an adapter
//! for petgraph is provided since that is what the CFG builder uses.

use crate::label::ScriptNode;
use crate::marker::SwitchCaseAnnotation;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;

/// Read-only view of a routine set's control-flow graph. Vertices may
/// carry an operation payload; edges represent possible execution
/// transitions.
pub trait FlowGraph {
    type VertexId: Copy;

    fn vertices(&self) -> Vec<Self::VertexId>;

    /// The operation payload of a vertex, if it has one.
    fn payload(&self, v: Self::VertexId) -> Option<&ScriptNode>;

    fn out_degree(&self, v: Self::VertexId) -> usize;
}

/// The concrete graph type produced by the CFG builder: vertices optionally
/// hold a script node, edges optionally carry a switch-case annotation.
pub type ScriptGraph = DiGraph<Option<ScriptNode>, Option<SwitchCaseAnnotation>>;

impl FlowGraph for ScriptGraph {
    type VertexId = NodeIndex;

    fn vertices(&self) -> Vec<NodeIndex> {
        self.node_indices().collect()
    }

    fn payload(&self, v: NodeIndex) -> Option<&ScriptNode> {
        self.node_weight(v).and_then(|w| w.as_ref())
    }

    fn out_degree(&self, v: NodeIndex) -> usize {
        self.edges_directed(v, Direction::Outgoing).count()
    }
}
