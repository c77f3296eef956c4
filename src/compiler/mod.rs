// Compile-direction handlers
// Only the leaves the decompiler core interfaces with live here; the full
// source-to-ssb pipeline is a separate concern.

pub mod adventure_log;

#[cfg(test)]
mod adventure_log_tests;

use crate::operation::Param;

/// A value producer an assignment handler may collect from. Closed set;
/// handlers match on the variant instead of inspecting types at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueProducer {
    /// Produces an integer-like param (literal or engine constant).
    IntegerLike(Param),
    /// Produces a string param. No assignment handler here accepts these.
    Text(String),
}
