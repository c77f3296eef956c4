#![crate_name = "ssbdasm"]

//! Structured control-flow reconstruction for compiled ssb game scripts.
//!
//! ssb binaries store script routines as flat, offset-addressed operation
//! streams. This crate turns the raw jump targets back into deduplicated
//! labels, supplies the marker taxonomy the structuring pass tags those
//! labels and jumps with (if/switch/forever constructs, including merged
//! multi-way variants), and decides from CFG connectivity which labels
//! must appear explicitly in regenerated source.

#[macro_use]
extern crate lazy_static;

pub mod analyzer;
pub mod compiler;
pub mod error;
pub mod graph;
pub mod label;
pub mod marker;
pub mod operation;
pub mod resolver;
pub mod special_ops;

#[cfg(test)]
mod label_tests;
