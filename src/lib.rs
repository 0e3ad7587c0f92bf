//! GraphTrace - a deterministic step-trace engine for classic graph algorithms
//!
//! Given a graph and an algorithm choice, the engine simulates the algorithm
//! and returns a self-contained sequence of state snapshots ("steps") that a
//! renderer can play forward, backward, or jump into at any index without
//! re-running any computation.

pub mod config;
pub mod core;
pub mod services;
pub mod utils;

pub use crate::core::{
    AlgorithmAux, Distance, DistanceTable, Edge, EngineError, EngineResult, Graph, Node, NodeId,
    Selection, Step,
};
pub use crate::services::{run_algorithm, AlgorithmId, RunParams};
