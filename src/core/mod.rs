//! 核心模块
//!
//! 包含图模型、Step 契约和错误类型

pub mod error;
pub mod graph;
pub mod step;

pub use error::{EngineError, EngineResult};
pub use graph::{format_number, Edge, Graph, Node, NodeId};
pub use step::{AlgorithmAux, Distance, DistanceTable, Selection, Step, StepDraft, StepTrace};
