//! 服务层模块
//!
//! 算法 runner 与分发入口

pub mod algorithm;
pub mod dispatch;

// 重新导出常用服务
pub use algorithm::*;
pub use dispatch::{run_algorithm, AlgorithmId, RunParams};
