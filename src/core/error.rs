//! 引擎错误类型
//!
//! 只有结构性问题会作为错误返回（空图、非法 id、未知算法）；
//! 算法层面的异常状态（不可达、不连通、负权环）一律编码在 Step 数据中，
//! runner 本身不会失败

use thiserror::Error;

/// 统一的引擎错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("未知算法: {0}")]
    UnknownAlgorithm(String),

    #[error("无效图: {0}")]
    InvalidGraph(String),
}

/// 统一的引擎返回类型
pub type EngineResult<T> = Result<T, EngineError>;
