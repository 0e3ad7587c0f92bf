//! 算法模块
//!
//! 六个逐步回放 runner 及共享辅助结构

pub mod bellman_ford;
pub mod bfs;
pub mod defaults;
pub mod dfs;
pub mod dijkstra;
pub mod kruskal;
pub mod prim;
pub mod union_find;

// 重新导出常用算法结构体
pub use bellman_ford::BellmanFord;
pub use bfs::Bfs;
pub use dfs::Dfs;
pub use dijkstra::Dijkstra;
pub use kruskal::Kruskal;
pub use prim::Prim;
pub use union_find::UnionFind;
