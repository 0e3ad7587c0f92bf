use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;

// 导入库模块
use graphtrace::config::Config;
use graphtrace::services::dispatch::{run_algorithm, AlgorithmId, RunParams};
use graphtrace::utils::logging;
use graphtrace::Graph;

#[derive(Parser)]
#[clap(version = "0.1.0", author = "GraphTrace Contributors")]
enum Cli {
    /// Run an algorithm and print the step trace as JSON
    Run {
        /// Algorithm id: bfs, dfs, dijkstra, prim, kruskal, bellman-ford
        #[clap(short, long)]
        algorithm: String,
        /// Start vertex, given as a label or a stringified node id
        #[clap(short, long)]
        start: Option<String>,
        /// JSON file with the input graph; omitted means the built-in sample
        #[clap(short, long)]
        graph: Option<PathBuf>,
        /// Pretty-print the output
        #[clap(long)]
        pretty: bool,
        #[clap(short, long, default_value = "config.toml")]
        config: String,
    },
    /// List the supported algorithm ids
    List,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli {
        Cli::Run {
            algorithm,
            start,
            graph,
            pretty,
            config,
        } => {
            let config = Config::load(&config)
                .map_err(|e| anyhow::anyhow!("配置加载失败: {}", e))?;
            logging::init(&config).map_err(|e| anyhow::anyhow!("日志初始化失败: {}", e))?;

            let id: AlgorithmId = algorithm.parse()?;
            let graph: Option<Graph> = match graph {
                Some(path) => {
                    let content = fs::read_to_string(&path)
                        .with_context(|| format!("无法读取图文件 {}", path.display()))?;
                    Some(serde_json::from_str(&content).context("图文件解析失败")?)
                }
                None => None,
            };

            let steps = run_algorithm(
                id,
                RunParams {
                    start_vertex: start,
                    graph,
                },
            )?;

            let output = if pretty {
                serde_json::to_string_pretty(&steps)?
            } else {
                serde_json::to_string(&steps)?
            };
            println!("{}", output);

            logging::shutdown();
        }
        Cli::List => {
            for id in AlgorithmId::all() {
                println!("{}", id);
            }
        }
    }

    Ok(())
}
