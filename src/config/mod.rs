//! 配置模块
//!
//! CLI 的运行配置，目前只有日志一节。文件缺失时使用默认值

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct Config {
    pub log: LogConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub dir: String,
    pub file: String,
    pub max_file_size: u64,
    pub max_files: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log: LogConfig::default(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            dir: "logs".to_string(),
            file: "graphtrace".to_string(),
            max_file_size: 10 * 1024 * 1024, // 10MB
            max_files: 3,
        }
    }
}

impl Config {
    /// 从 TOML 文件加载配置；文件不存在时返回默认配置
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.log.level, "info");
        assert_eq!(config.log.max_files, 3);
    }

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let config = Config::load("does/not/exist.toml").expect("load should not fail");
        assert_eq!(config.log.file, "graphtrace");
    }

    #[test]
    fn test_partial_toml_overrides() {
        let config: Config = toml::from_str("[log]\nlevel = \"debug\"\n").expect("parse toml");
        assert_eq!(config.log.level, "debug");
        assert_eq!(config.log.dir, "logs");
    }
}
