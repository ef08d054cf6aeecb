//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;

use crate::domain::DEFAULT_ARTICLE_SELECTOR;
use crate::infrastructure::adapters::DEFAULT_USER_AGENT;

/// 应用主配置
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// 抓取配置
    #[serde(default)]
    pub fetch: FetchConfig,

    /// 正文提取配置
    #[serde(default)]
    pub extract: ExtractConfig,

    /// 分析配置
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 抓取配置
#[derive(Debug, Clone, Deserialize)]
pub struct FetchConfig {
    /// 请求超时时间（秒）
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent 请求头
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

/// 正文提取配置
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractConfig {
    /// 正文节点的 CSS 选择器
    #[serde(default = "default_selector")]
    pub selector: String,
}

fn default_selector() -> String {
    DEFAULT_ARTICLE_SELECTOR.to_string()
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            selector: default_selector(),
        }
    }
}

/// 分析配置
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    /// 未显式指定 N 时 Top-N 的默认值
    #[serde(default = "default_top_n")]
    pub default_top_n: usize,

    /// 分词是否启用 HMM 新词发现
    #[serde(default)]
    pub hmm: bool,
}

fn default_top_n() -> usize {
    20
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            default_top_n: default_top_n(),
            hmm: false,
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.fetch.timeout_secs, 30);
        assert!(config.fetch.user_agent.contains("Mozilla"));
        assert_eq!(config.extract.selector, "article.article#mp-editor");
        assert_eq!(config.analysis.default_top_n, 20);
        assert!(!config.analysis.hmm);
        assert_eq!(config.log.level, "info");
    }
}
