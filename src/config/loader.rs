//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;
use crate::domain::DEFAULT_ARTICLE_SELECTOR;
use crate::infrastructure::adapters::DEFAULT_USER_AGENT;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `CIPIN_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `CIPIN_FETCH__TIMEOUT_SECS=10`
/// - `CIPIN_EXTRACT__SELECTOR=div.post-body`
/// - `CIPIN_ANALYSIS__DEFAULT_TOP_N=50`
/// - `CIPIN_LOG__LEVEL=debug`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 首先设置默认值（最低优先级）
    builder = builder
        .set_default("fetch.timeout_secs", 30)?
        .set_default("fetch.user_agent", DEFAULT_USER_AGENT)?
        .set_default("extract.selector", DEFAULT_ARTICLE_SELECTOR)?
        .set_default("analysis.default_top_n", 20)?
        .set_default("analysis.hmm", false)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 添加配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        // 搜索默认配置文件
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 添加环境变量（最高优先级）
    // 前缀: CIPIN_
    // 层级分隔符: __ (双下划线)
    // 例如: CIPIN_EXTRACT__SELECTOR=div.post-body
    builder = builder.add_source(
        Environment::with_prefix("CIPIN")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    // 4. 构建配置
    let config = builder.build()?;

    // 5. 反序列化为 AppConfig
    let app_config: AppConfig = config
        .try_deserialize()
        .map_err(|e| ConfigError::ParseError(format!("Failed to deserialize config: {}", e)))?;

    // 6. 验证配置
    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    // 验证超时
    if config.fetch.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "Fetch timeout cannot be 0".to_string(),
        ));
    }

    // 验证 User-Agent
    if config.fetch.user_agent.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "User-Agent cannot be empty".to_string(),
        ));
    }

    // 选择器必须能解析，启动时失败好过抓完页面才失败
    if scraper::Selector::parse(&config.extract.selector).is_err() {
        return Err(ConfigError::ValidationError(format!(
            "Invalid article selector: {}",
            config.extract.selector
        )));
    }

    // 验证 Top-N 默认值
    if config.analysis.default_top_n == 0 {
        return Err(ConfigError::ValidationError(
            "Default top-N must be at least 1".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Fetch Timeout: {}s", config.fetch.timeout_secs);
    tracing::info!("User-Agent: {}", config.fetch.user_agent);
    tracing::info!("Article Selector: {}", config.extract.selector);
    tracing::info!("Default Top-N: {}", config.analysis.default_top_n);
    tracing::info!("Tokenizer HMM: {}", config.analysis.hmm);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}
