//! Cipin - 网页中文词频分析管道
//!
//! 架构设计: Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - article: 正文提取与占位值
//! - frequency: 过滤、计数、排名、Top-N
//!
//! 应用层 (application/):
//! - Ports: 端口定义（PageFetcher, Tokenizer, ChartRenderer）
//! - Analyze: 词频分析用例（抓取 → 提取 → 分词 → 过滤 → 计数 → 排名 → Top-N）
//!
//! 基础设施层 (infrastructure/):
//! - HttpPageFetcher: reqwest 抓取 + 内容探测编码解码
//! - JiebaTokenizer: jieba-rs 词典分词
//! - StaticPageFetcher / TextChartRenderer: 测试与终端用适配器
//!
//! 数据严格单向流动，阶段之间无共享可变状态，同一输入重复运行结果逐位相同

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
