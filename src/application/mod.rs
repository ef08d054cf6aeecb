//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（PageFetcher、Tokenizer、ChartRenderer）
//! - analyze: 词频分析用例（抓取 → 提取 → 分词 → 过滤 → 计数 → 排名）
//! - error: 应用层错误定义

pub mod analyze;
pub mod error;
pub mod ports;

pub use analyze::{AnalysisReport, AnalyzeConfig, AnalyzeUrl, AnalyzeUrlHandler};
pub use error::PipelineError;
pub use ports::{
    ChartKind, ChartRendererPort, FetchError, FetchedPage, PageFetcherPort, RenderError,
    RenderRequest, RenderedChart, TokenizerPort,
};
