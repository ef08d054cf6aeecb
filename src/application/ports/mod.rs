//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod chart_renderer;
mod page_fetcher;
mod tokenizer;

pub use chart_renderer::{
    ChartKind, ChartRendererPort, RenderError, RenderRequest, RenderedChart,
};
pub use page_fetcher::{FetchError, FetchedPage, PageFetcherPort};
pub use tokenizer::TokenizerPort;
