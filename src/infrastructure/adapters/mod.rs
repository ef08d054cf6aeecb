//! Infrastructure Adapters
//!
//! 六边形架构的适配器实现

mod http_fetcher;
mod jieba_tokenizer;
mod static_fetcher;
mod text_renderer;

pub use http_fetcher::{HttpPageFetcher, HttpPageFetcherConfig, DEFAULT_USER_AGENT};
pub use jieba_tokenizer::{JiebaTokenizer, JiebaTokenizerConfig};
pub use static_fetcher::StaticPageFetcher;
pub use text_renderer::TextChartRenderer;
