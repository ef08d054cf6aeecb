//! Static Page Fetcher - 用于测试与离线运行的抓取器
//!
//! 始终返回固定的 HTML，不发出任何网络请求

use async_trait::async_trait;

use crate::application::ports::{FetchError, FetchedPage, PageFetcherPort};

/// Static Page Fetcher
///
/// 对任意 URL 返回构造时给定的页面内容
pub struct StaticPageFetcher {
    html: String,
}

impl StaticPageFetcher {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }
}

#[async_trait]
impl PageFetcherPort for StaticPageFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        tracing::debug!(url = %url, "StaticPageFetcher: 返回固定页面");
        Ok(FetchedPage {
            url: url.to_string(),
            html: self.html.clone(),
            encoding: "UTF-8".to_string(),
        })
    }
}
