//! Page Fetcher Port - 页面抓取抽象
//!
//! 定义页面抓取的抽象接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use thiserror::Error;

/// 抓取错误
///
/// 网络、超时、状态码与编码问题各自独立，
/// 调用方拿到的是带上下文的错误而不是悄悄返回的乱码
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("网络请求失败: {0}")]
    Network(String),

    #[error("请求超时")]
    Timeout,

    #[error("HTTP 状态异常: {0}")]
    Status(u16),

    #[error("页面编码无法解码 ({encoding}): {reason}")]
    Decode { encoding: String, reason: String },
}

/// 抓取并解码完成的页面
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// 请求的 URL
    pub url: String,
    /// 解码后的完整 HTML 文本
    pub html: String,
    /// 基于内容探测出的实际编码名（如 UTF-8、GBK）
    pub encoding: String,
}

/// Page Fetcher Port
///
/// 一次调用抓取一个 URL，返回解码后的文档
#[async_trait]
pub trait PageFetcherPort: Send + Sync {
    /// 抓取页面字节并解码为文本
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError>;
}
