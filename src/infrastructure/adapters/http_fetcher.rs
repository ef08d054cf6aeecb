//! HTTP Page Fetcher - 抓取真实网页
//!
//! 实现 PageFetcherPort trait，通过 reqwest 抓取页面字节。
//! 带一组固定的浏览器式请求头，降低被反爬策略拦截的概率；
//! 编码不信任响应头声明，基于内容探测后再解码

use async_trait::async_trait;
use chardetng::EncodingDetector;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, CONNECTION, USER_AGENT};
use reqwest::Client;
use std::time::Duration;

use crate::application::ports::{FetchError, FetchedPage, PageFetcherPort};

/// 默认 User-Agent（桌面 Chrome）
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/89.0.4389.128 Safari/537.36";

const ACCEPT_VALUE: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";
const ACCEPT_LANGUAGE_VALUE: &str = "en-US,en;q=0.5";

/// 解码文本中替换符超过该比例视为编码不可解
const MAX_REPLACEMENT_RATIO: f64 = 0.1;

/// HTTP Page Fetcher 配置
#[derive(Debug, Clone)]
pub struct HttpPageFetcherConfig {
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
    /// User-Agent 请求头
    pub user_agent: String,
}

impl Default for HttpPageFetcherConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl HttpPageFetcherConfig {
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// HTTP Page Fetcher
///
/// 每次调用抓取一个 URL，同步等待该请求完成
pub struct HttpPageFetcher {
    client: Client,
}

impl HttpPageFetcher {
    /// 创建新的 HTTP Page Fetcher
    pub fn new(config: HttpPageFetcherConfig) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .map_err(|e| FetchError::Network(format!("无效的 User-Agent: {}", e)))?,
        );
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_VALUE));
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_static(ACCEPT_LANGUAGE_VALUE),
        );
        headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));
        // Accept-Encoding 由 reqwest 的 gzip/deflate/brotli 支持自动补上

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(Self { client })
    }

    /// 使用默认配置创建
    pub fn with_defaults() -> Result<Self, FetchError> {
        Self::new(HttpPageFetcherConfig::default())
    }
}

/// 基于内容探测编码并解码页面字节
///
/// 探测覆盖完整响应体，不看响应头声明。个别残缺字节只告警继续（会被
/// 替换为 U+FFFD），替换比例过高才作为编码不可解报错
pub(crate) fn decode_body(bytes: &[u8]) -> Result<(String, String), FetchError> {
    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let encoding: &'static encoding_rs::Encoding = detector.guess(None, true);

    let (text, used, had_errors) = encoding.decode(bytes);
    let name = used.name().to_string();

    if had_errors {
        if replacement_ratio_excessive(&text) {
            return Err(FetchError::Decode {
                encoding: name,
                reason: "解码后替换符比例过高，页面内容不可用".to_string(),
            });
        }
        tracing::warn!(encoding = %name, "页面存在个别无法解码的字节，已替换后继续");
    }

    Ok((text.into_owned(), name))
}

/// 判断 U+FFFD 替换符占比是否超过 [`MAX_REPLACEMENT_RATIO`]
pub(crate) fn replacement_ratio_excessive(text: &str) -> bool {
    let total = text.chars().count();
    if total == 0 {
        return false;
    }
    let bad = text.chars().filter(|&c| c == '\u{FFFD}').count();
    bad as f64 / total as f64 > MAX_REPLACEMENT_RATIO
}

#[async_trait]
impl PageFetcherPort for HttpPageFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        tracing::debug!(url = %url, "抓取页面");

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout
            } else if e.is_connect() {
                FetchError::Network(format!("无法连接目标站点: {}", e))
            } else {
                FetchError::Network(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let final_url = response.url().to_string();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| FetchError::Network(format!("读取响应体失败: {}", e)))?;

        let (html, encoding) = decode_body(&bytes)?;

        tracing::info!(
            url = %final_url,
            status = status.as_u16(),
            bytes = bytes.len(),
            encoding = %encoding,
            "页面抓取完成"
        );

        Ok(FetchedPage {
            url: final_url,
            html,
            encoding,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = HttpPageFetcherConfig::default();
        assert_eq!(config.timeout_secs, 30);
        assert!(config.user_agent.contains("Chrome"));
    }

    #[test]
    fn test_config_builder() {
        let config = HttpPageFetcherConfig::default().with_timeout(5);
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn test_decode_utf8_body() {
        let body = "<html><body>今天天气不错，适合做词频统计。</body></html>";
        let (text, encoding) = decode_body(body.as_bytes()).unwrap();
        assert_eq!(text, body);
        assert_eq!(encoding, "UTF-8");
    }

    #[test]
    fn test_decode_gbk_body_by_content_detection() {
        // 以 GBK 编码一段足够长的中文，探测必须从内容恢复出编码
        let original = "这是一篇用国标编码发布的新闻正文，里面讨论了词频统计、\
                        中文分词以及网页正文提取的常见问题。";
        let (gbk_bytes, _, _) = encoding_rs::GBK.encode(original);
        let (text, encoding) = decode_body(&gbk_bytes).unwrap();
        assert_eq!(text, original);
        assert_eq!(encoding, "GBK");
    }

    #[test]
    fn test_decode_empty_body() {
        let (text, _) = decode_body(b"").unwrap();
        assert!(text.is_empty());
    }

    #[test]
    fn test_replacement_ratio_threshold() {
        assert!(!replacement_ratio_excessive(""));
        assert!(!replacement_ratio_excessive("完全正常的文本"));
        // 20 个字符里 1 个替换符：5%，低于阈值
        let mostly_fine = format!("{}{}", "好".repeat(19), '\u{FFFD}');
        assert!(!replacement_ratio_excessive(&mostly_fine));
        // 一半是替换符
        let garbled = format!("{}{}", "好".repeat(5), "\u{FFFD}".repeat(5));
        assert!(replacement_ratio_excessive(&garbled));
    }
}
