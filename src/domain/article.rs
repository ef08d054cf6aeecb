//! 正文提取
//!
//! 从解码后的 HTML 中定位唯一的正文节点并取其纯文本。
//! 解析是容错的，残缺的标签不会中断流程；
//! 找不到正文节点返回显式的占位值而不是错误，管道保持全函数

use scraper::{Html, Selector};
use thiserror::Error;

/// 未找到正文节点时的占位文本
pub const NO_ARTICLE_SENTINEL: &str = "No article found";

/// 默认正文选择器：article 标签、class=article、id=mp-editor
pub const DEFAULT_ARTICLE_SELECTOR: &str = "article.article#mp-editor";

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("无效的正文选择器 `{selector}`: {reason}")]
    InvalidSelector { selector: String, reason: String },
}

/// 提取出的正文
///
/// 缺失用显式变体表达，文本形式是固定的占位串，绝不为 null
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleText {
    /// 正文节点的纯文本，段落以 `\n` 连接
    Found(String),
    /// 页面中不存在匹配选择器的节点
    NotFound,
}

impl ArticleText {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// 文本视图：缺失时返回 [`NO_ARTICLE_SENTINEL`]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Found(text) => text,
            Self::NotFound => NO_ARTICLE_SENTINEL,
        }
    }
}

impl std::fmt::Display for ArticleText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 从 HTML 文档中提取正文
///
/// 取第一个匹配 `selector` 的节点，其文本片段逐段 trim、
/// 去掉空段后以 `\n` 连接。没有匹配节点时返回 `NotFound`
pub fn extract_article(html: &str, selector: &str) -> Result<ArticleText, ExtractError> {
    let parsed = Selector::parse(selector).map_err(|e| ExtractError::InvalidSelector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })?;

    let document = Html::parse_document(html);
    match document.select(&parsed).next() {
        Some(node) => {
            let text = node
                .text()
                .map(str::trim)
                .filter(|segment| !segment.is_empty())
                .collect::<Vec<_>>()
                .join("\n");
            Ok(ArticleText::Found(text))
        }
        None => Ok(ArticleText::NotFound),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
          <nav>首页 | 新闻</nav>
          <article class="article" id="mp-editor">
            <p> 第一段。 </p>
            <p>第二段。</p>
            <p>   </p>
          </article>
          <footer>版权所有</footer>
        </body></html>
    "#;

    #[test]
    fn test_extracts_designated_node_joined_by_newline() {
        let article = extract_article(PAGE, DEFAULT_ARTICLE_SELECTOR).unwrap();
        assert!(article.is_found());
        assert_eq!(article.as_str(), "第一段。\n第二段。");
    }

    #[test]
    fn test_ignores_nodes_outside_selector() {
        let article = extract_article(PAGE, DEFAULT_ARTICLE_SELECTOR).unwrap();
        assert!(!article.as_str().contains("首页"));
        assert!(!article.as_str().contains("版权"));
    }

    #[test]
    fn test_missing_node_returns_sentinel() {
        let html = "<html><body><div>没有正文标签</div></body></html>";
        let article = extract_article(html, DEFAULT_ARTICLE_SELECTOR).unwrap();
        assert!(!article.is_found());
        assert_eq!(article.as_str(), NO_ARTICLE_SENTINEL);
    }

    #[test]
    fn test_selector_requires_class_and_id() {
        // 标签相同但 class/id 不匹配的节点不算正文
        let html = r#"<article class="other" id="x">别的文章</article>"#;
        let article = extract_article(html, DEFAULT_ARTICLE_SELECTOR).unwrap();
        assert_eq!(article, ArticleText::NotFound);
    }

    #[test]
    fn test_malformed_html_does_not_abort() {
        // 未闭合的标签由容错解析兜底
        let html = r#"<article class="article" id="mp-editor"><p>残缺"#;
        let article = extract_article(html, DEFAULT_ARTICLE_SELECTOR).unwrap();
        assert_eq!(article.as_str(), "残缺");
    }

    #[test]
    fn test_empty_article_node_is_found_but_empty() {
        // 节点存在但没有文本：与“未找到”是不同的结果
        let html = r#"<article class="article" id="mp-editor"></article>"#;
        let article = extract_article(html, DEFAULT_ARTICLE_SELECTOR).unwrap();
        assert!(article.is_found());
        assert_eq!(article.as_str(), "");
    }

    #[test]
    fn test_invalid_selector_is_an_error() {
        let err = extract_article(PAGE, "article[[").unwrap_err();
        assert!(matches!(err, ExtractError::InvalidSelector { .. }));
    }

    #[test]
    fn test_custom_selector() {
        let html = r#"<div class="content"><p>自定义节点</p></div>"#;
        let article = extract_article(html, "div.content").unwrap();
        assert_eq!(article.as_str(), "自定义节点");
    }
}
