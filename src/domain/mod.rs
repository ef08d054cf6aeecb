//! Domain Layer - 领域层
//!
//! 管道中不做 I/O 的纯算法部分:
//! - article: 正文提取与占位值
//! - frequency: 过滤、计数、排名、Top-N

pub mod article;
pub mod frequency;

pub use article::{
    extract_article, ArticleText, ExtractError, DEFAULT_ARTICLE_SELECTOR, NO_ARTICLE_SENTINEL,
};
pub use frequency::{filter_tokens, FrequencyTable, WordCount, MIN_WORD_CHARS, NOISE_TOKENS};
