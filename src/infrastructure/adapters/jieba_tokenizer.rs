//! Jieba Tokenizer - 基于 jieba-rs 的中文分词
//!
//! 实现 TokenizerPort trait。词典 DAG 上取最大概率路径消解歧义边界；
//! 词典外的连续片段默认逐字回退（HMM 新词发现可配置开启）

use jieba_rs::Jieba;

use crate::application::ports::TokenizerPort;

/// Jieba Tokenizer 配置
#[derive(Debug, Clone)]
pub struct JiebaTokenizerConfig {
    /// 是否对词典外片段启用 HMM 新词发现。
    /// 关闭时未知片段逐字切分，结果完全由词典决定
    pub hmm: bool,
}

impl Default for JiebaTokenizerConfig {
    fn default() -> Self {
        Self { hmm: false }
    }
}

/// Jieba Tokenizer
///
/// 词典在构造时加载一次，之后的切分只读不写，可跨调用复用
pub struct JiebaTokenizer {
    jieba: Jieba,
    hmm: bool,
}

impl JiebaTokenizer {
    /// 创建新的分词器（加载内置词典，开销较大，建议整个进程复用一个实例）
    pub fn new(config: JiebaTokenizerConfig) -> Self {
        Self {
            jieba: Jieba::new(),
            hmm: config.hmm,
        }
    }

    /// 使用默认配置创建
    pub fn with_defaults() -> Self {
        Self::new(JiebaTokenizerConfig::default())
    }
}

impl TokenizerPort for JiebaTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        self.jieba
            .cut(text, self.hmm)
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}
