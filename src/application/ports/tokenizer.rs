//! Tokenizer Port - 分词抽象
//!
//! 中文没有词间空白，切分需要词典/统计模型消解歧义边界。
//! 管道只依赖「给定文本，产出有序词序列」这一个能力，
//! 底层分词模型可以整体替换而不影响其他组件

/// Tokenizer Port
///
/// 分词器接口。实现必须满足:
/// - 不修改输入文本
/// - 输出顺序与原文一致（可含重复与噪声词，过滤在下游）
/// - 同一输入产出逐位相同的结果
pub trait TokenizerPort: Send + Sync {
    /// 将文本切分为有序的词序列
    fn tokenize(&self, text: &str) -> Vec<String>;
}
