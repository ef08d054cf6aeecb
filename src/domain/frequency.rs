//! 词频统计
//!
//! 过滤 → 计数 → 排名 → Top-N 的纯算法部分，不做任何 I/O

use std::collections::HashMap;

use serde::Serialize;

/// 噪声词集合
/// 过滤阶段丢弃与其中任一项（trim 后）完全相等的词
pub const NOISE_TOKENS: &[&str] = &[
    "\n", " ", "。", ",", "，", "！", "：", "；", "(", ")", "“", "”",
];

/// 过滤保留的最小字符数（按字符计，不是字节）
pub const MIN_WORD_CHARS: usize = 2;

/// 过滤分词结果
///
/// 单次线性遍历，保持顺序：
/// 1. 丢弃字符数不足 [`MIN_WORD_CHARS`] 的词
/// 2. 丢弃 trim 后命中 [`NOISE_TOKENS`] 的词
///
/// 全部被过滤时返回空序列，不是错误
pub fn filter_tokens<I>(tokens: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    tokens
        .into_iter()
        .filter(|token| token.chars().count() >= MIN_WORD_CHARS)
        .filter(|token| !NOISE_TOKENS.contains(&token.trim()))
        .collect()
}

/// 排名中的一项：词与出现次数
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// 词频表
///
/// 条目按首次出现顺序存放，首现序就是并列计数时的次级排序键。
/// 排序绝不依赖 HashMap 的迭代顺序
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    /// (词, 出现次数)，下标即首现序
    entries: Vec<(String, usize)>,
}

impl FrequencyTable {
    /// 对过滤后的词序列计数
    pub fn from_tokens(tokens: &[String]) -> Self {
        let mut slots: HashMap<&str, usize> = HashMap::new();
        let mut entries: Vec<(String, usize)> = Vec::new();

        for token in tokens {
            match slots.get(token.as_str()) {
                Some(&slot) => entries[slot].1 += 1,
                None => {
                    slots.insert(token.as_str(), entries.len());
                    entries.push((token.clone(), 1));
                }
            }
        }

        Self { entries }
    }

    /// 不同词的数量
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 所有计数之和，恒等于过滤后词序列的长度
    pub fn total_count(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// 完整排名：计数降序，计数相同按首现序升序
    ///
    /// 条目本身就按首现序存放，稳定排序即可满足次级键
    pub fn ranking(&self) -> Vec<WordCount> {
        let mut ranked: Vec<WordCount> = self
            .entries
            .iter()
            .map(|(word, count)| WordCount {
                word: word.clone(),
                count: *count,
            })
            .collect();
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked
    }

    /// Top-N：完整排名的前缀，长度为 clamp(n, 1, len)
    ///
    /// 与 [`ranking`](Self::ranking) 使用同一比较器，任意 N 下都是其前缀。
    /// 空表对任意 N 返回空切片
    pub fn top_n(&self, n: usize) -> Vec<WordCount> {
        if self.is_empty() {
            return Vec::new();
        }
        let bound = n.clamp(1, self.len());
        let mut ranked = self.ranking();
        ranked.truncate(bound);
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_filter_drops_short_and_noise() {
        let input = tokens(&["我", "爱", "北京", "天安门", "。", "天安门", "很", "美", "。"]);
        let filtered = filter_tokens(input);
        assert_eq!(filtered, tokens(&["北京", "天安门", "天安门"]));
    }

    #[test]
    fn test_filter_exclusion_invariant() {
        let input = tokens(&["\n", " ", "，", "一个", "x", "词语", "！！"]);
        let filtered = filter_tokens(input);
        for token in &filtered {
            assert!(token.chars().count() >= MIN_WORD_CHARS);
            assert!(!NOISE_TOKENS.contains(&token.trim()));
        }
        // 两个字符的噪声 "！！" 不在噪声集合中，应保留
        assert_eq!(filtered, tokens(&["一个", "词语", "！！"]));
    }

    #[test]
    fn test_filter_is_idempotent() {
        let input = tokens(&["我", "北京", "。", "天安门", " ", "很美"]);
        let once = filter_tokens(input);
        let twice = filter_tokens(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_filter_length_counts_chars_not_bytes() {
        // "北京" 是 6 字节 2 字符，"哦" 是 3 字节 1 字符
        let filtered = filter_tokens(tokens(&["北京", "哦"]));
        assert_eq!(filtered, tokens(&["北京"]));
    }

    #[test]
    fn test_filter_all_removed_yields_empty() {
        let filtered = filter_tokens(tokens(&["。", "，", "我", " "]));
        assert!(filtered.is_empty());

        let table = FrequencyTable::from_tokens(&filtered);
        assert!(table.is_empty());
        assert!(table.ranking().is_empty());
        assert!(table.top_n(20).is_empty());
    }

    #[test]
    fn test_count_conservation() {
        let filtered = tokens(&["北京", "天安门", "天安门", "广场", "北京"]);
        let table = FrequencyTable::from_tokens(&filtered);
        assert_eq!(table.total_count(), filtered.len());
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_ranking_scenario() {
        // 北京:1, 天安门:2
        let filtered = tokens(&["北京", "天安门", "天安门"]);
        let table = FrequencyTable::from_tokens(&filtered);
        let ranking = table.ranking();
        assert_eq!(ranking.len(), 2);
        assert_eq!(ranking[0].word, "天安门");
        assert_eq!(ranking[0].count, 2);
        assert_eq!(ranking[1].word, "北京");
        assert_eq!(ranking[1].count, 1);
        assert_eq!(table.top_n(1), vec![ranking[0].clone()]);
    }

    #[test]
    fn test_ties_break_on_first_occurrence() {
        // 乙 先于 甲甲 出现，计数相同时 乙乙 排前
        let filtered = tokens(&["乙乙", "甲甲", "丙丙", "甲甲", "乙乙"]);
        let table = FrequencyTable::from_tokens(&filtered);
        let ranking = table.ranking();
        assert_eq!(ranking[0].word, "乙乙");
        assert_eq!(ranking[1].word, "甲甲");
        assert_eq!(ranking[2].word, "丙丙");
    }

    #[test]
    fn test_top_n_is_prefix_of_ranking() {
        let filtered = tokens(&["aa", "bb", "cc", "bb", "dd", "cc", "bb"]);
        let table = FrequencyTable::from_tokens(&filtered);
        let full = table.ranking();
        for n in 1..=full.len() + 3 {
            let top = table.top_n(n);
            assert_eq!(top.as_slice(), &full[..n.min(full.len())]);
        }
    }

    #[test]
    fn test_top_n_monotonic() {
        let filtered = tokens(&["aa", "bb", "cc", "bb", "dd"]);
        let table = FrequencyTable::from_tokens(&filtered);
        for n1 in 1..=4 {
            for n2 in n1..=6 {
                let small = table.top_n(n1);
                let large = table.top_n(n2);
                assert_eq!(small.as_slice(), &large[..small.len()]);
            }
        }
    }

    #[test]
    fn test_top_n_clamps_out_of_range() {
        let filtered = tokens(&["aa", "bb"]);
        let table = FrequencyTable::from_tokens(&filtered);
        // N 超过表大小时收缩到表大小
        assert_eq!(table.top_n(100).len(), 2);
        // N 为 0 时按下界 1 处理，而不是报错
        assert_eq!(table.top_n(0).len(), 1);
    }

    #[test]
    fn test_determinism() {
        let filtered = tokens(&["天安门", "北京", "天安门", "广场", "北京", "广场"]);
        let a = FrequencyTable::from_tokens(&filtered);
        let b = FrequencyTable::from_tokens(&filtered);
        assert_eq!(a.ranking(), b.ranking());
        assert_eq!(a.top_n(2), b.top_n(2));
    }
}
