//! Analyze Use Case - 词频分析用例
//!
//! 管道编排：抓取 → 提取 → 分词 → 过滤 → 计数 → 排名 → Top-N。
//! 数据严格单向流动，每个阶段独占自己的产出，阶段之间无共享可变状态

use std::sync::Arc;

use serde::Serialize;

use crate::application::error::PipelineError;
use crate::application::ports::{
    ChartKind, ChartRendererPort, PageFetcherPort, RenderRequest, RenderedChart, TokenizerPort,
};
use crate::domain::{extract_article, filter_tokens, FrequencyTable, WordCount};

/// 一次分析请求
#[derive(Debug, Clone)]
pub struct AnalyzeUrl {
    /// 要分析的页面 URL
    pub url: String,
    /// Top-N 的 N，缺省用配置的默认值；越界会被收缩到表大小
    pub top_n: Option<usize>,
    /// 转交给渲染方的图表类型，None 表示不渲染
    pub chart: Option<ChartKind>,
}

/// 分析结果
///
/// article_found 让调用方能区分「正文确实为空」和「页面结构不识别」，
/// 两种情况下管道都正常给出（可能退化的）词频表
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub url: String,
    /// 实际探测出的页面编码
    pub encoding: String,
    /// 是否找到了指定的正文节点
    pub article_found: bool,
    /// 正文全文（未找到时为占位文本）
    pub article_text: String,
    /// 完整排名：计数降序、首现序升序
    pub ranking: Vec<WordCount>,
    /// Top-N 切片，恒为 ranking 的前缀
    pub top: Vec<WordCount>,
    /// 渲染方的产物（请求中带图表类型时才有）
    #[serde(skip)]
    pub chart: Option<RenderedChart>,
}

/// 用例配置
#[derive(Debug, Clone)]
pub struct AnalyzeConfig {
    /// 正文节点选择器
    pub selector: String,
    /// 未显式给 N 时的默认值
    pub default_top_n: usize,
}

impl Default for AnalyzeConfig {
    fn default() -> Self {
        Self {
            selector: crate::domain::DEFAULT_ARTICLE_SELECTOR.to_string(),
            default_top_n: 20,
        }
    }
}

/// AnalyzeUrl Handler
///
/// 持有三个端口：抓取、分词、渲染。一次 handle 跑完整条管道
pub struct AnalyzeUrlHandler {
    fetcher: Arc<dyn PageFetcherPort>,
    tokenizer: Arc<dyn TokenizerPort>,
    renderer: Arc<dyn ChartRendererPort>,
    config: AnalyzeConfig,
}

impl AnalyzeUrlHandler {
    pub fn new(
        fetcher: Arc<dyn PageFetcherPort>,
        tokenizer: Arc<dyn TokenizerPort>,
        renderer: Arc<dyn ChartRendererPort>,
        config: AnalyzeConfig,
    ) -> Self {
        Self {
            fetcher,
            tokenizer,
            renderer,
            config,
        }
    }

    pub async fn handle(&self, request: AnalyzeUrl) -> Result<AnalysisReport, PipelineError> {
        // 1. 抓取并解码
        let page = self
            .fetcher
            .fetch(&request.url)
            .await
            .map_err(|e| PipelineError::fetch(&request.url, e))?;

        tracing::debug!(
            url = %page.url,
            encoding = %page.encoding,
            html_len = page.html.len(),
            "页面抓取完成"
        );

        // 2. 提取正文；未找到节点不是错误，用占位文本继续
        let article = extract_article(&page.html, &self.config.selector)?;
        if !article.is_found() {
            tracing::warn!(
                url = %page.url,
                selector = %self.config.selector,
                "未找到正文节点，使用占位文本继续"
            );
        }

        // 3-5. 分词、过滤、计数
        let tokens = self.tokenizer.tokenize(article.as_str());
        let filtered = filter_tokens(tokens);
        let table = FrequencyTable::from_tokens(&filtered);

        tracing::info!(
            url = %page.url,
            filtered_tokens = filtered.len(),
            distinct_words = table.len(),
            "词频统计完成"
        );

        // 6. 排名与 Top-N（同一比较器，Top-N 恒为完整排名的前缀）
        let ranking = table.ranking();
        let top = table.top_n(request.top_n.unwrap_or(self.config.default_top_n));

        // 7. 图表类型对管道不透明，连同 Top-N 一起转交渲染方
        let chart = match request.chart {
            Some(kind) => Some(self.renderer.render(RenderRequest {
                kind,
                entries: top.clone(),
            })?),
            None => None,
        };

        Ok(AnalysisReport {
            url: page.url,
            encoding: page.encoding,
            article_found: article.is_found(),
            article_text: article.as_str().to_string(),
            ranking,
            top,
            chart,
        })
    }
}
