//! Cipin - 网页中文词频分析
//!
//! 调用方外壳：解析参数、加载配置、跑一次分析管道并打印结果。
//! 用法: cipin <URL> [TOP_N] [图表类型]

use std::sync::Arc;

use cipin::application::{AnalyzeConfig, AnalyzeUrl, AnalyzeUrlHandler, ChartKind};
use cipin::config::{load_config, print_config};
use cipin::infrastructure::adapters::{
    HttpPageFetcher, HttpPageFetcherConfig, JiebaTokenizer, JiebaTokenizerConfig,
    TextChartRenderer,
};

/// 正文预览的最大字符数
const PREVIEW_CHARS: usize = 200;

fn usage() -> ! {
    eprintln!("用法: cipin <URL> [TOP_N] [图表类型]");
    eprintln!("图表类型: {}", ChartKind::ALL
        .iter()
        .map(|k| format!("{}({})", k.as_str(), k.label()))
        .collect::<Vec<_>>()
        .join(", "));
    std::process::exit(2);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 解析命令行：URL 必填，N 与图表类型可选
    let args: Vec<String> = std::env::args().skip(1).collect();
    let url = match args.first() {
        Some(url) => url.clone(),
        None => usage(),
    };
    let top_n: Option<usize> = match args.get(1) {
        Some(raw) => match raw.parse() {
            Ok(n) => Some(n),
            Err(_) => usage(),
        },
        None => None,
    };
    let chart: Option<ChartKind> = match args.get(2) {
        Some(raw) => match raw.parse() {
            Ok(kind) => Some(kind),
            Err(_) => usage(),
        },
        None => None,
    };

    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!("{},cipin={}", config.log.level, config.log.level);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("Cipin - 网页中文词频分析");
    print_config(&config);

    // 组装端口适配器
    let fetcher = Arc::new(HttpPageFetcher::new(HttpPageFetcherConfig {
        timeout_secs: config.fetch.timeout_secs,
        user_agent: config.fetch.user_agent.clone(),
    })?);
    let tokenizer = Arc::new(JiebaTokenizer::new(JiebaTokenizerConfig {
        hmm: config.analysis.hmm,
    }));
    let renderer = Arc::new(TextChartRenderer::new());

    let handler = AnalyzeUrlHandler::new(
        fetcher,
        tokenizer,
        renderer,
        AnalyzeConfig {
            selector: config.extract.selector.clone(),
            default_top_n: config.analysis.default_top_n,
        },
    );

    // 一次调用跑完整条管道
    let report = handler.handle(AnalyzeUrl { url, top_n, chart }).await?;

    // 正文预览
    println!("=== 全文展示 ({}) ===", report.encoding);
    if !report.article_found {
        println!("[未找到正文节点]");
    }
    let preview: String = report.article_text.chars().take(PREVIEW_CHARS).collect();
    println!("{}", preview);
    if report.article_text.chars().count() > PREVIEW_CHARS {
        println!("……（共 {} 字）", report.article_text.chars().count());
    }

    // 词频统计结果
    println!("\n=== 词频统计结果（共 {} 个词）===", report.ranking.len());
    println!("{}", serde_json::to_string_pretty(&report.ranking)?);

    println!("\n=== 词频最高 {} 统计结果 ===", report.top.len());
    for (rank, entry) in report.top.iter().enumerate() {
        println!("{:>3}. {:<12} {}", rank + 1, entry.word, entry.count);
    }

    // 渲染产物
    if let Some(chart) = report.chart {
        println!();
        println!("{}", String::from_utf8_lossy(&chart.data));
    }

    Ok(())
}
