//! 应用层错误定义
//!
//! 管道级致命错误才会出现在这里；阶段内的局部问题
//! （单个残缺节点、个别坏词元、过滤后为空）不会中断管道

use thiserror::Error;

use crate::application::ports::{FetchError, RenderError};
use crate::domain::ExtractError;

/// 管道错误
#[derive(Debug, Error)]
pub enum PipelineError {
    /// 抓取阶段失败，携带 URL 以便诊断
    #[error("页面抓取失败 [{url}]: {source}")]
    Fetch {
        url: String,
        #[source]
        source: FetchError,
    },

    /// 正文选择器本身非法（配置错误，不是「页面没有正文」）
    #[error("正文提取配置错误: {0}")]
    Extract(#[from] ExtractError),

    /// 图表渲染失败
    #[error("图表渲染失败: {0}")]
    Render(#[from] RenderError),
}

impl PipelineError {
    /// 创建抓取错误
    pub fn fetch(url: impl Into<String>, source: FetchError) -> Self {
        Self::Fetch {
            url: url.into(),
            source,
        }
    }
}
