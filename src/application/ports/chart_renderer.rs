//! Chart Renderer Port - 图表渲染抽象
//!
//! 管道把图表类型当作不透明标记连同 Top-N 切片一起转交给渲染方，
//! 坐标轴、配色、字体等视觉呈现完全属于渲染方，不渗入核心

use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::domain::WordCount;

/// 渲染错误
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("不支持的图表类型: {0}")]
    UnsupportedKind(String),

    #[error("渲染失败: {0}")]
    Failed(String),
}

/// 图表类型
///
/// 与原始 UI 下拉框的七种图形一一对应
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    WordCloud,
    Bar,
    Pie,
    Line,
    Heatmap,
    Scatter,
    HorizontalBar,
}

impl ChartKind {
    pub const ALL: &'static [ChartKind] = &[
        ChartKind::WordCloud,
        ChartKind::Bar,
        ChartKind::Pie,
        ChartKind::Line,
        ChartKind::Heatmap,
        ChartKind::Scatter,
        ChartKind::HorizontalBar,
    ];

    /// 中文显示名
    pub fn label(&self) -> &'static str {
        match self {
            ChartKind::WordCloud => "词云图",
            ChartKind::Bar => "柱状图",
            ChartKind::Pie => "饼图",
            ChartKind::Line => "折线图",
            ChartKind::Heatmap => "热力图",
            ChartKind::Scatter => "散点图",
            ChartKind::HorizontalBar => "条形图",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::WordCloud => "wordcloud",
            ChartKind::Bar => "bar",
            ChartKind::Pie => "pie",
            ChartKind::Line => "line",
            ChartKind::Heatmap => "heatmap",
            ChartKind::Scatter => "scatter",
            ChartKind::HorizontalBar => "hbar",
        }
    }
}

impl FromStr for ChartKind {
    type Err = RenderError;

    /// 同时接受英文标记与中文显示名
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "wordcloud" | "词云图" => Ok(ChartKind::WordCloud),
            "bar" | "柱状图" => Ok(ChartKind::Bar),
            "pie" | "饼图" => Ok(ChartKind::Pie),
            "line" | "折线图" => Ok(ChartKind::Line),
            "heatmap" | "热力图" => Ok(ChartKind::Heatmap),
            "scatter" | "散点图" => Ok(ChartKind::Scatter),
            "hbar" | "条形图" => Ok(ChartKind::HorizontalBar),
            other => Err(RenderError::UnsupportedKind(other.to_string())),
        }
    }
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 渲染请求：图表类型 + Top-N 切片
#[derive(Debug, Clone)]
pub struct RenderRequest {
    pub kind: ChartKind,
    pub entries: Vec<WordCount>,
}

/// 渲染结果
#[derive(Debug, Clone)]
pub struct RenderedChart {
    pub kind: ChartKind,
    /// 渲染产物（文本渲染器输出 UTF-8 文本，图像渲染器输出图像字节）
    pub data: Vec<u8>,
    /// 产物的 MIME 类型
    pub content_type: &'static str,
}

/// Chart Renderer Port
///
/// 图表渲染方的抽象接口
pub trait ChartRendererPort: Send + Sync {
    /// 渲染 Top-N 切片
    ///
    /// 空切片必须渲染为「无数据」而不是失败
    fn render(&self, request: RenderRequest) -> Result<RenderedChart, RenderError>;
}
