//! Text Chart Renderer - 终端文本渲染
//!
//! 实现 ChartRendererPort trait 的占位渲染方：把 Top-N 切片画成
//! 等宽文本条形。真实的图像渲染（词云、饼图等）属于外部协作方，
//! 这里只保证每种图表类型都有可用的退化呈现

use crate::application::ports::{
    ChartKind, ChartRendererPort, RenderError, RenderRequest, RenderedChart,
};

/// 条形的最大字符宽度
const MAX_BAR_WIDTH: usize = 40;

/// Text Chart Renderer
#[derive(Debug, Default)]
pub struct TextChartRenderer;

impl TextChartRenderer {
    pub fn new() -> Self {
        Self
    }

    fn render_text(&self, request: &RenderRequest) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "{} ({})\n",
            request.kind.label(),
            request.kind.as_str()
        ));

        if request.entries.is_empty() {
            out.push_str("（无数据）\n");
            return out;
        }

        let max_count = request
            .entries
            .iter()
            .map(|e| e.count)
            .max()
            .unwrap_or(1)
            .max(1);

        for entry in &request.entries {
            let width = (entry.count * MAX_BAR_WIDTH).div_ceil(max_count);
            out.push_str(&format!(
                "{:<12} {} {}\n",
                entry.word,
                "#".repeat(width),
                entry.count
            ));
        }
        out
    }
}

impl ChartRendererPort for TextChartRenderer {
    fn render(&self, request: RenderRequest) -> Result<RenderedChart, RenderError> {
        let text = self.render_text(&request);
        Ok(RenderedChart {
            kind: request.kind,
            data: text.into_bytes(),
            content_type: "text/plain; charset=utf-8",
        })
    }
}
