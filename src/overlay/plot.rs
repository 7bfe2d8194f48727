//! # 分布图输出
//!
//! 使用 `plotters` 把 RGB 图像渲染为 PNG 或 SVG，每个像素绘制为一个矩形。
//!
//! ## 功能
//! - 单张叠加图（带标题与图例）
//! - 多张单图按网格排列
//!
//! ## 依赖关系
//! - 被 `commands/overlay.rs` 调用
//! - 使用 `overlay/compose.rs` 的 `RgbImage`
//! - 使用 `plotters` 渲染图像

use crate::error::{Cv4emError, Result};
use crate::overlay::compose::RgbImage;

use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

/// 一个带标题的面板
pub struct Panel<'a> {
    pub title: String,
    pub image: &'a RgbImage,
}

/// 图例条目：标签与颜色
pub type LegendEntry = (String, (u8, u8, u8));

fn plot_err<E: std::fmt::Debug>(e: E) -> Cv4emError {
    Cv4emError::PlotError(format!("{:?}", e))
}

/// 根据扩展名选择后端
pub fn is_svg(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("svg"))
}

/// 渲染叠加图
pub fn render_overlay(
    image: &RgbImage,
    legend: &[LegendEntry],
    output_path: &Path,
    title: &str,
    size: (u32, u32),
) -> Result<()> {
    let panel = Panel {
        title: title.to_string(),
        image,
    };
    if is_svg(output_path) {
        let root = SVGBackend::new(output_path, size).into_drawing_area();
        draw_panel(&root, &panel, 28, legend)?;
        root.present().map_err(plot_err)?;
    } else {
        let root = BitMapBackend::new(output_path, size).into_drawing_area();
        draw_panel(&root, &panel, 28, legend)?;
        root.present().map_err(plot_err)?;
    }
    Ok(())
}

/// 网格排列多张单图，每张面板 `panel_size` 像素
pub fn render_panels(panels: &[Panel], output_path: &Path, panel_size: u32) -> Result<()> {
    if panels.is_empty() {
        return Err(Cv4emError::InvalidArgument("no maps to render".to_string()));
    }

    let cols = (panels.len() as f64).sqrt().ceil() as usize;
    let rows = panels.len().div_ceil(cols);
    let size = (panel_size * cols as u32, panel_size * rows as u32);

    if is_svg(output_path) {
        let root = SVGBackend::new(output_path, size).into_drawing_area();
        draw_grid(&root, panels, rows, cols)?;
        root.present().map_err(plot_err)?;
    } else {
        let root = BitMapBackend::new(output_path, size).into_drawing_area();
        draw_grid(&root, panels, rows, cols)?;
        root.present().map_err(plot_err)?;
    }
    Ok(())
}

fn draw_grid<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    panels: &[Panel],
    rows: usize,
    cols: usize,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE).map_err(plot_err)?;
    for (area, panel) in root.split_evenly((rows, cols)).iter().zip(panels) {
        draw_panel(area, panel, 18, &[])?;
    }
    Ok(())
}

/// 绘制单个面板：标题 + 逐像素矩形 + 可选图例
fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    panel: &Panel,
    font_size: u32,
    legend: &[LegendEntry],
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    area.fill(&WHITE).map_err(plot_err)?;

    let image = panel.image;
    let (w, h) = (image.width as i32, image.height as i32);

    let mut builder = ChartBuilder::on(area);
    builder.margin(10);
    if !panel.title.is_empty() {
        builder.caption(&panel.title, ("sans-serif", font_size).into_font());
    }
    let mut chart = builder.build_cartesian_2d(0..w, 0..h).map_err(plot_err)?;

    chart
        .draw_series((0..image.height).flat_map(|y| {
            (0..image.width).map(move |x| {
                let (r, g, b) = image.get_u8(x, y);
                // 第 0 行位于顶部
                let (x, y) = (x as i32, h - 1 - y as i32);
                Rectangle::new([(x, y), (x + 1, y + 1)], RGBColor(r, g, b).filled())
            })
        }))
        .map_err(plot_err)?;

    for (label, (r, g, b)) in legend {
        let color = RGBColor(*r, *g, *b);
        chart
            .draw_series(std::iter::once(Circle::new((0, 0), 0, color.filled())))
            .map_err(plot_err)?
            .label(label.as_str())
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled()));
    }

    if !legend.is_empty() {
        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(("sans-serif", 14))
            .draw()
            .map_err(plot_err)?;
    }

    Ok(())
}
