//! # overlay 命令实现
//!
//! 从 EDAX 谱图像中提取元素分布图，渲染为单图网格或彩色叠加图。
//!
//! ## 依赖关系
//! - 使用 `cli/overlay.rs` 定义的参数
//! - 使用 `loader/` 加载文件
//! - 使用 `eds/maps.rs` 提取分布图
//! - 使用 `overlay/` 合成与渲染

use crate::cli::overlay::{OverlayArgs, OverlayMode};
use crate::eds::maps_for_lines;
use crate::error::{Cv4emError, Result};
use crate::loader;
use crate::models::ElementMap;
use crate::overlay::plot::LegendEntry;
use crate::overlay::{
    compose_overlay, cycle_color, render_individual, render_overlay, render_panels, Colormap,
    ColormapKind, Panel,
};
use crate::utils::output;

/// 执行 overlay 命令
pub fn execute(args: OverlayArgs) -> Result<()> {
    output::print_header("EDS Elemental Maps");

    let report = loader::load_file(&args.input)?;
    for d in &report.diagnostics {
        output::print_skip(&d.entry, &d.message);
    }

    let count = report.signals.len();
    let signal = report.signals.get(args.index).ok_or_else(|| {
        Cv4emError::InvalidArgument(format!(
            "spectrum image index {} out of range ({} found)",
            args.index, count
        ))
    })?;
    output::print_info(&format!(
        "Using '{}' ({}×{} px, {} channels)",
        signal.metadata.title,
        signal.width(),
        signal.height(),
        signal.channels()
    ));

    let maps = maps_for_lines(signal, &args.lines, args.window)?;

    match args.mode {
        OverlayMode::Overlay => {
            let title = args
                .title
                .clone()
                .unwrap_or_else(|| "Overlay of EDS Maps".to_string());
            draw_overlay(&maps, &args, &title)?;
        }
        OverlayMode::Individual => draw_individual(&maps, &args)?,
    }

    output::print_success(&format!(
        "{} map(s) rendered ({}) to '{}'",
        maps.len(),
        args.mode,
        args.output.display()
    ));
    Ok(())
}

/// 第 i 张图的色图
fn colormaps(count: usize, kind: ColormapKind) -> Result<Vec<Colormap>> {
    (0..count)
        .map(|i| Colormap::new(cycle_color(i), kind))
        .collect()
}

fn draw_overlay(maps: &[ElementMap], args: &OverlayArgs, title: &str) -> Result<()> {
    let cmaps = colormaps(maps.len(), ColormapKind::Overlay)?;
    let image = compose_overlay(maps, &cmaps, args.alpha, args.vmax_scaler)?;

    let legend: Vec<LegendEntry> = maps
        .iter()
        .zip(&cmaps)
        .map(|(m, c)| (m.label.clone(), (c.color.0, c.color.1, c.color.2)))
        .collect();

    render_overlay(&image, &legend, &args.output, title, (args.size, args.size))
}

fn draw_individual(maps: &[ElementMap], args: &OverlayArgs) -> Result<()> {
    let cmaps = colormaps(maps.len(), ColormapKind::Individual)?;
    let images: Vec<_> = maps
        .iter()
        .zip(&cmaps)
        .map(|(m, c)| render_individual(m, c))
        .collect();

    let panels: Vec<Panel> = maps
        .iter()
        .zip(&cmaps)
        .zip(&images)
        .map(|((m, c), image)| Panel {
            title: format!("{} - {}", m.label, c),
            image,
        })
        .collect();

    render_panels(&panels, &args.output, args.size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colormaps_cycle() {
        let cmaps = colormaps(16, ColormapKind::Overlay).unwrap();
        assert_eq!(cmaps[0].name, "blue");
        assert_eq!(cmaps[2].name, "red");
        assert_eq!(cmaps[15].name, "blue");
        assert!(cmaps.iter().all(|c| c.kind == ColormapKind::Overlay));
    }
}
