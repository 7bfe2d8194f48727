//! # 元素分布图提取
//!
//! 在能量轴上以谱线能量为中心开窗，对每个像素的能谱积分得到二维元素分布图。
//!
//! ## 依赖关系
//! - 被 `commands/overlay.rs` 调用
//! - 使用 `eds/lines.rs` 解析谱线编码
//! - 使用 `models/signal.rs`

use crate::eds::lines::parse_line_code;
use crate::error::{Cv4emError, Result};
use crate::models::{ElementMap, SpectralImage};

/// 默认积分窗口宽度 (keV)
pub const DEFAULT_WINDOW_KEV: f64 = 0.15;

/// 对 `energy_kev ± window_kev / 2` 范围内的通道积分
pub fn line_map(
    signal: &SpectralImage,
    label: &str,
    energy_kev: f64,
    window_kev: f64,
) -> Result<ElementMap> {
    if window_kev <= 0.0 || !window_kev.is_finite() {
        return Err(Cv4emError::InvalidArgument(format!(
            "integration window must be positive, got {}",
            window_kev
        )));
    }

    let energy_axis = &signal.axes[2];
    let half = window_kev / 2.0;
    let channels: Vec<usize> = (0..energy_axis.size)
        .filter(|&i| (energy_axis.value_at(i) - energy_kev).abs() <= half)
        .collect();

    if channels.is_empty() {
        return Err(Cv4emError::InvalidArgument(format!(
            "{} at {:.3} keV is outside the energy range of '{}'",
            label, energy_kev, signal.metadata.title
        )));
    }

    let (width, height) = (signal.width(), signal.height());
    let mut data = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let spectrum = signal.spectrum(x, y);
            data.push(channels.iter().map(|&c| spectrum[c]).sum::<f32>());
        }
    }

    Ok(ElementMap::new(label, width, height, data))
}

/// 为每条谱线编码生成一张分布图，顺序与输入一致
pub fn maps_for_lines<S: AsRef<str>>(
    signal: &SpectralImage,
    lines: &[S],
    window_kev: f64,
) -> Result<Vec<ElementMap>> {
    lines
        .iter()
        .map(|line| {
            let code = parse_line_code(line.as_ref())?;
            let energy = code.energy_kev()?;
            line_map(signal, &code.to_string(), energy, window_kev)
        })
        .collect()
}
