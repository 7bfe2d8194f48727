//! # 分布图合成
//!
//! 把元素分布图映射为 RGB 图像：单图模式使用黑 → 颜色色图并按图内最小/最大值归一化；
//! 叠加模式把所有分布图按顺序以 `alpha * t` 的覆盖率合成到黑色背景上，
//! 每张图的归一化区间为 `[0, max / vmax_scaler]`。
//!
//! ## 依赖关系
//! - 被 `commands/overlay.rs` 调用
//! - 使用 `overlay/colormap.rs`
//! - 使用 `models/signal.rs` 的 `ElementMap`

use crate::error::{Cv4emError, Result};
use crate::models::ElementMap;
use crate::overlay::colormap::{Colormap, ColormapKind};

/// 默认叠加透明度
pub const DEFAULT_ALPHA: f32 = 0.8;
/// 默认 vmax 缩放系数
pub const DEFAULT_VMAX_SCALER: f32 = 1.5;

/// 行优先 RGB 图像，分量在 `[0, 1]`
#[derive(Debug, Clone, PartialEq)]
pub struct RgbImage {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<[f32; 3]>,
}

impl RgbImage {
    pub fn black(width: usize, height: usize) -> Self {
        RgbImage {
            width,
            height,
            pixels: vec![[0.0; 3]; width * height],
        }
    }

    pub fn get(&self, x: usize, y: usize) -> [f32; 3] {
        self.pixels[y * self.width + x]
    }

    /// 转换为 8 位分量
    pub fn get_u8(&self, x: usize, y: usize) -> (u8, u8, u8) {
        let [r, g, b] = self.get(x, y);
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        (q(r), q(g), q(b))
    }
}

/// 线性归一化到 `[0, 1]`，`vmax <= vmin` 时全部为 0
pub fn normalize(map: &ElementMap, vmin: f32, vmax: f32) -> Vec<f32> {
    let range = vmax - vmin;
    if range <= 0.0 || !range.is_finite() {
        return vec![0.0; map.data.len()];
    }
    map.data
        .iter()
        .map(|v| ((v - vmin) / range).clamp(0.0, 1.0))
        .collect()
}

/// 单图：黑 → 颜色
pub fn render_individual(map: &ElementMap, cmap: &Colormap) -> RgbImage {
    let vmin = map.data.iter().copied().fold(f32::INFINITY, f32::min);
    let values = normalize(map, vmin, map.max());

    let mut image = RgbImage::black(map.width, map.height);
    for (px, t) in image.pixels.iter_mut().zip(values) {
        let [r, g, b, _] = cmap.rgba(t);
        *px = [r, g, b];
    }
    image
}

/// 叠加合成，`maps` 与 `cmaps` 一一对应
pub fn compose_overlay(
    maps: &[ElementMap],
    cmaps: &[Colormap],
    alpha: f32,
    vmax_scaler: f32,
) -> Result<RgbImage> {
    let first = maps
        .first()
        .ok_or_else(|| Cv4emError::InvalidArgument("no maps to overlay".to_string()))?;
    if maps.len() != cmaps.len() {
        return Err(Cv4emError::InvalidArgument(format!(
            "{} maps but {} colormaps",
            maps.len(),
            cmaps.len()
        )));
    }
    if !(0.0..=1.0).contains(&alpha) {
        return Err(Cv4emError::InvalidArgument(format!(
            "alpha must be within [0, 1], got {}",
            alpha
        )));
    }
    if vmax_scaler <= 0.0 {
        return Err(Cv4emError::InvalidArgument(format!(
            "vmax scaler must be positive, got {}",
            vmax_scaler
        )));
    }

    let (width, height) = (first.width, first.height);
    if let Some(bad) = maps.iter().find(|m| m.width != width || m.height != height) {
        return Err(Cv4emError::InvalidArgument(format!(
            "map '{}' is {}x{}, expected {}x{}",
            bad.label, bad.width, bad.height, width, height
        )));
    }

    let mut image = RgbImage::black(width, height);
    for (map, cmap) in maps.iter().zip(cmaps) {
        if cmap.kind != ColormapKind::Overlay {
            log::warn!("Colormap '{}' is not an overlay colormap", cmap);
        }
        let values = normalize(map, 0.0, map.max() / vmax_scaler);
        for (px, t) in image.pixels.iter_mut().zip(values) {
            let [r, g, b, a] = cmap.rgba(t);
            let coverage = alpha * a;
            for (c, v) in px.iter_mut().zip([r, g, b]) {
                *c = *c * (1.0 - coverage) + v * coverage;
            }
        }
    }
    Ok(image)
}
