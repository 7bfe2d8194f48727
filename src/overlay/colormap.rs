//! # 颜色与线性色图
//!
//! 元素分布图按顺序循环使用 15 种命名颜色。每种颜色有两种色图：
//! - 单图 (`Individual`): 黑色 → 颜色
//! - 叠加 (`Overlay`): 透明 → 颜色
//!
//! ## 依赖关系
//! - 被 `overlay/compose.rs` 使用
//! - 无外部模块依赖

use crate::error::{Cv4emError, Result};

use std::fmt;

/// 8 位 RGB 颜色
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// 按 `[0, 1]` 分量缩放
    pub fn scaled(self, t: f32) -> [f32; 3] {
        [
            self.0 as f32 / 255.0 * t,
            self.1 as f32 / 255.0 * t,
            self.2 as f32 / 255.0 * t,
        ]
    }
}

/// 命名颜色，顺序即循环顺序
pub const NAMED_COLORS: [(&str, Rgb); 15] = [
    ("blue", Rgb(0, 0, 255)),
    ("green", Rgb(0, 128, 0)),
    ("red", Rgb(255, 0, 0)),
    ("cyan", Rgb(0, 255, 255)),
    ("magenta", Rgb(255, 0, 255)),
    ("yellow", Rgb(255, 255, 0)),
    ("white", Rgb(255, 255, 255)),
    ("navy", Rgb(0, 0, 128)),
    ("teal", Rgb(0, 128, 128)),
    ("maroon", Rgb(128, 0, 0)),
    ("olive", Rgb(128, 128, 0)),
    ("purple", Rgb(128, 0, 128)),
    ("gold", Rgb(255, 215, 0)),
    ("brown", Rgb(165, 42, 42)),
    ("pink", Rgb(255, 192, 203)),
];

/// 第 `index` 张图使用的颜色名
pub fn cycle_color(index: usize) -> &'static str {
    NAMED_COLORS[index % NAMED_COLORS.len()].0
}

pub fn named_color(name: &str) -> Result<Rgb> {
    NAMED_COLORS
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, c)| *c)
        .ok_or_else(|| Cv4emError::key_not_found("color", name))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColormapKind {
    Individual,
    Overlay,
}

/// 单色线性色图
#[derive(Debug, Clone)]
pub struct Colormap {
    pub name: String,
    pub color: Rgb,
    pub kind: ColormapKind,
}

impl Colormap {
    pub fn new(name: &str, kind: ColormapKind) -> Result<Self> {
        Ok(Colormap {
            name: name.to_string(),
            color: named_color(name)?,
            kind,
        })
    }

    /// 归一化强度 `t` 对应的 RGBA（分量均在 `[0, 1]`）
    pub fn rgba(&self, t: f32) -> [f32; 4] {
        let t = t.clamp(0.0, 1.0);
        match self.kind {
            ColormapKind::Individual => {
                let [r, g, b] = self.color.scaled(t);
                [r, g, b, 1.0]
            }
            ColormapKind::Overlay => {
                let [r, g, b] = self.color.scaled(1.0);
                [r, g, b, t]
            }
        }
    }
}

impl fmt::Display for Colormap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
