//! # overlay 子命令 CLI 定义
//!
//! 提取元素分布图并渲染为单图或叠加图
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/overlay.rs`

use crate::eds::maps::DEFAULT_WINDOW_KEV;
use crate::overlay::compose::{DEFAULT_ALPHA, DEFAULT_VMAX_SCALER};

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// 渲染模式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum OverlayMode {
    /// All maps composited on one black background
    #[default]
    Overlay,
    /// One black-to-color panel per map
    Individual,
}

impl std::fmt::Display for OverlayMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OverlayMode::Overlay => write!(f, "overlay"),
            OverlayMode::Individual => write!(f, "individual"),
        }
    }
}

/// overlay 子命令参数
#[derive(Args, Debug)]
pub struct OverlayArgs {
    /// EDAX HDF5 file
    pub input: PathBuf,

    /// X-ray lines to map (comma separated, e.g. "Al_Ka,O_Ka")
    #[arg(short, long, value_delimiter = ',', required = true)]
    pub lines: Vec<String>,

    /// Rendering mode
    #[arg(short, long, value_enum, default_value = "overlay")]
    pub mode: OverlayMode,

    /// Index of the spectrum image in the file
    #[arg(long, default_value_t = 0)]
    pub index: usize,

    /// Integration window around each line energy (keV)
    #[arg(short, long, default_value_t = DEFAULT_WINDOW_KEV)]
    pub window: f64,

    /// Opacity of each map in overlay mode
    #[arg(long, default_value_t = DEFAULT_ALPHA)]
    pub alpha: f32,

    /// Divide each map's maximum by this factor to get the color limit in overlay mode
    #[arg(long, default_value_t = DEFAULT_VMAX_SCALER)]
    pub vmax_scaler: f32,

    /// Output image (.png or .svg)
    #[arg(short, long, default_value = "eds_overlay.png")]
    pub output: PathBuf,

    /// Image size in pixels (overlay) or panel size (individual)
    #[arg(long, default_value_t = 800)]
    pub size: u32,

    /// Title for the overlay image
    #[arg(long)]
    pub title: Option<String>,
}
