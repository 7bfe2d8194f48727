//! # 分布图叠加模块
//!
//! 把多张元素分布图按命名颜色合成并渲染为图片。
//!
//! ## 依赖关系
//! - 被 `commands/overlay.rs` 使用
//! - 子模块: colormap, compose, plot

pub mod colormap;
pub mod compose;
pub mod plot;

pub use colormap::{cycle_color, Colormap, ColormapKind};
pub use compose::{compose_overlay, render_individual};
pub use plot::{render_overlay, render_panels, Panel};
