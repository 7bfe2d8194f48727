//! # 数据模型模块
//!
//! 定义谱图像、元素分布图与 X 射线线系的统一数据模型。
//!
//! ## 依赖关系
//! - 被 `loader/`, `nbed/`, `eds/`, `overlay/` 和 `commands/` 使用
//! - 子模块: signal, line

pub mod line;
pub mod signal;

pub use line::LineFamily;
pub use signal::{ElementMap, SpectralImage};
