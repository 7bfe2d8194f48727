//! # EDS 分析模块
//!
//! 能谱 (EDS/EDX) 相关的辅助功能。
//!
//! ## 子模块
//! - `kfactor`: k 因子查询
//! - `lines`: 元素与谱线选择
//! - `maps`: 元素分布图提取
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `data/` 和 `models/`

pub mod kfactor;
pub mod lines;
pub mod maps;

pub use kfactor::{find_kfactors, line_element, line_family};
pub use lines::{available_families, LineSelection};
pub use maps::maps_for_lines;
