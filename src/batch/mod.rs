//! # 批量处理模块
//!
//! 对目录中的多个 HDF5 文件进行批量加载。
//!
//! ## 功能
//! - 自动检测输入类型（文件/目录）
//! - 收集匹配文件列表
//! - 并行处理，结果保持文件顺序
//!
//! ## 依赖关系
//! - 被 `commands/load.rs` 使用
//! - 使用 `rayon` 进行并行处理
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod runner;

pub use collector::FileCollector;
pub use runner::{BatchRunner, ProcessResult};
