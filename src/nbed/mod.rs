//! # NBED 模块
//!
//! 纳米束电子衍射 (NBED) 数据的相机长度标定。
//!
//! ## 依赖关系
//! - 被 `commands/calibrate.rs` 使用
//! - 子模块: calibration

pub mod calibration;
