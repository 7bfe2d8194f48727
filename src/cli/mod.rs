//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `kfactor`: EDS k 因子查询
//! - `calibrate`: NBED 相机长度标定
//! - `load`: 加载 EDAX HDF5 文件（单文件或目录批量）
//! - `lines`: 元素与 X 射线谱线选择
//! - `overlay`: 元素分布图提取与叠加
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: kfactor, calibrate, load, lines, overlay

pub mod calibrate;
pub mod kfactor;
pub mod lines;
pub mod load;
pub mod overlay;

use crate::models::LineFamily;

use clap::{Parser, Subcommand, ValueEnum};

/// cv4em - 电子显微镜数据标定与可视化工具
#[derive(Parser)]
#[command(name = "cv4em")]
#[command(author = "Mengkun Tian")]
#[command(version)]
#[command(about = "Calibration and visualization helpers for electron microscopy", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Look up EDS k-factors for X-ray lines (e.g. Al_Ka)
    Kfactor(kfactor::KfactorArgs),

    /// Resolve the NBED pixel scale for a camera length
    Calibrate(calibrate::CalibrateArgs),

    /// Load EDAX HDF5 exports and summarize the spectrum images
    Load(load::LoadArgs),

    /// Select elements and list their characteristic X-ray lines
    Lines(lines::LinesArgs),

    /// Extract elemental maps and render them individually or as an overlay
    Overlay(overlay::OverlayArgs),
}

/// X 射线线系（命令行取值）
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum FamilyArg {
    /// K series (Kα)
    K,
    /// L series (Lα)
    L,
    /// M series (Mα)
    M,
}

impl From<FamilyArg> for LineFamily {
    fn from(arg: FamilyArg) -> Self {
        match arg {
            FamilyArg::K => LineFamily::K,
            FamilyArg::L => LineFamily::L,
            FamilyArg::M => LineFamily::M,
        }
    }
}

/// 逗号分隔的线系列表转换为 `LineFamily`
pub fn to_families(args: &[FamilyArg]) -> Vec<LineFamily> {
    args.iter().map(|&f| f.into()).collect()
}
