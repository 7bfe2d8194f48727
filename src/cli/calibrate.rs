//! # calibrate 子命令 CLI 定义
//!
//! 根据电镜型号和相机长度查找 NBED 像素标定
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/calibrate.rs`

use clap::Args;
use std::path::PathBuf;

/// calibrate 子命令参数
#[derive(Args, Debug)]
pub struct CalibrateArgs {
    /// Microscope identifier (F30 or HD2700); defaults to the file metadata, then F30
    #[arg(short, long)]
    pub microscope: Option<String>,

    /// Camera length (mm for F30, instrument units for HD2700); prompted if omitted
    #[arg(short, long)]
    pub camera_length: Option<f64>,

    /// Print the calibration table of the microscope and exit
    #[arg(long, default_value_t = false)]
    pub list: bool,

    /// Calibrate every spectrum image in an EDAX HDF5 file instead of printing the scale
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// HD2700 camera length for images without one in their metadata (with --file)
    #[arg(long, requires = "file", conflicts_with = "no_prompt")]
    pub fallback: Option<f64>,

    /// Fail instead of prompting when an image has no camera length (with --file)
    #[arg(long, requires = "file", default_value_t = false)]
    pub no_prompt: bool,
}
