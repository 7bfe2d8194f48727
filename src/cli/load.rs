//! # load 子命令 CLI 定义
//!
//! 加载 EDAX HDF5 文件并汇总谱图像
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/load.rs`

use clap::Args;
use std::path::PathBuf;

/// load 子命令参数
#[derive(Args, Debug)]
pub struct LoadArgs {
    /// Input: HDF5 file or directory containing HDF5 files
    pub input: PathBuf,

    /// Glob pattern for input files (directory mode, e.g. "*.h5,*.hdf5")
    #[arg(long, default_value = "*.h5,*.hdf5")]
    pub pattern: String,

    /// Recurse into subdirectories (directory mode)
    #[arg(long, default_value_t = false)]
    pub recursive: bool,

    /// Number of parallel jobs (0 = auto, directory mode only)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// Export a summary of all loaded spectrum images to CSV
    #[arg(long)]
    pub csv: Option<PathBuf>,
}
