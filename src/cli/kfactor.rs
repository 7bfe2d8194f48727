//! # kfactor 子命令 CLI 定义
//!
//! 查询 HD2700 EDS k 因子
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/kfactor.rs`

use super::FamilyArg;
use clap::Args;
use std::path::PathBuf;

/// kfactor 子命令参数
#[derive(Args, Debug)]
pub struct KfactorArgs {
    /// X-ray line codes, e.g. Al_Ka Zr_Ka O_Ka
    #[arg(required_unless_present = "elements")]
    pub lines: Vec<String>,

    /// Build the line list from element symbols instead (comma separated, e.g. "Al,Cu")
    #[arg(short, long, value_delimiter = ',', conflicts_with = "lines")]
    pub elements: Vec<String>,

    /// Line families used with --elements
    #[arg(short, long, value_enum, value_delimiter = ',', default_value = "k")]
    pub family: Vec<FamilyArg>,

    /// Export the table to a CSV file
    #[arg(long)]
    pub csv: Option<PathBuf>,
}
