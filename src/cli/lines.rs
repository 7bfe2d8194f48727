//! # lines 子命令 CLI 定义
//!
//! 选择元素并列出其特征 X 射线谱线
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/lines.rs`

use super::FamilyArg;
use clap::Args;

/// lines 子命令参数
#[derive(Args, Debug)]
pub struct LinesArgs {
    /// Element symbols, e.g. Al Cu O
    pub elements: Vec<String>,

    /// Line families to add for every element (comma separated)
    #[arg(short, long, value_enum, value_delimiter = ',', default_value = "k,l,m")]
    pub family: Vec<FamilyArg>,

    /// Line codes (Al_Ka) or elements (Al) to drop from the selection (comma separated)
    #[arg(short = 'x', long, value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// Print the periodic table with the selected elements highlighted
    #[arg(short, long, default_value_t = false)]
    pub table: bool,
}
