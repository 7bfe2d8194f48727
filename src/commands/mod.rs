//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `eds/`, `nbed/`, `loader/`, `overlay/`, `utils/`
//! - 子模块: kfactor, calibrate, load, lines, overlay

pub mod calibrate;
pub mod kfactor;
pub mod lines;
pub mod load;
pub mod overlay;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Kfactor(args) => kfactor::execute(args),
        Commands::Calibrate(args) => calibrate::execute(args),
        Commands::Load(args) => load::execute(args),
        Commands::Lines(args) => lines::execute(args),
        Commands::Overlay(args) => overlay::execute(args),
    }
}
